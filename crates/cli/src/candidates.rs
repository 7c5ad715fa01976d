//! `podium candidates`: reconcile, then rank.

use podium_recon::{rank, reconcile, CandidateRecord};

use crate::input::InputArgs;
use crate::output::emit_json;
use crate::CliError;

pub fn cmd_candidates(
    input: InputArgs,
    threshold: Option<u32>,
    json_output: bool,
) -> Result<(), CliError> {
    let loaded = input.load()?;
    let threshold_days = threshold.unwrap_or(loaded.settings.threshold_days);

    let merged = reconcile(&loaded.identities, &loaded.mentions, &loaded.overrides, loaded.today);
    let candidates = rank(&merged.merged, &loaded.progress, loaded.now, threshold_days);

    if json_output {
        return emit_json(&candidates, true, None);
    }

    println!("{:<28} {:>6}  {}", "NAME", "DAYS", "OPPORTUNITY");
    for c in &candidates {
        println!("{:<28} {:>6}  {}", c.identity.display_name, days_label(c), opportunity_label(c));
    }
    eprintln!(
        "{} candidate(s) out of {} member(s), threshold {} days",
        candidates.len(),
        merged.merged.len(),
        threshold_days
    );

    Ok(())
}

fn days_label(c: &CandidateRecord) -> String {
    match c.days_since_last_speech {
        Some(days) => days.to_string(),
        None => "never".to_string(),
    }
}

fn opportunity_label(c: &CandidateRecord) -> String {
    match c.opportunity {
        Some(ref o) => format!(
            "{} {}: {} of {} ({:.0}%)",
            o.path_label,
            o.level_label(),
            o.completed_units,
            o.total_units,
            o.percentage
        ),
        None => "-".to_string(),
    }
}
