//! `podium merge` and `podium history`.

use std::path::PathBuf;

use serde::Serialize;

use podium_recon::engine::reconcile_with_summary;
use podium_recon::model::ReconSummary;
use podium_recon::{history, Identity, UnmatchedEntry};

use crate::exit_codes::EXIT_UNMATCHED;
use crate::input::InputArgs;
use crate::output::{emit_json, fmt_date, Meta};
use crate::CliError;

#[derive(Serialize)]
struct MergeReport<'a> {
    meta: Meta,
    summary: &'a ReconSummary,
    merged: &'a [Identity],
    unmatched: &'a [UnmatchedEntry],
}

pub fn cmd_merge(
    input: InputArgs,
    json_output: bool,
    output_file: Option<PathBuf>,
    fail_on_unmatched: bool,
) -> Result<(), CliError> {
    let loaded = input.load()?;
    let (result, summary) = reconcile_with_summary(
        &loaded.identities,
        &loaded.mentions,
        &loaded.overrides,
        loaded.today,
    );

    if json_output || output_file.is_some() {
        let report = MergeReport {
            meta: Meta::new(loaded.today),
            summary: &summary,
            merged: &result.merged,
            unmatched: &result.unmatched,
        };
        emit_json(&report, json_output, output_file.as_deref())?;
    }

    // Human summary to stderr
    eprintln!("{summary}");
    for u in &result.unmatched {
        eprintln!(
            "  unmatched: {:<28} (key \"{}\", last seen {})",
            u.original_name, u.key, u.most_recent_date
        );
    }
    if !result.unmatched.is_empty() {
        eprintln!("map with: podium map set <key> <roster name>");
    }

    if fail_on_unmatched && !result.unmatched.is_empty() {
        return Err(CliError::new(
            EXIT_UNMATCHED,
            format!("{} agenda name(s) unmatched", result.unmatched.len()),
        ));
    }

    Ok(())
}

pub fn cmd_history(input: InputArgs, json_output: bool) -> Result<(), CliError> {
    let loaded = input.load()?;
    let (result, summary) = reconcile_with_summary(
        &loaded.identities,
        &loaded.mentions,
        &loaded.overrides,
        loaded.today,
    );
    let ordered = history(&result.merged);

    if json_output {
        return emit_json(&ordered, true, None);
    }

    println!("{:<28} {:<12} {:<12} {}", "NAME", "LAST", "NEXT", "SOURCE");
    for identity in &ordered {
        println!(
            "{:<28} {:<12} {:<12} {}",
            identity.display_name,
            fmt_date(identity.last_speech_date),
            fmt_date(identity.next_speech_date),
            identity.speech_source.map(|s| s.to_string()).unwrap_or_else(|| "-".into()),
        );
    }
    eprintln!("{summary}");

    Ok(())
}
