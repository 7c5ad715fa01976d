//! Level-status classification and opportunity detection.
//!
//! Four states: Completed, NotApplicable, InProgress, Unknown.
//! - Completed: the tracker shows a check mark (scraped as "Completed")
//! - NotApplicable: empty cell, "N/A" or "-"
//! - InProgress: "<completed> of <total>" anywhere in the text
//! - Unknown: any other text, kept verbatim for display
//!
//! An opportunity is an in-progress level at most one unit from completion.

use std::sync::OnceLock;

use ordered_float::OrderedFloat;
use regex::Regex;

use crate::model::{LevelStatus, Opportunity, PathProgress};

fn units_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)(\d+)\s*of\s*(\d+)").expect("static pattern"))
}

impl LevelStatus {
    /// Classify a raw tracker cell.
    pub fn classify(raw: &str) -> LevelStatus {
        let text = crate::dates::sanitize(raw);

        if text.eq_ignore_ascii_case("completed") {
            return LevelStatus::Completed;
        }
        if text.is_empty() || text.eq_ignore_ascii_case("n/a") || text == "-" {
            return LevelStatus::NotApplicable;
        }

        if let Some(caps) = units_pattern().captures(&text) {
            let completed = caps[1].parse::<u32>();
            let total = caps[2].parse::<u32>();
            if let (Ok(completed), Ok(total)) = (completed, total) {
                return LevelStatus::InProgress { completed, total };
            }
        }

        LevelStatus::Unknown { text }
    }

    /// Completion percentage for in-progress levels (0 when total is 0).
    pub fn percentage(&self) -> Option<f64> {
        match *self {
            LevelStatus::InProgress { completed, total } => Some(if total > 0 {
                f64::from(completed) / f64::from(total) * 100.0
            } else {
                0.0
            }),
            _ => None,
        }
    }

    /// True for in-progress levels with zero or one unit remaining.
    pub fn is_near_complete(&self) -> bool {
        match *self {
            LevelStatus::InProgress { completed, total } => {
                i64::from(total) - i64::from(completed) <= 1
            }
            _ => false,
        }
    }
}

/// Best opportunity across all of one member's paths: highest percentage,
/// first encountered on ties.
pub fn best_opportunity<'a, I>(paths: I) -> Option<Opportunity>
where
    I: IntoIterator<Item = &'a PathProgress>,
{
    let mut best: Option<Opportunity> = None;

    for path in paths {
        for (level_index, status) in path.levels.iter().enumerate() {
            let LevelStatus::InProgress { completed, total } = *status else {
                continue;
            };
            if !status.is_near_complete() {
                continue;
            }
            let percentage = status.percentage().unwrap_or(0.0);

            let better = best
                .as_ref()
                .map_or(true, |b| OrderedFloat(percentage) > OrderedFloat(b.percentage));
            if better {
                best = Some(Opportunity {
                    path_label: path.path_label.clone(),
                    level_index,
                    completed_units: completed,
                    total_units: total,
                    percentage,
                });
            }
        }
    }

    best
}
