//! Agenda feed import: tabular rows → [`Mention`]s.
//!
//! One mention per non-empty speaker cell. Rows without a parseable date are
//! skipped, as are `N/A` speaker cells.

use std::collections::BTreeMap;

use crate::dates::parse_date;
use crate::error::ReconError;
use crate::model::Mention;

pub const DATE_COLUMN: &str = "Date";
pub const SPEAKER_COLUMNS: [&str; 3] = ["Speaker 1", "Speaker 2", "Speaker 3"];

fn clean_header(h: &str) -> String {
    h.trim().trim_matches('"').trim().to_string()
}

fn is_blank_speaker(name: &str) -> bool {
    let name = name.trim();
    name.is_empty() || name.eq_ignore_ascii_case("n/a")
}

/// Load agenda mentions from CSV text with a header row.
pub fn mentions_from_csv(csv_data: &str) -> Result<Vec<Mention>, ReconError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(csv_data.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(clean_header).collect();

    let date_idx = headers
        .iter()
        .position(|h| h == DATE_COLUMN)
        .ok_or_else(|| ReconError::MissingColumn {
            source: "agenda".into(),
            column: DATE_COLUMN.into(),
        })?;

    let speaker_idx: Vec<usize> = SPEAKER_COLUMNS
        .iter()
        .filter_map(|name| headers.iter().position(|h| h == name))
        .collect();
    if speaker_idx.is_empty() {
        log::warn!("agenda has no Speaker 1/2/3 columns; no mentions imported");
    }

    let mut mentions = Vec::new();
    let mut skipped = 0usize;

    for record in reader.records() {
        let record = record?;

        let Some(date) = record.get(date_idx).and_then(parse_date) else {
            skipped += 1;
            continue;
        };

        for &i in &speaker_idx {
            let name = record.get(i).unwrap_or("");
            if !is_blank_speaker(name) {
                mentions.push(Mention::new(name.trim(), date));
            }
        }
    }

    warn_skipped(skipped);
    Ok(mentions)
}

/// Same rules as [`mentions_from_csv`] for rows already decoded into
/// column → value maps (the report's `agendaData` form).
pub fn mentions_from_rows(rows: &[BTreeMap<String, String>]) -> Vec<Mention> {
    let mut mentions = Vec::new();
    let mut skipped = 0usize;

    for row in rows {
        let row: BTreeMap<String, &str> = row
            .iter()
            .map(|(k, v)| (clean_header(k), v.as_str()))
            .collect();

        let Some(date) = row.get(DATE_COLUMN).and_then(|raw| parse_date(raw)) else {
            skipped += 1;
            continue;
        };

        for column in SPEAKER_COLUMNS {
            if let Some(name) = row.get(column) {
                if !is_blank_speaker(name) {
                    mentions.push(Mention::new(name.trim(), date));
                }
            }
        }
    }

    warn_skipped(skipped);
    mentions
}

fn warn_skipped(skipped: usize) {
    if skipped > 0 {
        log::warn!("agenda: skipped {skipped} row(s) without a parseable date");
    }
}
