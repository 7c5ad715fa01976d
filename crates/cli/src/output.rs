use std::path::Path;

use chrono::{NaiveDate, SecondsFormat, Utc};
use serde::Serialize;

use crate::CliError;

/// Run metadata attached to JSON reports. `run_at` varies between runs;
/// everything else in a report is a function of the inputs.
#[derive(Debug, Serialize)]
pub struct Meta {
    pub engine_version: &'static str,
    pub run_at: String,
    pub today: NaiveDate,
}

impl Meta {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            engine_version: env!("CARGO_PKG_VERSION"),
            run_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            today,
        }
    }
}

/// Serialize `value`, write it to `output_file` if given, print it if `to_stdout`.
pub fn emit_json<T: Serialize>(
    value: &T,
    to_stdout: bool,
    output_file: Option<&Path>,
) -> Result<(), CliError> {
    let json_str = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::general(format!("JSON serialization error: {e}")))?;

    if let Some(path) = output_file {
        std::fs::write(path, &json_str)
            .map_err(|e| CliError::io(format!("cannot write output: {e}")))?;
        eprintln!("wrote {}", path.display());
    }

    if to_stdout {
        println!("{json_str}");
    }

    Ok(())
}

pub fn fmt_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}
