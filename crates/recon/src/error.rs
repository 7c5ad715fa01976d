use std::fmt;

/// Failures at the import boundary. The reconciliation and ranking passes
/// themselves never fail.
#[derive(Debug)]
pub enum ReconError {
    /// CSV could not be read (bad quoting, inconsistent row length, etc.).
    Csv(String),
    /// Missing required column in input data.
    MissingColumn { source: String, column: String },
    /// JSON report parse / deserialization error.
    Json(String),
}

impl fmt::Display for ReconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv(msg) => write!(f, "CSV error: {msg}"),
            Self::MissingColumn { source, column } => {
                write!(f, "{source}: missing column '{column}'")
            }
            Self::Json(msg) => write!(f, "report parse error: {msg}"),
        }
    }
}

impl std::error::Error for ReconError {}

impl From<csv::Error> for ReconError {
    fn from(e: csv::Error) -> Self {
        Self::Csv(e.to_string())
    }
}

impl From<serde_json::Error> for ReconError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}
