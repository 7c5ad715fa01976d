use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum StoreError {
    /// File could not be read or written.
    Io { path: PathBuf, message: String },
    /// File exists but is not a JSON object of strings.
    Parse { path: PathBuf, message: String },
    /// In-memory state could not be encoded.
    Serialize(String),
}

impl StoreError {
    pub(crate) fn io(path: &std::path::Path, e: std::io::Error) -> Self {
        Self::Io { path: path.to_path_buf(), message: e.to_string() }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, message } => write!(f, "{}: {message}", path.display()),
            Self::Parse { path, message } => {
                write!(f, "{}: not a valid name mapping file: {message}", path.display())
            }
            Self::Serialize(msg) => write!(f, "cannot encode name mappings: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}
