// Configuration loading and durable state

pub mod error;
pub mod overrides;
pub mod settings;

pub use error::StoreError;
pub use overrides::FileOverrideStore;
pub use settings::Settings;

use std::path::PathBuf;

/// `<config_dir>/podium`, falling back to the working directory.
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("podium")
}
