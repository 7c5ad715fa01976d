// Application settings
// Loaded from ~/.config/podium/settings.json

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use podium_recon::DEFAULT_THRESHOLD_DAYS;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Candidates
    #[serde(rename = "candidates.thresholdDays")]
    pub threshold_days: u32,

    // Overrides
    #[serde(rename = "overrides.path")]
    pub overrides_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            threshold_days: DEFAULT_THRESHOLD_DAYS,
            overrides_path: None,  // None = <config_dir>/podium/name_mappings.json
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn config_path() -> PathBuf {
        crate::config_dir().join("settings.json")
    }

    /// Load settings from the default location, falling back to defaults
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load settings from `path`, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents).unwrap_or_else(|e| {
                log::warn!("Error parsing {}: {e}; using default settings", path.display());
                Self::default()
            }),
            Err(e) => {
                log::warn!("Error reading {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Parse settings JSON. Lines starting with `//` are comments.
    pub fn parse(contents: &str) -> Result<Self, serde_json::Error> {
        let cleaned: String = contents
            .lines()
            .filter(|line| !line.trim().starts_with("//"))
            .collect::<Vec<_>>()
            .join("\n");

        serde_json::from_str(&cleaned)
    }

    /// Override store location: explicit setting or the default path
    pub fn effective_overrides_path(&self) -> PathBuf {
        self.overrides_path
            .clone()
            .unwrap_or_else(crate::FileOverrideStore::default_path)
    }
}
