// Persisted name mappings (agenda key → roster name)
// Stored at ~/.config/podium/name_mappings.json

use std::fs;
use std::path::{Path, PathBuf};

use podium_recon::OverrideMap;

use crate::error::StoreError;

/// File-backed override store. Every write is flushed immediately, so the
/// next reconciliation pass sees it.
#[derive(Debug)]
pub struct FileOverrideStore {
    path: PathBuf,
    map: OverrideMap,
}

impl FileOverrideStore {
    pub fn default_path() -> PathBuf {
        crate::config_dir().join("name_mappings.json")
    }

    /// Load the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let map = match fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => OverrideMap::new(),
            Ok(contents) => serde_json::from_str(&contents).map_err(|e| StoreError::Parse {
                path: path.clone(),
                message: e.to_string(),
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => OverrideMap::new(),
            Err(e) => return Err(StoreError::io(&path, e)),
        };

        log::debug!("loaded {} name mapping(s) from {}", map.len(), path.display());
        Ok(Self { path, map })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key)
    }

    /// Map an agenda key to a roster name and flush.
    pub fn set(&mut self, key: &str, canonical_name: &str) -> Result<bool, StoreError> {
        let changed = self.map.set(key, canonical_name);
        if changed {
            self.flush()?;
        }
        Ok(changed)
    }

    /// Remove a mapping and flush. Returns the removed roster name.
    pub fn delete(&mut self, key: &str) -> Result<Option<String>, StoreError> {
        let removed = self.map.delete(key);
        if removed.is_some() {
            self.flush()?;
        }
        Ok(removed)
    }

    /// Consistent copy for one reconciliation pass.
    pub fn snapshot(&self) -> OverrideMap {
        self.map.clone()
    }

    pub fn map(&self) -> &OverrideMap {
        &self.map
    }

    fn flush(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
            }
        }

        let json = serde_json::to_string_pretty(&self.map)
            .map_err(|e| StoreError::Serialize(e.to_string()))?;

        fs::write(&self.path, json).map_err(|e| StoreError::io(&self.path, e))
    }
}
