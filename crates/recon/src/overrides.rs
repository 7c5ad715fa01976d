use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::normalize::normalize;

/// Human-curated corrections: agenda-side normalized key → canonical roster name.
///
/// Keys are always mention-side normalized keys. Values are free text and are
/// re-normalized by the engine before they are used as a join key.
/// Deserialized maps are rebuilt through [`OverrideMap::set`], so hand-edited
/// files obey the same key rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OverrideMap(BTreeMap<String, String>);

impl OverrideMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canonical name chosen for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Record a mapping. The key is normalized first; empty keys or names are
    /// ignored. Returns true when the map changed.
    pub fn set(&mut self, key: &str, canonical_name: &str) -> bool {
        let key = normalize(key);
        let name = canonical_name.trim();
        if key.is_empty() || name.is_empty() {
            return false;
        }
        self.0.insert(key, name.to_string()).as_deref() != Some(name)
    }

    /// Remove a mapping. Returns the removed canonical name.
    pub fn delete(&mut self, key: &str) -> Option<String> {
        self.0.remove(key).or_else(|| self.0.remove(&normalize(key)))
    }

    /// Join key for a mention's normalized key: the override's normalized
    /// target when present, the key itself otherwise.
    pub fn resolve(&self, key: &str) -> String {
        match self.get(key) {
            Some(target) => normalize(target),
            None => key.to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for OverrideMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            let (k, v) = (k.into(), v.into());
            map.set(&k, &v);
        }
        map
    }
}

impl<'de> Deserialize<'de> for OverrideMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, String>::deserialize(deserializer)?;
        Ok(raw.into_iter().collect())
    }
}
