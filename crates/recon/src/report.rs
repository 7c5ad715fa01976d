//! Club report snapshot: the JSON document written by the scraping side.
//!
//! Every section is optional; the scraper saves whichever pages were open.
//! Conversions into core types happen here, once.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::dates::parse_date;
use crate::error::ReconError;
use crate::import::mentions_from_rows;
use crate::model::{Identity, LevelStatus, Mention, PathProgress, SpeechSource};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubReport {
    #[serde(default)]
    pub speakers_data: Option<SpeakersData>,
    #[serde(default)]
    pub paths_data: Option<PathsData>,
    #[serde(default)]
    pub agenda_data: Option<Vec<BTreeMap<String, String>>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpeakersData {
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub speakers: Vec<RawSpeaker>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSpeaker {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub credential: String,
    #[serde(default)]
    pub highest_achievement: String,
    #[serde(default)]
    pub last_speech: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsData {
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub paths: Vec<RawPath>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPath {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub path_name: String,
    #[serde(default)]
    pub level1: String,
    #[serde(default)]
    pub level2: String,
    #[serde(default)]
    pub level3: String,
    #[serde(default)]
    pub level4: String,
    #[serde(default)]
    pub level5: String,
    #[serde(default)]
    pub path_completion: String,
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty() && s != "-").then(|| s.to_string())
}

impl ClubReport {
    pub fn from_json(json: &str) -> Result<Self, ReconError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Roster members. Rows with an empty name are skipped.
    pub fn identities(&self) -> Vec<Identity> {
        let Some(ref data) = self.speakers_data else {
            return Vec::new();
        };

        data.speakers
            .iter()
            .filter(|s| !s.name.trim().is_empty())
            .map(|s| {
                let last_speech_date = parse_date(&s.last_speech);
                Identity {
                    display_name: s.name.trim().to_string(),
                    credential: non_empty(&s.credential),
                    highest_achievement: non_empty(&s.highest_achievement),
                    last_speech_date,
                    next_speech_date: None,
                    speech_source: last_speech_date.map(|_| SpeechSource::Native),
                }
            })
            .collect()
    }

    /// Path progress with level cells classified.
    pub fn progress(&self) -> Vec<PathProgress> {
        let Some(ref data) = self.paths_data else {
            return Vec::new();
        };

        data.paths
            .iter()
            .filter(|p| !p.name.trim().is_empty())
            .map(|p| PathProgress {
                identity_key: p.name.trim().to_string(),
                path_label: p.path_name.trim().to_string(),
                levels: [&p.level1, &p.level2, &p.level3, &p.level4, &p.level5]
                    .map(|cell| LevelStatus::classify(cell)),
            })
            .collect()
    }

    /// Agenda mentions embedded in the report, if any.
    pub fn mentions(&self) -> Vec<Mention> {
        self.agenda_data
            .as_deref()
            .map(mentions_from_rows)
            .unwrap_or_default()
    }
}
