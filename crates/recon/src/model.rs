use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Where an identity's speech dates came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeechSource {
    /// Scraped from the official roster.
    Native,
    /// Taken from the agenda feed during reconciliation.
    Agenda,
}

impl std::fmt::Display for SpeechSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Native => write!(f, "native"),
            Self::Agenda => write!(f, "agenda"),
        }
    }
}

/// A roster member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highest_achievement: Option<String>,
    #[serde(default, with = "crate::dates::lenient")]
    pub last_speech_date: Option<NaiveDate>,
    #[serde(default, with = "crate::dates::lenient")]
    pub next_speech_date: Option<NaiveDate>,
    #[serde(default)]
    pub speech_source: Option<SpeechSource>,
}

impl Identity {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            credential: None,
            highest_achievement: None,
            last_speech_date: None,
            next_speech_date: None,
            speech_source: None,
        }
    }

    pub fn with_last_speech(mut self, date: NaiveDate) -> Self {
        self.last_speech_date = Some(date);
        self.speech_source = Some(SpeechSource::Native);
        self
    }
}

/// One dated occurrence of a name in the agenda feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mention {
    pub raw_name: String,
    pub occurs_on: NaiveDate,
}

impl Mention {
    pub fn new(raw_name: impl Into<String>, occurs_on: NaiveDate) -> Self {
        Self {
            raw_name: raw_name.into(),
            occurs_on,
        }
    }
}

/// Classified status of one path level. Built once at the import boundary
/// by [`LevelStatus::classify`](crate::classify); the ranking pass never
/// looks at raw text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LevelStatus {
    Completed,
    NotApplicable,
    InProgress { completed: u32, total: u32 },
    Unknown { text: String },
}

/// Per-member progress through one education path (five levels).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathProgress {
    pub identity_key: String,
    pub path_label: String,
    pub levels: [LevelStatus; 5],
}

// ---------------------------------------------------------------------------
// Grouping
// ---------------------------------------------------------------------------

/// All mentions sharing one resolved key.
#[derive(Debug, Clone)]
pub struct MentionGroup {
    pub key: String,
    /// First raw name seen for this key, kept for display.
    pub original_name: String,
    pub dates: Vec<NaiveDate>,
}

impl MentionGroup {
    pub fn most_recent(&self) -> Option<NaiveDate> {
        self.dates.iter().max().copied()
    }
}

// ---------------------------------------------------------------------------
// Reconciliation output
// ---------------------------------------------------------------------------

/// A resolved agenda key that no roster identity matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnmatchedEntry {
    pub key: String,
    pub original_name: String,
    pub most_recent_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reconciliation {
    pub merged: Vec<Identity>,
    pub unmatched: Vec<UnmatchedEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReconSummary {
    pub identities: usize,
    pub matched_identities: usize,
    pub last_updated: usize,
    pub next_updated: usize,
    pub unmatched: usize,
}

// ---------------------------------------------------------------------------
// Ranking output
// ---------------------------------------------------------------------------

/// A near-complete path level.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    pub path_label: String,
    /// Zero-based level index (0 = "Level 1").
    pub level_index: usize,
    pub completed_units: u32,
    pub total_units: u32,
    pub percentage: f64,
}

impl Opportunity {
    pub fn level_label(&self) -> String {
        format!("Level {}", self.level_index + 1)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRecord {
    pub identity: Identity,
    /// `None` means never spoken (or no parseable date): infinitely long ago.
    pub days_since_last_speech: Option<u32>,
    pub opportunity: Option<Opportunity>,
}
