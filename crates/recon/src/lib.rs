//! `podium-recon`: Roster/agenda reconciliation and speaker candidate ranking.
//!
//! Pure engine crate: receives pre-loaded records, returns merged identities,
//! unmatched agenda names and ranked candidates. No CLI or filesystem
//! dependencies; the import adapters take `&str` input.

pub mod aggregate;
pub mod classify;
pub mod dates;
pub mod engine;
pub mod error;
pub mod evidence;
pub mod history;
pub mod import;
pub mod matcher;
pub mod model;
pub mod normalize;
pub mod overrides;
pub mod rank;
pub mod report;

pub use engine::reconcile;
pub use error::ReconError;
pub use history::history;
pub use model::{
    CandidateRecord, Identity, LevelStatus, Mention, Opportunity, PathProgress, Reconciliation,
    SpeechSource, UnmatchedEntry,
};
pub use normalize::normalize;
pub use overrides::OverrideMap;
pub use rank::{rank, DEFAULT_THRESHOLD_DAYS};
pub use report::ClubReport;
