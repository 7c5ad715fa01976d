//! CLI Exit Code Registry
//!
//! Single source of truth for `podium` exit codes. Scripts rely on them.
//!
//! | Code | Meaning                                                   |
//! |------|-----------------------------------------------------------|
//! | 0    | Success                                                   |
//! | 1    | General error (unspecified)                               |
//! | 2    | Usage error (bad args, unusable override key)             |
//! | 3    | I/O error (cannot read input, cannot write output/store)  |
//! | 4    | Parse error (report JSON, agenda CSV, override file)      |
//! | 5    | Unmatched agenda names present (`--fail-on-unmatched`)    |

use podium_config::StoreError;
use podium_recon::ReconError;

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, missing required options.
/// clap exits with this code on its own for malformed command lines.
pub const EXIT_USAGE: u8 = 2;

/// Input file missing or unreadable, output or store not writable.
pub const EXIT_IO: u8 = 3;

/// Input present but malformed.
pub const EXIT_PARSE: u8 = 4;

/// Reconciliation left agenda names without a roster match.
/// Only returned when `--fail-on-unmatched` is set.
pub const EXIT_UNMATCHED: u8 = 5;

pub fn recon_exit_code(err: &ReconError) -> u8 {
    match err {
        ReconError::Csv(_) | ReconError::MissingColumn { .. } | ReconError::Json(_) => EXIT_PARSE,
    }
}

pub fn store_exit_code(err: &StoreError) -> u8 {
    match err {
        StoreError::Io { .. } => EXIT_IO,
        StoreError::Parse { .. } => EXIT_PARSE,
        StoreError::Serialize(_) => EXIT_ERROR,
    }
}
