// Podium CLI - roster/agenda reconciliation and speaker candidates

mod candidates;
mod exit_codes;
mod input;
mod map;
mod merge;
mod output;

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use exit_codes::{recon_exit_code, store_exit_code, EXIT_ERROR, EXIT_IO, EXIT_SUCCESS, EXIT_USAGE};
use input::InputArgs;
use map::MapCommands;

#[derive(Parser)]
#[command(name = "podium")]
#[command(about = "Reconcile a club roster with agenda mentions and rank speaker candidates")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge agenda mentions into the roster and report unmatched names
    #[command(after_help = "\
Examples:
  podium merge report.json --agenda agenda.csv
  podium merge report.json --agenda agenda.csv --today 2026-10-16 --json
  podium merge report.json --output merged.json --fail-on-unmatched")]
    Merge {
        #[command(flatten)]
        input: InputArgs,

        /// Output JSON to stdout instead of a human summary
        #[arg(long)]
        json: bool,

        /// Write JSON output to file
        #[arg(long)]
        output: Option<std::path::PathBuf>,

        /// Exit 5 when agenda names remain unmatched
        #[arg(long)]
        fail_on_unmatched: bool,
    },

    /// Rank roster members as speaker candidates
    #[command(after_help = "\
Examples:
  podium candidates report.json --agenda agenda.csv
  podium candidates report.json --threshold 42 --json")]
    Candidates {
        #[command(flatten)]
        input: InputArgs,

        /// Days since last speech before a member becomes eligible
        /// (default: candidates.thresholdDays setting, 28)
        #[arg(long)]
        threshold: Option<u32>,

        /// Output JSON to stdout instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the merged roster, most recent speaker first
    #[command(after_help = "\
Examples:
  podium history report.json --agenda agenda.csv
  podium history report.json --json")]
    History {
        #[command(flatten)]
        input: InputArgs,

        /// Output JSON to stdout instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Manage name mappings (agenda name → roster name)
    Map {
        #[command(subcommand)]
        command: MapCommands,
    },
}

fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Merge { input, json, output, fail_on_unmatched } => {
            merge::cmd_merge(input, json, output, fail_on_unmatched)
        }
        Commands::Candidates { input, threshold, json } => {
            candidates::cmd_candidates(input, threshold, json)
        }
        Commands::History { input, json } => merge::cmd_history(input, json),
        Commands::Map { command } => map::cmd_map(command),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

/// Diagnostics go to stderr, filtered by RUST_LOG (default: warn).
/// Library `log` records are forwarded through the subscriber's log bridge.
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn new(code: u8, msg: impl Into<String>) -> Self {
        Self { code, message: msg.into(), hint: None }
    }

    pub fn args(msg: impl Into<String>) -> Self {
        Self::new(EXIT_USAGE, msg)
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Self::new(EXIT_IO, msg)
    }

    pub fn general(msg: impl Into<String>) -> Self {
        Self::new(EXIT_ERROR, msg)
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl From<podium_recon::ReconError> for CliError {
    fn from(err: podium_recon::ReconError) -> Self {
        Self::new(recon_exit_code(&err), err.to_string())
    }
}

impl From<podium_config::StoreError> for CliError {
    fn from(err: podium_config::StoreError) -> Self {
        let code = store_exit_code(&err);
        let hint = matches!(err, podium_config::StoreError::Parse { .. })
            .then(|| "fix or delete the file; it must be a JSON object of name → name".to_string());
        Self { code, message: err.to_string(), hint }
    }
}
