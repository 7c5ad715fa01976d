//! `podium map`: edit the persisted name mappings.

use std::path::PathBuf;

use clap::Subcommand;

use podium_config::{FileOverrideStore, Settings};
use podium_recon::normalize;

use crate::output::emit_json;
use crate::CliError;

#[derive(Subcommand)]
pub enum MapCommands {
    /// List all name mappings
    #[command(after_help = "\
Examples:
  podium map list
  podium map list --json")]
    List {
        /// Name mapping file (default: settings, then the config directory)
        #[arg(long, env = "PODIUM_OVERRIDES")]
        overrides: Option<PathBuf>,

        /// Output JSON object to stdout
        #[arg(long)]
        json: bool,
    },

    /// Map an agenda name to a roster name
    #[command(after_help = "\
Examples:
  podium map set 'J. Roe' 'Bob Roe'
  podium map set 'roe, bobby' 'Bob Roe'")]
    Set {
        /// Agenda name as printed in the unmatched list (normalized before storing)
        key: String,

        /// Roster display name it refers to
        name: String,

        #[arg(long, env = "PODIUM_OVERRIDES")]
        overrides: Option<PathBuf>,
    },

    /// Remove a name mapping
    #[command(after_help = "\
Examples:
  podium map remove 'j. roe'")]
    Remove {
        key: String,

        #[arg(long, env = "PODIUM_OVERRIDES")]
        overrides: Option<PathBuf>,
    },
}

pub fn cmd_map(cmd: MapCommands) -> Result<(), CliError> {
    match cmd {
        MapCommands::List { overrides, json } => cmd_map_list(overrides, json),
        MapCommands::Set { key, name, overrides } => cmd_map_set(overrides, &key, &name),
        MapCommands::Remove { key, overrides } => cmd_map_remove(overrides, &key),
    }
}

fn open_store(path: Option<PathBuf>) -> Result<FileOverrideStore, CliError> {
    let path = path.unwrap_or_else(|| Settings::load().effective_overrides_path());
    Ok(FileOverrideStore::open(path)?)
}

fn cmd_map_list(path: Option<PathBuf>, json_output: bool) -> Result<(), CliError> {
    let store = open_store(path)?;

    if json_output {
        return emit_json(store.map(), true, None);
    }

    for (key, name) in store.map().iter() {
        println!("{key:<28} → {name}");
    }
    eprintln!("{} mapping(s) in {}", store.map().len(), store.path().display());
    Ok(())
}

fn cmd_map_set(path: Option<PathBuf>, key: &str, name: &str) -> Result<(), CliError> {
    if normalize(key).is_empty() {
        return Err(CliError::args(format!("'{key}' is empty after normalization"))
            .with_hint("use the agenda name, e.g. 'J. Roe'"));
    }
    if name.trim().is_empty() {
        return Err(CliError::args("roster name must not be empty"));
    }

    let mut store = open_store(path)?;
    if store.set(key, name)? {
        eprintln!("mapped \"{}\" → {}", normalize(key), name.trim());
    } else {
        eprintln!("\"{}\" already maps to {}", normalize(key), name.trim());
    }
    Ok(())
}

fn cmd_map_remove(path: Option<PathBuf>, key: &str) -> Result<(), CliError> {
    let mut store = open_store(path)?;
    match store.delete(key)? {
        Some(name) => {
            eprintln!("removed \"{}\" (was {name})", normalize(key));
            Ok(())
        }
        None => Err(CliError::general(format!("no mapping for \"{}\"", normalize(key)))
            .with_hint("podium map list")),
    }
}
