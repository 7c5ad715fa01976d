//! Shared loading for the reconciling commands: report, agenda, overrides, pivot date.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use clap::Args;

use podium_config::{FileOverrideStore, Settings};
use podium_recon::import::mentions_from_csv;
use podium_recon::{ClubReport, Identity, Mention, OverrideMap, PathProgress};

use crate::CliError;

#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Club report JSON (speakersData, pathsData, optional agendaData)
    pub report: PathBuf,

    /// Agenda CSV (Date, Speaker 1..3 columns). Combined with agendaData from the report
    #[arg(long)]
    pub agenda: Option<PathBuf>,

    /// Reference date YYYY-MM-DD (default: local today)
    #[arg(long, value_parser = parse_day)]
    pub today: Option<NaiveDate>,

    /// Name mapping file (default: overrides.path setting, then
    /// <config_dir>/podium/name_mappings.json)
    #[arg(long, env = "PODIUM_OVERRIDES")]
    pub overrides: Option<PathBuf>,
}

fn parse_day(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

/// Everything one reconciliation pass needs, read once.
pub struct Loaded {
    pub identities: Vec<Identity>,
    pub progress: Vec<PathProgress>,
    pub mentions: Vec<Mention>,
    pub overrides: OverrideMap,
    pub today: NaiveDate,
    pub now: NaiveDateTime,
    pub settings: Settings,
}

impl InputArgs {
    pub fn load(&self) -> Result<Loaded, CliError> {
        let settings = Settings::load();

        let json = read_input(&self.report)?;
        let report = ClubReport::from_json(&json)
            .map_err(|e| CliError::from(e).with_hint(format!("in {}", self.report.display())))?;

        let mut mentions = report.mentions();
        if let Some(ref agenda) = self.agenda {
            let csv = read_input(agenda)?;
            mentions.extend(mentions_from_csv(&csv)?);
        }

        let overrides_path = self
            .overrides
            .clone()
            .unwrap_or_else(|| settings.effective_overrides_path());
        let overrides = FileOverrideStore::open(overrides_path)?.snapshot();

        // A fixed --today pins the ranking clock to midnight so runs repeat exactly.
        let (today, now) = match self.today {
            Some(day) => (day, day.and_time(NaiveTime::MIN)),
            None => {
                let now = Local::now().naive_local();
                (now.date(), now)
            }
        };

        let identities = report.identities();
        let progress = report.progress();

        tracing::debug!(
            identities = identities.len(),
            paths = progress.len(),
            mentions = mentions.len(),
            overrides = overrides.len(),
            %today,
            "inputs loaded"
        );

        Ok(Loaded { identities, progress, mentions, overrides, today, now, settings })
    }
}

fn read_input(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path)
        .map_err(|e| CliError::io(format!("cannot read {}: {e}", path.display())))
}
