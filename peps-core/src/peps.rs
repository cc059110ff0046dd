use crate::{
    Config,
    activity::AnalysisResult,
    compose::MailSettings,
    pipeline::{AnalysisOptions, run},
    roster::Roster,
    table::ActivityTable,
};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

/// Configuration plus the roster snapshot shared by every analysis of a session.
pub struct Peps {
    pub config: Config,
    pub roster: Roster,
}
impl Peps {
    /// Creates a new `Peps` instance, loading configuration from standard paths.
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        Self::with_config(config)
    }

    /// Creates a new `Peps` instance with a specific `Config`.
    ///
    /// The roster file is read once here.
    pub fn with_config(config: Config) -> Result<Self> {
        let roster = Roster::load(&config.roster_file)?;
        info!(
            staff = roster.len(),
            path = %config.roster_file.display(),
            "roster loaded"
        );
        Ok(Self::with_roster(config, roster))
    }

    pub fn with_roster(config: Config, roster: Roster) -> Self {
        Self { config, roster }
    }

    /// Reads the CSV at `path` and analyses it.
    pub fn analyze_file(&self, path: &Path) -> Result<AnalysisResult> {
        let table = ActivityTable::load(path, self.config.csv_delimiter)
            .with_context(|| format!("loading activity log {}", path.display()))?;
        Ok(self.analyze_table(&table))
    }

    pub fn analyze_table(&self, table: &ActivityTable) -> AnalysisResult {
        let opts = AnalysisOptions {
            mode: self.config.mode,
            today: self.config.reference_date,
            date_formats: &self.config.input_date_formats,
        };
        run(table, &self.roster, &opts)
    }

    pub fn mail_settings(&self) -> MailSettings {
        MailSettings {
            default_cc: self.config.default_cc.clone(),
            unknown_address: self.config.unknown_address.clone(),
            date_format: self.config.display_date_format.clone(),
        }
    }
}
