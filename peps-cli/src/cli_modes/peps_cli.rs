use crate::{
    Cli, Style,
    cli_modes::{
        CliModeResult,
        editor_utils::{check_json, edit_json_file, resolve_editor},
    },
    render::{RenderOptions, Renderer},
};
use anyhow::{Context, Result, bail};
use peps_core::{
    AnalysisResult, ComposeState, Config, Peps, Roster, Summary, compose_message,
    dates::parse_cell_date,
};
use std::path::Path;
use tracing::debug;

pub struct PepsCli {
    cli: Cli,
    renderer: Renderer,
    config: Config,
}
impl PepsCli {
    /// Applies command-line overrides on top of the loaded configuration.
    pub fn new(cli: Cli, mut config: Config) -> Result<Self> {
        if let Some(mode) = cli.mode {
            config.mode = mode.into();
        }
        if let Some(roster) = &cli.roster {
            config.roster_file = roster.clone();
        }
        if let Some(delimiter) = cli.delimiter {
            match Config::parse_delimiter(delimiter) {
                Some(d) => config.csv_delimiter = d,
                None => bail!("the CSV delimiter must be a single ASCII character"),
            }
        }
        if let Some(today) = &cli.today {
            config.reference_date = parse_cell_date(today, &config.input_date_formats)
                .with_context(|| format!("'{today}' is not a valid date"))?;
        }
        debug!(?config, "effective configuration");

        let renderer = Renderer::new(Some(RenderOptions {
            date_format: config.display_date_format.clone(),
            use_color: cli.color.enabled(),
            short_mode: matches!(cli.style, Style::Short),
        }));
        Ok(PepsCli {
            cli,
            renderer,
            config,
        })
    }

    pub fn run(self) -> Result<()> {
        if self.cli.path {
            self.renderer
                .print_info(&format!("{}", self.config.roster_file.display()));
            return Ok(());
        }

        if let CliModeResult::Finish = self.roster_mode()? {
            return Ok(());
        };

        if let CliModeResult::Finish = self.analyze_mode()? {
            return Ok(());
        };

        self.renderer
            .print_info("Nothing to do. Pass a CSV activity log, e.g. `peps activites.csv`.");
        Ok(())
    }

    /// `--edit-roster` / `--edit-residents`
    pub fn roster_mode(&self) -> Result<CliModeResult> {
        let editor = resolve_editor(&self.config.editor)?;
        if self.cli.edit_roster {
            let path = &self.config.roster_file;
            edit_json_file(&editor, path, |content| {
                Roster::from_json_str(content).map(|_| ())
            })?;
            self.renderer
                .print_info(&format!("Roster saved to {}", path.display()));
            return Ok(CliModeResult::Finish);
        }
        if self.cli.edit_residents {
            let path = &self.config.residents_file;
            edit_json_file(&editor, path, check_json)?;
            self.renderer
                .print_info(&format!("Residents saved to {}", path.display()));
            return Ok(CliModeResult::Finish);
        }
        Ok(CliModeResult::NothingToDo)
    }

    /// Analyses the activity log, then lists it or drafts a reminder for `--mail N`.
    pub fn analyze_mode(&self) -> Result<CliModeResult> {
        let Some(file) = &self.cli.file else {
            return Ok(CliModeResult::NothingToDo);
        };
        let peps = Peps::with_config(self.config.clone())?;
        let result = peps.analyze_file(file)?;

        if let Some(n) = self.cli.mail {
            self.mail_mode(&peps, &result, n)?;
            return Ok(CliModeResult::Finish);
        }

        self.print_results(&result, file);
        Ok(CliModeResult::Finish)
    }

    fn mail_mode(&self, peps: &Peps, result: &AnalysisResult, n: usize) -> Result<()> {
        let record = n
            .checked_sub(1)
            .and_then(|i| result.activities.get(i))
            .with_context(|| {
                format!(
                    "no activity #{n}: {} activities need follow-up",
                    result.activities.len()
                )
            })?;

        let educator = match &self.cli.educator {
            Some(name) => {
                if !record.educators.contains(name) {
                    bail!(
                        "{name} is not an educator of this activity (found: {})",
                        record.educators.join(", ")
                    );
                }
                name.clone()
            }
            None => match record.educators.first() {
                Some(first) => first.clone(),
                None => {
                    self.renderer.print_info("Aucun éducateur trouvé");
                    self.renderer
                        .print_md("⚠️ Aucun employé n'est assigné à cette activité.\n");
                    return Ok(());
                }
            },
        };

        let state = ComposeState {
            educator,
            cc: self.cli.cc.clone(),
            include_reason: !self.cli.no_reason,
        };
        let draft = compose_message(record, &state, &peps.roster, &peps.mail_settings());
        draft.validate()?;
        self.renderer.print_draft(&draft);
        Ok(())
    }

    fn print_results(&self, result: &AnalysisResult, file: &Path) {
        let summary = Summary::of(result);
        if self.cli.count {
            self.renderer.print_summary(&summary);
            return;
        }

        if result.activities.is_empty() {
            self.renderer.print_info(&format!(
                "Nothing to follow up in {}.",
                file.display()
            ));
            return;
        }
        self.renderer.print_activities(result);
        self.renderer.print_summary(&summary);
    }
}
