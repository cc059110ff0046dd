use clap::{ArgAction, ArgGroup, Parser, ValueEnum};
use peps_core::CheckMode;
use std::path::PathBuf;

use crate::render::ColorMode;

use super::style::Style;

/// Validation strictness, as accepted on the command line.
#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum ModeArg {
    /// Only checks that at least one resident participated.
    Soft,
    /// Also requires an individual note per participant when a description exists.
    Hard,
}

impl From<ModeArg> for CheckMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Soft => CheckMode::Soft,
            ModeArg::Hard => CheckMode::Hard,
        }
    }
}

/// peps — lists logged activities that need a reminder
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    group(ArgGroup::new("solo").args(["path", "edit_roster", "edit_residents"]).conflicts_with_all(["file", "mail"])),
)]
pub struct Cli {
    /// Prints the roster file location
    #[arg(long, short)]
    pub path: bool,
    /// Opens the roster (employees.json) in your $EDITOR and validates it on save.
    #[arg(long)]
    pub edit_roster: bool,
    /// Opens the residents list (residents.json) in your $EDITOR and validates it on save.
    #[arg(long)]
    pub edit_residents: bool,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
    /// Output style: "long" or "short". Short style prints one line per activity.
    #[arg(long, short, value_enum, env = "PEPS_STYLE", default_value_t = Style::Long)]
    pub style: Style,

    /// Validation mode. Defaults to the `mode` key of config.toml, then `hard`.
    #[arg(long, short, value_enum)]
    pub mode: Option<ModeArg>,
    /// Analyse as if today were this date (e.g. `--today 2024-01-31`).
    /// Rows dated on or after it are not analysed.
    #[arg(long)]
    pub today: Option<String>,
    /// Roster file to use instead of the configured one.
    #[arg(long, env = "PEPS_ROSTER")]
    pub roster: Option<PathBuf>,
    /// CSV field delimiter (e.g. `--delimiter ';'`).
    #[arg(long)]
    pub delimiter: Option<char>,
    /// Prints only the counts of incomplete and cancelled activities.
    #[arg(long)]
    pub count: bool,

    /// Prints a reminder e-mail for the N-th listed activity (1-based).
    #[arg(long, value_name = "N", requires = "file")]
    pub mail: Option<usize>,
    /// Recipient educator. Defaults to the first educator matched for the activity.
    #[arg(long, requires = "mail")]
    pub educator: Option<String>,
    /// CC list overriding `default_cc`.
    #[arg(long, requires = "mail")]
    pub cc: Option<String>,
    /// Leaves the correction reason out of the e-mail body.
    #[arg(long, requires = "mail")]
    pub no_reason: bool,

    /// More logs on stderr (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(long, short, action = ArgAction::Count)]
    pub verbose: u8,

    /// CSV export of the activity log: date, activity, description, residents, extra columns.
    #[arg()]
    pub file: Option<PathBuf>,
}
impl Cli {
    pub fn new() -> Self {
        let cli = Cli::parse();
        cli
    }
}
