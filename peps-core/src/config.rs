use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::warn;

use crate::activity::CheckMode;

#[derive(Debug, Clone)]
pub struct Config {
    /// JSON object mapping staff full names to e-mail addresses. Key order is significant.
    pub roster_file: PathBuf,
    /// Residents list, only opened for editing.
    pub residents_file: PathBuf,
    /// Preferred editor name/binary. Optional; the CLI will fall back to $VISUAL/$EDITOR.
    pub editor: Option<String>,
    pub mode: CheckMode,
    /// Rows dated on or after this day end the analysis. Today unless overridden.
    pub reference_date: NaiveDate,
    /// Formats tried, in order, on the date column (e.g. `%d/%m/%Y`).
    pub input_date_formats: Vec<String>,
    /// Format used for dates in listings and e-mails.
    pub display_date_format: String,
    pub csv_delimiter: u8,
    pub default_cc: String,
    /// Recipient used when an educator has no roster address.
    pub unknown_address: String,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    roster_file: Option<PathBuf>,
    residents_file: Option<PathBuf>,
    editor: Option<String>,
    mode: Option<CheckMode>,
    input_date_formats: Option<Vec<String>>,
    display_date_format: Option<String>,
    csv_delimiter: Option<char>,
    default_cc: Option<String>,
    unknown_address: Option<String>,
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native) and apply defaults.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config()?;
        Ok(Self::from_file_config(file_config))
    }

    fn from_file_config(file_config: FileConfig) -> Self {
        let csv_delimiter = file_config
            .csv_delimiter
            .and_then(Self::parse_delimiter)
            .unwrap_or(b',');

        Self {
            roster_file: file_config
                .roster_file
                .unwrap_or_else(|| Self::data_file("employees.json")),
            residents_file: file_config
                .residents_file
                .unwrap_or_else(|| Self::data_file("residents.json")),
            editor: file_config.editor,
            mode: file_config.mode.unwrap_or_default(),
            reference_date: Local::now().date_naive(),
            input_date_formats: file_config
                .input_date_formats
                .unwrap_or_else(Self::default_input_date_formats),
            display_date_format: file_config
                .display_date_format
                .unwrap_or_else(|| "%d/%m/%Y".to_string()),
            csv_delimiter,
            default_cc: file_config.default_cc.unwrap_or_default(),
            unknown_address: file_config
                .unknown_address
                .unwrap_or_else(|| "inconnu@jardinarlon.be".to_string()),
        }
    }

    pub fn default_input_date_formats() -> Vec<String> {
        ["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y", "%Y/%m/%d"]
            .iter()
            .map(|f| f.to_string())
            .collect()
    }

    /// CSV delimiters must be a single ASCII character.
    pub fn parse_delimiter(c: char) -> Option<u8> {
        if c.is_ascii() {
            Some(c as u8)
        } else {
            warn!(delimiter = %c, "ignoring non-ASCII CSV delimiter");
            None
        }
    }

    /// Default data location: `{data_dir}/peps/{name}`
    /// - macOS:   `~/Library/Application Support/peps`
    /// - Linux:   `$XDG_DATA_HOME/peps` or `~/.local/share/peps`
    /// - Windows: `%APPDATA%\peps`
    fn data_file(name: &str) -> PathBuf {
        if let Some(base) = BaseDirs::new() {
            base.data_dir().join("peps").join(name)
        } else {
            PathBuf::from("./peps").join(name)
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b.home_dir().join(".config").join("peps").join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("peps").join("config.toml");
            v.push(native);
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}
