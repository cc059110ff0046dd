use crate::{Config, activity::CheckMode};
use chrono::{Local, NaiveDate};
use std::path::PathBuf;

/// Test helper to create a default `Config` for testing purposes.
///
/// This is the single source of truth for test configuration.
/// If you add a field to `Config`, you only need to update it here.
pub fn mk_config(tmp_dir: PathBuf, reference_date: Option<NaiveDate>) -> Config {
    Config {
        roster_file: tmp_dir.join("employees.json"),
        residents_file: tmp_dir.join("residents.json"),
        editor: None,
        mode: CheckMode::Hard,
        reference_date: reference_date.unwrap_or(Local::now().date_naive()),
        input_date_formats: Config::default_input_date_formats(),
        display_date_format: "%d/%m/%Y".to_string(),
        csv_delimiter: b',',
        default_cc: String::new(),
        unknown_address: "inconnu@example.org".to_string(),
    }
}
