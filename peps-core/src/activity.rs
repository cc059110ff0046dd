//! Activity records produced by the analysis.

use crate::residents::Resident;
use chrono::NaiveDate;
use serde::Deserialize;
use strum_macros::{AsRefStr, EnumIter, EnumString};

/// Error attached when nobody is marked as having participated.
pub const NO_PARTICIPATION: &str = "Aucun résident n'a participé";

/// Error attached, in hard mode, to the first participant without an individual note.
pub fn missing_note(name: &str) -> String {
    format!("{name} a participé sans note individuelle")
}

/// How strict validation of active activities is.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, EnumIter, AsRefStr, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum CheckMode {
    /// Only checks that somebody participated.
    Soft,
    /// Also checks individual notes when a general description is present.
    #[default]
    Hard,
}

/// Why an activity needs follow-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Cancelled,
    /// Never empty.
    Flagged(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityRecord {
    pub date: NaiveDate,
    /// The label as found in the table (cleaned, educators not removed).
    pub activity: String,
    /// Matched roster names, in roster order.
    pub educators: Vec<String>,
    pub description: String,
    pub residents: Vec<Resident>,
    pub outcome: Outcome,
}

impl ActivityRecord {
    pub fn is_cancelled(&self) -> bool {
        matches!(self.outcome, Outcome::Cancelled)
    }

    /// Validation errors; empty for cancelled activities.
    pub fn errors(&self) -> &[String] {
        match &self.outcome {
            Outcome::Cancelled => &[],
            Outcome::Flagged(errors) => errors,
        }
    }

    pub fn first_error(&self) -> Option<&str> {
        self.errors().first().map(String::as_str)
    }
}

/// The flagged activities of one run, ascending by date.
#[derive(Debug, Default)]
pub struct AnalysisResult {
    pub activities: Vec<ActivityRecord>,
    /// Rows dropped silently (unparsable date, empty label, roll call).
    pub skipped_rows: usize,
    /// Index of the first row dated today or later, where the scan stopped.
    pub stopped_at: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    fn record(outcome: Outcome) -> ActivityRecord {
        ActivityRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            activity: "Jardin".to_string(),
            educators: Vec::new(),
            description: String::new(),
            residents: Vec::new(),
            outcome,
        }
    }

    #[test]
    fn cancelled_record_has_no_errors() {
        let r = record(Outcome::Cancelled);
        assert!(r.is_cancelled());
        assert!(r.errors().is_empty());
        assert_eq!(r.first_error(), None);
    }

    #[test]
    fn flagged_record_exposes_errors() {
        let r = record(Outcome::Flagged(vec![NO_PARTICIPATION.to_string()]));
        assert!(!r.is_cancelled());
        assert_eq!(r.first_error(), Some(NO_PARTICIPATION));
    }

    #[test]
    fn missing_note_message() {
        assert_eq!(
            missing_note("Alice Dupont"),
            "Alice Dupont a participé sans note individuelle"
        );
    }

    #[test]
    fn mode_parses_from_text() {
        assert_eq!(CheckMode::from_str("soft").unwrap(), CheckMode::Soft);
        assert_eq!(CheckMode::from_str("HARD").unwrap(), CheckMode::Hard);
        assert!(CheckMode::from_str("medium").is_err());
        assert_eq!(CheckMode::default(), CheckMode::Hard);
        let names: Vec<String> = CheckMode::iter().map(|m| m.as_ref().to_string()).collect();
        assert_eq!(names, vec!["soft", "hard"]);
    }
}
