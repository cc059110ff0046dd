//! Display-side helpers for the review list: tags, counts and label cleanup.

use crate::{
    activity::{ActivityRecord, AnalysisResult},
    normalize::normalize,
    residents::Resident,
};
use std::collections::HashSet;
use strum_macros::AsRefStr;

/// Short category shown next to each flagged activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
pub enum ReviewTag {
    #[strum(serialize = "Annulée")]
    Cancelled,
    #[strum(serialize = "Présences")]
    Attendance,
    #[strum(serialize = "Notes")]
    Notes,
    #[strum(serialize = "Incomplet")]
    Incomplete,
}

impl ReviewTag {
    pub fn of(record: &ActivityRecord) -> Self {
        if record.is_cancelled() {
            return ReviewTag::Cancelled;
        }
        match record.first_error() {
            Some(e) if e.contains("Aucun") => ReviewTag::Attendance,
            Some(e) if e.to_lowercase().contains("note") => ReviewTag::Notes,
            _ => ReviewTag::Incomplete,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub incomplete: usize,
    pub cancelled: usize,
    pub total: usize,
}

impl Summary {
    pub fn of(result: &AnalysisResult) -> Self {
        let cancelled = result.activities.iter().filter(|a| a.is_cancelled()).count();
        let total = result.activities.len();
        Self {
            incomplete: total - cancelled,
            cancelled,
            total,
        }
    }
}

/// Removes educator names from an activity label for compact display.
///
/// A word is dropped when its normalized form equals a matched educator's full
/// name or one of its name parts.
pub fn strip_educators(label: &str, educators: &[String]) -> String {
    let mut tokens: HashSet<String> = HashSet::new();
    for educator in educators {
        let full = normalize(educator);
        tokens.extend(full.split(' ').filter(|p| !p.is_empty()).map(str::to_string));
        tokens.insert(full);
    }

    label
        .split_whitespace()
        .filter(|word| !tokens.contains(&normalize(word)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// First occurrence of each resident name, in order.
pub fn unique_residents(residents: &[Resident]) -> Vec<&Resident> {
    let mut seen = HashSet::new();
    residents
        .iter()
        .filter(|r| seen.insert(r.name.as_str()))
        .collect()
}
