//! Parses the residents block of an activity row.
//!
//! One resident per line. A line containing the participation marker looks like
//! `Alice Dupont a participé: fait du jardinage`; any other line is a bare name.

/// Literal phrase marking that a resident took part in the activity.
pub const PARTICIPATION_MARKER: &str = "a participé";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticipationStatus {
    Participated,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resident {
    pub name: String,
    pub status: ParticipationStatus,
    pub note: String,
}

impl Resident {
    pub fn participated(&self) -> bool {
        self.status == ParticipationStatus::Participated
    }

    pub fn has_note(&self) -> bool {
        !self.note.trim().is_empty()
    }
}

/// Splits `block` into residents, in source order. Blank lines are dropped and
/// repeated names are kept.
pub fn parse_resident_block(block: &str) -> Vec<Resident> {
    block
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(parse_resident_line)
        .collect()
}

fn parse_resident_line(line: &str) -> Resident {
    match line.split_once(PARTICIPATION_MARKER) {
        Some((name, rest)) => Resident {
            name: name.trim().to_string(),
            status: ParticipationStatus::Participated,
            note: rest.replace(':', "").trim().to_string(),
        },
        None => Resident {
            name: line.to_string(),
            status: ParticipationStatus::Unknown,
            note: String::new(),
        },
    }
}
