//! Per-row decision: skip, stop, clean, or a record needing follow-up.

use crate::{
    activity::{ActivityRecord, CheckMode, NO_PARTICIPATION, Outcome, missing_note},
    cancellation::is_cancelled,
    dates::parse_cell_date,
    residents::{Resident, parse_resident_block},
    roster::Roster,
    table::TableRow,
};
use chrono::NaiveDate;

/// Label fragment identifying roll-call rows, compared lowercased.
const ROLL_CALL: &str = "appel";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    InvalidDate,
    EmptyLabel,
    RollCall,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    /// Not an activity row; dropped silently.
    Skip(SkipReason),
    /// Dated today or later: the scan ends here.
    Stop,
    /// Active and complete; nothing to report.
    Clean,
    Flagged(ActivityRecord),
}

/// Inputs shared by every row of one run.
#[derive(Debug, Clone, Copy)]
pub struct ClassifyOptions<'a> {
    pub roster: &'a Roster,
    pub mode: CheckMode,
    pub today: NaiveDate,
    pub date_formats: &'a [String],
    /// Column count of the table, so the cancellation scan covers every column.
    pub width: usize,
}

/// Runs the whole decision chain for one row, date check included.
pub fn classify_row(row: &TableRow, opts: &ClassifyOptions) -> RowOutcome {
    match parse_cell_date(row.date_cell(), opts.date_formats) {
        None => RowOutcome::Skip(SkipReason::InvalidDate),
        Some(date) if date >= opts.today => RowOutcome::Stop,
        Some(date) => classify_dated_row(date, row, opts),
    }
}

/// Classifies a row whose date is already known to be in the past.
fn classify_dated_row(date: NaiveDate, row: &TableRow, opts: &ClassifyOptions) -> RowOutcome {
    let activity = row.label();
    if activity.is_empty() {
        return RowOutcome::Skip(SkipReason::EmptyLabel);
    }
    if activity.to_lowercase().contains(ROLL_CALL) {
        return RowOutcome::Skip(SkipReason::RollCall);
    }

    let description = row.description();
    let educators = opts.roster.match_all(&activity);
    let residents = parse_resident_block(row.residents_block());

    let outcome = if is_cancelled(&row.joined_text(opts.width)) {
        Outcome::Cancelled
    } else {
        let errors = validate(&residents, &description, opts.mode);
        if errors.is_empty() {
            return RowOutcome::Clean;
        }
        Outcome::Flagged(errors)
    };

    RowOutcome::Flagged(ActivityRecord {
        date,
        activity,
        educators,
        description,
        residents,
        outcome,
    })
}

/// Validation rules for an active (not cancelled) activity.
///
/// Hard mode reports at most one missing note: the first participant without one.
pub fn validate(residents: &[Resident], description: &str, mode: CheckMode) -> Vec<String> {
    let participated = residents.iter().any(Resident::participated);
    if !participated {
        return vec![NO_PARTICIPATION.to_string()];
    }

    let mut errors = Vec::new();
    if mode == CheckMode::Hard && !description.is_empty() {
        if let Some(r) = residents.iter().find(|r| r.participated() && !r.has_note()) {
            errors.push(missing_note(&r.name));
        }
    }
    errors
}
