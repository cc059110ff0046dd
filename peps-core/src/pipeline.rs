//! Runs the classifier over a whole table.

use crate::{
    activity::{AnalysisResult, CheckMode},
    classify::{ClassifyOptions, RowOutcome, classify_row},
    roster::Roster,
    table::ActivityTable,
};
use chrono::NaiveDate;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy)]
pub struct AnalysisOptions<'a> {
    pub mode: CheckMode,
    /// Rows dated on or after this day end the scan.
    pub today: NaiveDate,
    pub date_formats: &'a [String],
}

/// Analyses `table` top to bottom and returns the activities needing follow-up.
///
/// The source is assumed to be in chronological order: the scan stops for good at
/// the first row dated today or later, whatever follows it. Results are stably
/// sorted by date so ties keep their row order.
pub fn run(table: &ActivityTable, roster: &Roster, opts: &AnalysisOptions) -> AnalysisResult {
    let classify_opts = ClassifyOptions {
        roster,
        mode: opts.mode,
        today: opts.today,
        date_formats: opts.date_formats,
        width: table.width(),
    };

    let mut result = AnalysisResult::default();
    for (index, row) in table.rows().iter().enumerate() {
        match classify_row(row, &classify_opts) {
            RowOutcome::Stop => {
                debug!(row = index, today = %opts.today, "scan stopped at first non-past row");
                result.stopped_at = Some(index);
                break;
            }
            RowOutcome::Skip(reason) => {
                debug!(row = index, ?reason, "row skipped");
                result.skipped_rows += 1;
            }
            RowOutcome::Clean => debug!(row = index, "activity complete"),
            RowOutcome::Flagged(record) => {
                debug!(row = index, activity = %record.activity, outcome = ?record.outcome, "activity flagged");
                result.activities.push(record);
            }
        }
    }

    result.activities.sort_by_key(|record| record.date);

    info!(
        flagged = result.activities.len(),
        skipped = result.skipped_rows,
        mode = opts.mode.as_ref(),
        "analysis finished"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::NO_PARTICIPATION;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn table(rows: &[&[&str]]) -> ActivityTable {
        ActivityTable::new(
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    fn formats() -> Vec<String> {
        vec!["%Y-%m-%d".to_string()]
    }

    fn roster() -> Roster {
        Roster::from_pairs([("Dupont Marie", "marie@example.org")])
    }

    fn run_hard(t: &ActivityTable, today: NaiveDate) -> AnalysisResult {
        let f = formats();
        let opts = AnalysisOptions {
            mode: CheckMode::Hard,
            today,
            date_formats: &f,
        };
        run(t, &roster(), &opts)
    }

    #[test]
    fn empty_table_yields_empty_result() {
        let result = run_hard(&ActivityTable::default(), d(2024, 1, 10));
        assert!(result.activities.is_empty());
        assert_eq!(result.skipped_rows, 0);
        assert_eq!(result.stopped_at, None);
    }

    #[test]
    fn empty_roster_still_flags() {
        let t = table(&[&["2024-01-01", "Jardin Dupont Marie", "", ""]]);
        let f = formats();
        let opts = AnalysisOptions {
            mode: CheckMode::Soft,
            today: d(2024, 1, 10),
            date_formats: &f,
        };
        let result = run(&t, &Roster::default(), &opts);
        assert_eq!(result.activities.len(), 1);
        assert!(result.activities[0].educators.is_empty());
    }

    #[test]
    fn stops_at_today_and_ignores_later_rows() {
        let today = d(2024, 1, 4);
        let t = table(&[
            &["2024-01-01", "Jardin", "", ""],
            &["2024-01-03", "Cuisine", "", ""],
            &["2024-01-04", "Piscine", "", ""],
            &["2024-01-02", "Sortie annulée", "", ""],
        ]);
        let result = run_hard(&t, today);
        let labels: Vec<&str> = result.activities.iter().map(|a| a.activity.as_str()).collect();
        assert_eq!(labels, vec!["Jardin", "Cuisine"]);
        assert_eq!(result.stopped_at, Some(2));
    }

    #[test]
    fn future_row_stops_even_without_label() {
        let t = table(&[
            &["2024-01-01", "Jardin", "", ""],
            &["Date", "Activité", "", ""],
            &["2024-03-01", "", "", ""],
            &["not a date", "", "", ""],
            &["2024-01-02", "Cuisine", "", ""],
        ]);
        let result = run_hard(&t, d(2024, 2, 1));
        assert_eq!(result.stopped_at, Some(2));
        assert_eq!(result.skipped_rows, 1);
        let labels: Vec<&str> = result.activities.iter().map(|a| a.activity.as_str()).collect();
        assert_eq!(labels, vec!["Jardin"]);
    }

    #[test]
    fn skips_headers_roll_calls_and_blank_rows() {
        let t = table(&[
            &["Date", "Activité", "Description", "Résidents"],
            &["2024-01-01", "Appel du matin", "", ""],
            &["2024-01-01", "", "", ""],
            &["", "", "", ""],
            &["2024-01-02", "Jardin", "", ""],
        ]);
        let result = run_hard(&t, d(2024, 2, 1));
        assert_eq!(result.activities.len(), 1);
        assert_eq!(result.skipped_rows, 4);
        assert_eq!(result.activities[0].errors(), [NO_PARTICIPATION.to_string()]);
    }

    #[test]
    fn output_is_sorted_by_date_with_stable_ties() {
        let t = table(&[
            &["2024-01-05", "E", "", ""],
            &["2024-01-02", "B1", "", ""],
            &["2024-01-09", "I", "", ""],
            &["2024-01-02", "B2", "", ""],
            &["2024-01-01", "A", "", ""],
        ]);
        let result = run_hard(&t, d(2024, 2, 1));
        let labels: Vec<&str> = result.activities.iter().map(|a| a.activity.as_str()).collect();
        assert_eq!(labels, vec!["A", "B1", "B2", "E", "I"]);
    }

    #[test]
    fn clean_activities_are_not_reported() {
        let t = table(&[
            &["2024-01-01", "Jardin", "Plantations", "Alice a participé: arrose"],
            &["2024-01-02", "Cuisine", "Gâteau", "Alice a participé"],
        ]);
        let result = run_hard(&t, d(2024, 2, 1));
        assert_eq!(result.activities.len(), 1);
        assert_eq!(result.activities[0].activity, "Cuisine");
    }
}
