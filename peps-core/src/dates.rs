use chrono::{NaiveDate, NaiveDateTime};

/// Datetime shapes spreadsheet exports commonly use for a date cell.
/// Always tried after the configured date formats; the time part is dropped.
const DATETIME_FORMATS: [&str; 5] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

/// Parses the date column of a row.
///
/// Tries every format in `formats` first (e.g. `%d/%m/%Y`), then the datetime shapes above.
/// Returns `None` for empty or unrecognized cells, which callers treat as "not an activity row".
///
/// # Examples
///
/// ```
/// # use chrono::NaiveDate;
/// # use peps_core::dates::parse_cell_date;
/// let formats = vec!["%d/%m/%Y".to_string()];
///
/// assert_eq!(
///     parse_cell_date("05/01/2024", &formats),
///     NaiveDate::from_ymd_opt(2024, 1, 5)
/// );
/// assert_eq!(
///     parse_cell_date("2024-01-05 00:00:00", &formats),
///     NaiveDate::from_ymd_opt(2024, 1, 5)
/// );
/// assert_eq!(parse_cell_date("Date", &formats), None);
/// ```
pub fn parse_cell_date(cell: &str, formats: &[String]) -> Option<NaiveDate> {
    let cell = cell.trim();
    if cell.is_empty() {
        return None;
    }
    formats
        .iter()
        .filter_map(|fmt| NaiveDate::parse_from_str(cell, fmt).ok())
        .next()
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .filter_map(|fmt| NaiveDateTime::parse_from_str(cell, fmt).ok())
                .map(|dt| dt.date())
                .next()
        })
}
