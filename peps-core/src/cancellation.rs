//! Cancellation detection over a whole row.

use crate::normalize::normalize;
use once_cell::sync::Lazy;
use regex::Regex;

/// Root shared by every inflection: annulé, annulée, annulés, annule, annulation...
static CANCELLATION_ROOT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"annul").expect("valid cancellation pattern"));

/// Returns `true` if the normalized `row_text` contains the cancellation root anywhere.
///
/// This is a root substring test: no word boundaries, no distinction between columns.
pub fn is_cancelled(row_text: &str) -> bool {
    CANCELLATION_ROOT.is_match(&normalize(row_text))
}
