//! Text canonicalization shared by every comparison in the analysis.

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Hyphen and dash variants folded to a plain ASCII `-`.
const DASHES: [char; 7] = [
    '\u{2010}', // hyphen
    '\u{2011}', // non-breaking hyphen
    '\u{2012}', // figure dash
    '\u{2013}', // en dash
    '\u{2014}', // em dash
    '\u{2015}', // horizontal bar
    '\u{2212}', // minus sign
];

/// Canonicalizes `text` for comparisons.
///
/// - lowercases
/// - strips accents (NFD, then combining marks dropped)
/// - folds every dash variant to `-`
/// - collapses whitespace runs (newlines and tabs included) to one space, trimmed
///
/// The result is stable: `normalize(&normalize(t)) == normalize(t)`.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let folded: String = text
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| if DASHES.contains(&c) { '-' } else { c })
        .collect();

    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}
