//! Staff roster and educator matching.
//!
//! The roster is the `employees.json` mapping of full name to e-mail address.
//! Its key order matters: it drives both matching order and the order of the
//! `educators` list of every activity.

use crate::normalize::normalize;
use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};
use std::{fs, path::Path};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub name: String,
    pub address: String,
    normalized: String,
}

impl RosterEntry {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        let name = name.into();
        let normalized = normalize(&name);
        Self {
            name,
            address: address.into(),
            normalized,
        }
    }
}

/// Read-only, ordered set of staff members. Names are unique.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    /// Builds a roster from `(name, address)` pairs, keeping the first occurrence of a name.
    pub fn from_pairs<I, N, A>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, A)>,
        N: Into<String>,
        A: Into<String>,
    {
        let mut entries: Vec<RosterEntry> = Vec::new();
        for (name, address) in pairs {
            let entry = RosterEntry::new(name, address);
            if entries.iter().any(|e| e.name == entry.name) {
                continue;
            }
            entries.push(entry);
        }
        Self { entries }
    }

    /// Parses a JSON object `{ "Full Name": "address", ... }`, preserving key order.
    ///
    /// Values that are not strings are kept with an empty address. Blank names are
    /// rejected: they would match every activity.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content).context("roster is not valid JSON")?;
        let Value::Object(map) = value else {
            bail!("roster must be a JSON object mapping names to addresses");
        };
        if let Some(name) = map.keys().find(|name| normalize(name).is_empty()) {
            bail!("roster contains a blank name ({name:?})");
        }
        Ok(Self::from_json_map(map))
    }

    fn from_json_map(map: Map<String, Value>) -> Self {
        let pairs = map.into_iter().map(|(name, value)| {
            let address = match value {
                Value::String(s) => s,
                other => {
                    warn!(name = %name, value = %other, "roster address is not a string, ignoring it");
                    String::new()
                }
            };
            (name, address)
        });
        Self::from_pairs(pairs)
    }

    /// Reads and parses the roster file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading roster {}", path.display()))?;
        Self::from_json_str(&content).with_context(|| format!("parsing roster {}", path.display()))
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn address_of(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.address.as_str())
    }

    /// Returns, in roster order, every name whose normalized form occurs in the
    /// normalized `text`.
    ///
    /// This is a plain substring test: a short name also matches inside a
    /// longer word (`"Léa"` matches `"Léandre"`), and a name that normalizes to
    /// `""` matches any text.
    pub fn match_all(&self, text: &str) -> Vec<String> {
        let haystack = normalize(text);
        self.entries
            .iter()
            .filter(|e| haystack.contains(&e.normalized))
            .map(|e| e.name.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn roster() -> Roster {
        Roster::from_pairs([
            ("Dupont Marie", "marie@example.org"),
            ("Lefèvre Élodie", "elodie@example.org"),
            ("Martin Léa", "lea@example.org"),
        ])
    }

    #[test]
    fn matches_accent_and_case_insensitively() {
        let r = roster();
        let found = r.match_all("Atelier peinture - LEFEVRE  elodie et Dupont Marie");
        assert_eq!(found, vec!["Dupont Marie", "Lefèvre Élodie"]);
    }

    #[test]
    fn keeps_roster_order_not_text_order() {
        let r = roster();
        let found = r.match_all("Martin Léa puis Dupont Marie");
        assert_eq!(found, vec!["Dupont Marie", "Martin Léa"]);
    }

    #[test]
    fn no_duplicates_when_name_repeated() {
        let r = roster();
        let found = r.match_all("Dupont Marie, Dupont Marie");
        assert_eq!(found, vec!["Dupont Marie"]);
    }

    #[test]
    fn single_entry_matches_iff_substring() {
        let r = Roster::from_pairs([("Martin Léa", "lea@example.org")]);
        assert_eq!(r.match_all("cuisine avec martin lea"), vec!["Martin Léa"]);
        assert!(r.match_all("cuisine avec Léa Martin").is_empty());
    }

    #[test]
    fn matches_inside_longer_words() {
        // Known limitation: no word boundary is enforced.
        let r = Roster::from_pairs([("Léa", "lea@example.org")]);
        assert_eq!(r.match_all("Sortie avec Léandre"), vec!["Léa"]);
    }

    #[test]
    fn matches_across_line_breaks() {
        let r = roster();
        assert_eq!(r.match_all("Jardin\nDupont\n Marie"), vec!["Dupont Marie"]);
    }

    #[test]
    fn empty_roster_or_text_matches_nothing() {
        assert!(Roster::default().match_all("Dupont Marie").is_empty());
        assert!(roster().match_all("").is_empty());
        assert!(roster().match_all("   ").is_empty());
    }

    #[test]
    fn blank_name_is_a_substring_of_any_text() {
        let r = Roster::from_pairs([("  ", "blank@example.org"), ("Dupont Marie", "m@x")]);
        assert_eq!(r.match_all("Jardin"), vec!["  "]);
        assert_eq!(r.match_all(""), vec!["  "]);
        assert_eq!(r.match_all("Jardin Dupont Marie"), vec!["  ", "Dupont Marie"]);
    }

    #[test]
    fn json_rejects_blank_names() {
        let err = Roster::from_json_str(r#"{ "Dupont Marie": "m@x", "  ": "blank@x" }"#)
            .unwrap_err();
        assert!(err.to_string().contains("blank name"));
        assert!(Roster::from_json_str(r#"{ "\u0301": "mark@x" }"#).is_err());
    }

    #[test]
    fn from_pairs_keeps_first_duplicate() {
        let r = Roster::from_pairs([("A B", "first"), ("A B", "second")]);
        assert_eq!(r.len(), 1);
        assert_eq!(r.address_of("A B"), Some("first"));
    }

    #[test]
    fn json_preserves_key_order() {
        let json = r#"{ "Zoé Zed": "z@x", "Alain Alpha": "a@x", "Marc Milieu": "m@x" }"#;
        let r = Roster::from_json_str(json).unwrap();
        let names: Vec<&str> = r.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Zoé Zed", "Alain Alpha", "Marc Milieu"]);
        assert_eq!(r.address_of("Alain Alpha"), Some("a@x"));
        assert_eq!(r.address_of("Nobody"), None);
    }

    #[test]
    fn json_must_be_an_object() {
        let err = Roster::from_json_str(r#"["a", "b"]"#).unwrap_err();
        assert!(err.to_string().contains("JSON object"));
        assert!(Roster::from_json_str("{ nope").is_err());
    }

    #[test]
    fn json_non_string_address_is_blank() {
        let r = Roster::from_json_str(r#"{ "A B": 42 }"#).unwrap();
        assert_eq!(r.address_of("A B"), Some(""));
    }

    #[test]
    fn load_reads_file_and_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("employees.json");
        let mut f = std::fs::File::create(&path).unwrap();
        write!(f, r#"{{ "Dupont Marie": "marie@example.org" }}"#).unwrap();

        let r = Roster::load(&path).unwrap();
        assert_eq!(r.len(), 1);

        let missing = dir.path().join("missing.json");
        let err = Roster::load(&missing).unwrap_err();
        assert!(err.to_string().contains("reading roster"));
    }
}
