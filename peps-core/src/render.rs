//! Pure Markdown rendering of one flagged activity.
//!
//! ```text
//! ## Atelier jardin
//! Date : 05/01/2024
//!
//! **Description générale:**
//! Plantations
//!
//! **Résidents :**
//! * Alice (a participé) : arrose
//! * Bob
//!
//! **Présences** Aucun résident n'a participé
//! ```

use crate::{activity::ActivityRecord, review::{ReviewTag, unique_residents}};

pub fn format_date(record: &ActivityRecord, date_format: &str) -> String {
    record.date.format(date_format).to_string()
}

pub fn format_activity_detail(record: &ActivityRecord, date_format: &str) -> String {
    let mut md = format!(
        "## {}\nDate : {}\n\n**Description générale:**\n",
        record.activity,
        format_date(record, date_format)
    );
    if record.description.is_empty() {
        md.push_str("—\n");
    } else {
        md.push_str(&format!("{}\n", record.description));
    }

    if !record.residents.is_empty() {
        md.push_str("\n**Résidents :**\n");
        for r in unique_residents(&record.residents) {
            let mut line = format!("* {}", r.name);
            if r.participated() {
                line.push_str(" (a participé)");
                if !r.note.is_empty() {
                    line.push_str(&format!(" : {}", r.note));
                }
            }
            md.push_str(&line);
            md.push('\n');
        }
    }

    let tag = ReviewTag::of(record);
    if record.errors().is_empty() {
        md.push_str(&format!("\n**{}**\n", tag.as_ref()));
    } else {
        md.push_str(&format!("\n**{}** {}\n", tag.as_ref(), record.errors().join(" ; ")));
    }
    md
}
