//! Reminder e-mail drafting.
//!
//! Everything the review screen lets the operator toggle lives in [`ComposeState`];
//! drafting is a pure function of that state, the record and the roster.

use crate::{activity::ActivityRecord, roster::Roster};
use anyhow::{Result, bail};

const REASON_ATTENDANCE: &str = "Il faut corriger la participation.";
const REASON_NOTES: &str = "Il faut corriger les descriptions générales et / ou individuelles.";
const REASON_CANCELLED: &str = "Il faut corriger la participation des résidents.";

/// Operator choices for one draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeState {
    pub educator: String,
    /// Overrides [`MailSettings::default_cc`] when set and not blank.
    pub cc: Option<String>,
    pub include_reason: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailSettings {
    pub default_cc: String,
    /// Used as recipient when the educator has no roster address.
    pub unknown_address: String,
    pub date_format: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDraft {
    pub to: String,
    pub cc: String,
    pub subject: String,
    pub body: String,
}

impl MessageDraft {
    /// Checks the fields a mail client needs before sending.
    pub fn validate(&self) -> Result<()> {
        if self.to.trim().is_empty() {
            bail!("Veuillez spécifier un destinataire");
        }
        if self.subject.trim().is_empty() {
            bail!("Veuillez spécifier un objet");
        }
        if self.body.trim().is_empty() {
            bail!("Veuillez rédiger un message");
        }
        Ok(())
    }
}

/// Correction hint matching the record's first error.
pub fn reason_for(record: &ActivityRecord) -> Option<&'static str> {
    if record.is_cancelled() {
        return Some(REASON_CANCELLED);
    }
    match record.first_error() {
        Some(e) if e.contains("Aucun") => Some(REASON_ATTENDANCE),
        Some(e) if e.to_lowercase().contains("note") => Some(REASON_NOTES),
        _ => None,
    }
}

/// Names are stored "Last First": the greeting uses the last word.
fn first_name(full_name: &str) -> &str {
    full_name.split_whitespace().last().unwrap_or(full_name)
}

pub fn compose_message(
    record: &ActivityRecord,
    state: &ComposeState,
    roster: &Roster,
    settings: &MailSettings,
) -> MessageDraft {
    let to = roster
        .address_of(&state.educator)
        .filter(|a| !a.trim().is_empty())
        .unwrap_or(&settings.unknown_address)
        .to_string();

    let cc = state
        .cc
        .as_deref()
        .filter(|cc| !cc.trim().is_empty())
        .unwrap_or(&settings.default_cc)
        .to_string();

    let date = record.date.format(&settings.date_format).to_string();
    let subject = format!("Rappel encodage — {date}");

    let mut body = format!(
        "Salut {},\n\nMoyen que tu complètes tes encodages stp:\n\n- {} : {}",
        first_name(&state.educator),
        date,
        record.activity
    );
    if state.include_reason {
        if let Some(reason) = reason_for(record) {
            body.push('\n');
            body.push_str(reason);
        }
    }
    body.push_str("\n\nN'hésite pas si tu as des questions.\nBien à toi,");

    MessageDraft {
        to,
        cc,
        subject,
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::{NO_PARTICIPATION, Outcome, missing_note};
    use chrono::NaiveDate;

    fn record(outcome: Outcome) -> ActivityRecord {
        ActivityRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            activity: "Jardin Dupont Marie".to_string(),
            educators: vec!["Dupont Marie".to_string()],
            description: String::new(),
            residents: Vec::new(),
            outcome,
        }
    }

    fn roster() -> Roster {
        Roster::from_pairs([("Dupont Marie", "marie@example.org"), ("Sans Adresse", "")])
    }

    fn settings() -> MailSettings {
        MailSettings {
            default_cc: "direction@example.org".to_string(),
            unknown_address: "inconnu@example.org".to_string(),
            date_format: "%d/%m/%Y".to_string(),
        }
    }

    fn state(educator: &str) -> ComposeState {
        ComposeState {
            educator: educator.to_string(),
            cc: None,
            include_reason: true,
        }
    }

    #[test]
    fn full_draft_for_missing_participation() {
        let r = record(Outcome::Flagged(vec![NO_PARTICIPATION.to_string()]));
        let draft = compose_message(&r, &state("Dupont Marie"), &roster(), &settings());
        assert_eq!(draft.to, "marie@example.org");
        assert_eq!(draft.cc, "direction@example.org");
        assert_eq!(draft.subject, "Rappel encodage — 05/01/2024");
        assert_eq!(
            draft.body,
            "Salut Marie,\n\n\
             Moyen que tu complètes tes encodages stp:\n\n\
             - 05/01/2024 : Jardin Dupont Marie\n\
             Il faut corriger la participation.\n\n\
             N'hésite pas si tu as des questions.\n\
             Bien à toi,"
        );
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn reason_depends_on_outcome() {
        assert_eq!(
            reason_for(&record(Outcome::Flagged(vec![missing_note("Bob")]))),
            Some(REASON_NOTES)
        );
        assert_eq!(reason_for(&record(Outcome::Cancelled)), Some(REASON_CANCELLED));
        assert_eq!(
            reason_for(&record(Outcome::Flagged(vec!["autre".to_string()]))),
            None
        );
    }

    #[test]
    fn reason_can_be_turned_off() {
        let r = record(Outcome::Flagged(vec![NO_PARTICIPATION.to_string()]));
        let mut s = state("Dupont Marie");
        s.include_reason = false;
        let draft = compose_message(&r, &s, &roster(), &settings());
        assert!(!draft.body.contains("Il faut"));
        assert!(draft.body.contains("- 05/01/2024 : Jardin Dupont Marie\n\nN'hésite"));
    }

    #[test]
    fn manual_cc_overrides_default() {
        let r = record(Outcome::Cancelled);
        let mut s = state("Dupont Marie");
        s.cc = Some("chef@example.org".to_string());
        assert_eq!(compose_message(&r, &s, &roster(), &settings()).cc, "chef@example.org");

        s.cc = Some("   ".to_string());
        assert_eq!(
            compose_message(&r, &s, &roster(), &settings()).cc,
            "direction@example.org"
        );
    }

    #[test]
    fn unknown_or_blank_address_falls_back() {
        let r = record(Outcome::Cancelled);
        let draft = compose_message(&r, &state("Quelqu'un"), &roster(), &settings());
        assert_eq!(draft.to, "inconnu@example.org");
        let draft = compose_message(&r, &state("Sans Adresse"), &roster(), &settings());
        assert_eq!(draft.to, "inconnu@example.org");
    }

    #[test]
    fn validate_rejects_blank_fields() {
        let draft = MessageDraft {
            to: " ".to_string(),
            cc: String::new(),
            subject: "s".to_string(),
            body: "b".to_string(),
        };
        assert!(draft.validate().unwrap_err().to_string().contains("destinataire"));

        let draft = MessageDraft {
            to: "a@b".to_string(),
            subject: String::new(),
            ..draft
        };
        assert!(draft.validate().unwrap_err().to_string().contains("objet"));
    }
}
