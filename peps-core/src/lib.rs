pub mod activity;
pub mod cancellation;
pub mod classify;
pub mod compose;
pub mod config;
pub mod dates;
pub mod normalize;
pub mod peps;
pub mod pipeline;
pub mod render;
pub mod residents;
pub mod review;
pub mod roster;
pub mod table;

#[cfg(test)]
mod tests;

pub use activity::{ActivityRecord, AnalysisResult, CheckMode, Outcome};
pub use compose::{ComposeState, MailSettings, MessageDraft, compose_message};
pub use config::Config;
pub use peps::Peps;
pub use residents::{ParticipationStatus, Resident};
pub use review::{ReviewTag, Summary};
pub use roster::{Roster, RosterEntry};
pub use table::ActivityTable;
