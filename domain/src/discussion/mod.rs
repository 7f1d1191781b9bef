//! Deliberation record: who said what, in protocol order.

pub mod history;
pub mod transcript;

pub use history::{DiscussionEntry, DiscussionHistory};
pub use transcript::DeliberationTranscript;
