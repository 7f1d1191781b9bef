//! Final consensus of a deliberation (Value Object)

use serde::{Deserialize, Serialize};

use crate::triage::EsiLevel;

/// Confidence reported when the model gives none
pub const DEFAULT_CONFIDENCE: u8 = 80;

/// Justification reported when the model gives none
pub const NO_JUSTIFICATION: &str = "No justification provided.";

/// Structurally valid outcome of the consensus phase.
///
/// Produced only by normalization, so `recommended_actions` is never empty
/// and `confidence` is always within 0-100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsensusResult {
    pub esi_level: EsiLevel,
    pub confidence: u8,
    pub justification: String,
    pub recommended_actions: Vec<String>,
    /// One line per discussion entry; attached after normalization
    #[serde(default)]
    pub discussion_summary: String,
}

impl ConsensusResult {
    pub fn with_discussion_summary(mut self, summary: impl Into<String>) -> Self {
        self.discussion_summary = summary.into();
        self
    }
}
