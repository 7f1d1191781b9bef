//! Orchestration domain entities

use serde::{Deserialize, Serialize};

/// Phase of a deliberation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Each role assesses the conversation independently
    Assessment,
    /// Each role reviews the other roles' assessments
    Critique,
    /// One final query converges on an ESI level
    Consensus,
}

impl Phase {
    pub const ALL: [Phase; 3] = [Phase::Assessment, Phase::Critique, Phase::Consensus];

    pub fn as_str(&self) -> &str {
        match self {
            Phase::Assessment => "assessment",
            Phase::Critique => "critique",
            Phase::Consensus => "consensus",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Phase::Assessment => "Initial Assessment",
            Phase::Critique => "Discussion",
            Phase::Consensus => "Consensus",
        }
    }

    /// Number of model queries issued in this phase
    pub fn task_count(&self) -> usize {
        match self {
            Phase::Assessment | Phase::Critique => 3,
            Phase::Consensus => 1,
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
