//! Complete deliberation record handed to transcript sinks

use chrono::{DateTime, Local};
use super::history::DiscussionHistory;
use crate::consensus::ConsensusResult;

#[derive(Debug, Clone, PartialEq)]
pub struct DeliberationTranscript {
    pub case_id: String,
    pub timestamp: DateTime<Local>,
    pub history: DiscussionHistory,
    pub result: ConsensusResult,
}

impl DeliberationTranscript {
    pub fn new(
        case_id: impl Into<String>,
        timestamp: DateTime<Local>,
        history: DiscussionHistory,
        result: ConsensusResult,
    ) -> Self {
        Self {
            case_id: case_id.into(),
            timestamp,
            history,
            result,
        }
    }
}
