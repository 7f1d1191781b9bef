//! Case identity and the persisted result record

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::consensus::ConsensusResult;
use crate::triage::EsiLevel;

/// `CASE-YYYYmmddHHMMSS`
pub fn generate_case_id(now: DateTime<Local>) -> String {
    format!("CASE-{}", now.format("%Y%m%d%H%M%S"))
}

/// `YYYYmmdd_HHMMSS`, used in output file names
pub fn file_stamp(at: DateTime<Local>) -> String {
    at.format("%Y%m%d_%H%M%S").to_string()
}

/// Local ISO-8601 timestamp with microseconds
pub fn iso_timestamp(at: DateTime<Local>) -> String {
    at.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

/// Result record saved per case
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseReport {
    pub case_id: String,
    pub timestamp: String,
    pub esi_level: EsiLevel,
    pub confidence: u8,
    pub justification: String,
    pub recommended_actions: Vec<String>,
    pub discussion_summary: String,
}

impl CaseReport {
    pub fn new(case_id: impl Into<String>, at: DateTime<Local>, result: &ConsensusResult) -> Self {
        Self {
            case_id: case_id.into(),
            timestamp: iso_timestamp(at),
            esi_level: result.esi_level,
            confidence: result.confidence,
            justification: result.justification.clone(),
            recommended_actions: result.recommended_actions.clone(),
            discussion_summary: result.discussion_summary.clone(),
        }
    }
}
