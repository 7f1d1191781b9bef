//! Port for the deliberation audit log.
//!
//! Every model answer a deliberation consumes is recorded here together with
//! the normalized consensus, so a case can be reviewed after the fact.
//! `tracing` carries operator diagnostics; this port carries the clinical
//! exchange itself in a machine-readable form (JSONL in the file adapter).

use serde_json::{Value, json};
use std::fmt;
use triage_domain::{ConsensusResult, Model, Role};

/// What a logged record describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeliberationEvent {
    /// A role's first-pass structured assessment
    AssessmentResponse,
    /// A role's reply to the other assessments
    CritiqueResponse,
    /// Consensus answer before normalization
    ConsensusResponse,
    /// Normalized level, confidence and action count
    ConsensusResult,
    /// Ranked differential diagnosis text
    DifferentialResponse,
}

impl DeliberationEvent {
    pub const ALL: [DeliberationEvent; 5] = [
        DeliberationEvent::AssessmentResponse,
        DeliberationEvent::CritiqueResponse,
        DeliberationEvent::ConsensusResponse,
        DeliberationEvent::ConsensusResult,
        DeliberationEvent::DifferentialResponse,
    ];

    /// Value of the record's `type` field
    pub fn as_str(self) -> &'static str {
        match self {
            DeliberationEvent::AssessmentResponse => "assessment_response",
            DeliberationEvent::CritiqueResponse => "critique_response",
            DeliberationEvent::ConsensusResponse => "consensus_response",
            DeliberationEvent::ConsensusResult => "consensus_result",
            DeliberationEvent::DifferentialResponse => "differential_response",
        }
    }
}

impl fmt::Display for DeliberationEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One audit record: an event kind and its JSON payload
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationEvent {
    pub kind: DeliberationEvent,
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(kind: DeliberationEvent, payload: Value) -> Self {
        Self { kind, payload }
    }

    /// Raw answer from `model`, attributed to `role` when a role spoke it
    pub fn model_response(kind: DeliberationEvent, role: Option<Role>, model: &Model, text: &str) -> Self {
        let mut payload = json!({
            "model": model.to_string(),
            "bytes": text.len(),
            "text": text,
        });
        if let Some(role) = role {
            payload["role"] = Value::from(role.display_name());
        }
        Self::new(kind, payload)
    }

    pub fn consensus_result(result: &ConsensusResult) -> Self {
        Self::new(
            DeliberationEvent::ConsensusResult,
            json!({
                "esi_level": result.esi_level,
                "confidence": result.confidence,
                "actions": result.recommended_actions.len(),
            }),
        )
    }
}

/// Sink for audit records.
///
/// `log` is synchronous and infallible; adapters swallow their own write
/// failures so auditing never aborts a deliberation.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// Discards every record
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
