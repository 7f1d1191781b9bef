//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Free-text parsing never produces these: extraction and consensus
/// normalization always succeed. They cover invalid values handed to the
/// domain by callers (configuration, CLI input, stored data).
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid ESI level: {0} (expected 1-5)")]
    InvalidEsiLevel(String),

    #[error("Invalid role: {0}")]
    InvalidRole(String),

    #[error("Conversation text is empty")]
    EmptyConversation,

    #[error("Invalid reference example catalogue: {0}")]
    InvalidExamples(String),
}
