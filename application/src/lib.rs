//! Application layer for triage-council
//!
//! This crate contains use cases, port definitions, role agents and
//! application configuration. It depends only on the domain layer.

pub mod agents;
pub mod config;
pub mod ports;
pub mod use_cases;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use agents::{ClinicalAgent, RoleAgent};
pub use config::DeliberationParams;
pub use ports::{
    conversation_logger::{
        ConversationEvent, ConversationLogger, DeliberationEvent, NoConversationLogger,
    },
    llm_gateway::{GatewayError, LlmGateway, LlmSession},
    progress::{FnProgress, NoProgress, ProgressNotifier},
    transcript_sink::{NoTranscriptSink, SinkError, TranscriptSink},
};
pub use use_cases::deliberate::{
    DeliberateUseCase, DeliberationError, DeliberationInput, DeliberationOutcome,
};
pub use use_cases::differential::DifferentialUseCase;
