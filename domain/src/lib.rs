//! Domain layer for triage-council
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Deliberation
//!
//! Three clinical roles (triage nurse, emergency physician, medical
//! consultant) assess a patient conversation, critique each other, and a
//! final consensus query settles on an Emergency Severity Index level.
//!
//! ## Tolerant parsing
//!
//! Model output is prose. [`assessment::extract`] and
//! [`consensus::normalize`] turn any text into a structurally valid value
//! and never fail; missing pieces fall back to fixed defaults.

pub mod assessment;
pub mod config;
pub mod consensus;
pub mod core;
pub mod discussion;
pub mod orchestration;
pub mod prompt;
pub mod report;
pub mod triage;

// Re-export commonly used types
pub use assessment::{
    Assessment, AssessmentSchema, ConsultantAssessment, FieldRef, NurseAssessment,
    PhysicianAssessment, extract, extract_for_role, summarize_for_discussion,
};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use consensus::{ConsensusNormalizer, ConsensusResult, SymptomLexicon, SymptomRule, normalize};
pub use core::{
    conversation::Conversation, error::DomainError, model::Model, model_options::ModelOptions,
};
pub use discussion::{DeliberationTranscript, DiscussionEntry, DiscussionHistory};
pub use orchestration::Phase;
pub use prompt::{
    Audience, ExampleCatalogue, ExampleSample, ReferenceExample, TriagePrompts, format_examples,
};
pub use report::{CaseReport, generate_case_id};
pub use triage::{EsiLevel, Role};
