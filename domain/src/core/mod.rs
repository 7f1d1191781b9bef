//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`] : backend LLM identifiers
//! - [`model_options::ModelOptions`] : model selection + retry budget
//! - [`conversation::Conversation`] : a validated transcript to triage
//! - [`error::DomainError`] : domain-level errors

pub mod conversation;
pub mod error;
pub mod model;
pub mod model_options;
pub mod string;
