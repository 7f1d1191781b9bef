//! Clinical role agents.
//!
//! Each agent wraps one model persona. Agents are stateless apart from the
//! prompt material rendered at construction, so one instance can serve any
//! number of deliberations.

pub mod role_agent;

pub use role_agent::RoleAgent;

use crate::ports::llm_gateway::GatewayError;
use async_trait::async_trait;
use triage_domain::{Assessment, Conversation, Role};

/// One participant of a deliberation
#[async_trait]
pub trait ClinicalAgent: Send + Sync {
    fn role(&self) -> Role;

    /// Independent structured assessment of the conversation
    async fn assess(&self, conversation: &Conversation) -> Result<Assessment, GatewayError>;

    /// Free-text response to the other roles' assessments.
    ///
    /// `assessments` may include the agent's own; it is skipped.
    async fn critique(
        &self,
        conversation: &Conversation,
        assessments: &[Assessment],
    ) -> Result<String, GatewayError>;
}
