//! LLM Gateway port
//!
//! Defines the interface for communicating with LLM providers.

use async_trait::async_trait;
use thiserror::Error;
use triage_domain::Model;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Missing API key: set {0} or pass --api-key")]
    MissingApiKey(String),

    #[error("Model query failed after {attempts} attempts: {last_error}")]
    RetriesExhausted { attempts: u32, last_error: String },
}

impl GatewayError {
    /// Whether a repeated attempt could succeed
    pub fn is_retryable(&self) -> bool {
        !matches!(
            self,
            GatewayError::MissingApiKey(_) | GatewayError::RetriesExhausted { .. }
        )
    }
}

/// Gateway for LLM communication
///
/// This port defines how the application layer communicates with LLM providers.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Create a new session with a system prompt
    async fn create_session_with_system_prompt(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError>;

    /// One-shot query: open a session and send a single prompt
    async fn query(
        &self,
        model: &Model,
        system_prompt: &str,
        prompt: &str,
    ) -> Result<String, GatewayError> {
        let session = self
            .create_session_with_system_prompt(model, system_prompt)
            .await?;
        session.send(prompt).await
    }
}

/// An active LLM session
#[async_trait]
pub trait LlmSession: Send + Sync {
    /// Get the model used by this session
    fn model(&self) -> &Model;

    /// Send a message and get a response
    async fn send(&self, content: &str) -> Result<String, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classification() {
        assert!(GatewayError::ConnectionError("reset".into()).is_retryable());
        assert!(
            GatewayError::Api {
                status: 500,
                body: "oops".into()
            }
            .is_retryable()
        );
        assert!(!GatewayError::MissingApiKey("OPENAI_API_KEY".into()).is_retryable());
    }

    #[test]
    fn test_exhausted_message_carries_cause() {
        let err = GatewayError::RetriesExhausted {
            attempts: 3,
            last_error: "Connection error: reset".into(),
        };
        assert_eq!(
            err.to_string(),
            "Model query failed after 3 attempts: Connection error: reset"
        );
    }
}
