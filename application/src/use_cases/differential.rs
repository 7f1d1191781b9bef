//! Differential diagnosis use case
//!
//! One extra model query over a finished consensus. Opt-in; its failure
//! never affects the deliberation result.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, DeliberationEvent, NoConversationLogger,
};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use std::sync::Arc;
use tracing::info;
use triage_domain::{ConsensusResult, Model, TriagePrompts};

pub struct DifferentialUseCase<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    model: Model,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl<G: LlmGateway + 'static> DifferentialUseCase<G> {
    pub fn new(gateway: Arc<G>, model: Model) -> Self {
        Self {
            gateway,
            model,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Ask for a ranked differential; returns the model's text unchanged
    pub async fn execute(&self, result: &ConsensusResult) -> Result<String, GatewayError> {
        info!("Generating differential diagnoses with {}", self.model);
        let response = self
            .gateway
            .query(
                &self.model,
                TriagePrompts::differential_system(),
                &TriagePrompts::differential_prompt(result),
            )
            .await?;

        self.conversation_logger.log(ConversationEvent::model_response(
            DeliberationEvent::DifferentialResponse,
            None,
            &self.model,
            &response,
        ));
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedGateway;
    use triage_domain::normalize;

    #[tokio::test]
    async fn test_differential_query_uses_consensus() {
        let gateway = Arc::new(ScriptedGateway::new(|_| {
            Ok("1. Acute coronary syndrome\n2. Aortic dissection".to_string())
        }));
        let result = normalize(crate::testing::CONSENSUS_ANSWER)
            .with_discussion_summary("Triage Nurse: Initial assessment: ESI Level: 2.");
        let use_case = DifferentialUseCase::new(Arc::clone(&gateway), Model::O1Mini);

        let body = use_case.execute(&result).await.unwrap();
        assert!(body.starts_with("1. Acute coronary syndrome"));

        let calls = gateway.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].model, Model::O1Mini);
        assert!(calls[0].prompt.contains("ESI Level: 2"));
        assert!(calls[0].prompt.contains("Discussion Summary: Triage Nurse"));
        assert!(calls[0].system.contains("must-not-miss"));
    }

    #[tokio::test]
    async fn test_differential_error_is_returned() {
        let gateway = Arc::new(ScriptedGateway::new(|_| {
            Err(GatewayError::InvalidResponse("empty choices".into()))
        }));
        let use_case = DifferentialUseCase::new(gateway, Model::Gpt4o);
        let result = normalize("ESI Level: 4");
        assert!(use_case.execute(&result).await.is_err());
    }
}
