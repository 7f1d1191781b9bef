//! Prompt-driven implementation of [`ClinicalAgent`].

use super::ClinicalAgent;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, DeliberationEvent, NoConversationLogger,
};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;
use triage_domain::{
    Assessment, Audience, Conversation, ExampleSample, Model, ModelOptions, Role, TriagePrompts,
    extract_for_role, format_examples,
};

/// A role persona backed by an LLM gateway
pub struct RoleAgent<G: LlmGateway + 'static> {
    role: Role,
    gateway: Arc<G>,
    model: Model,
    examples: String,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl<G: LlmGateway + 'static> RoleAgent<G> {
    pub fn new(role: Role, gateway: Arc<G>, options: &ModelOptions) -> Self {
        Self {
            role,
            gateway,
            model: options.model.clone(),
            examples: String::new(),
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Pre-rendered reference examples embedded in the system prompt
    pub fn with_examples(mut self, examples: impl Into<String>) -> Self {
        self.examples = examples.into();
        self
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// One agent per role, in protocol order, sharing one example sample.
    pub fn roster(
        gateway: Arc<G>,
        options: &ModelOptions,
        sample: &ExampleSample,
        logger: Arc<dyn ConversationLogger>,
    ) -> Vec<Arc<dyn ClinicalAgent>> {
        Role::ALL
            .iter()
            .map(|&role| {
                let agent = RoleAgent::new(role, Arc::clone(&gateway), options)
                    .with_examples(format_examples(sample, Audience::from(role)))
                    .with_conversation_logger(Arc::clone(&logger));
                Arc::new(agent) as Arc<dyn ClinicalAgent>
            })
            .collect()
    }

    fn log_response(&self, kind: DeliberationEvent, response: &str) {
        self.conversation_logger.log(ConversationEvent::model_response(
            kind,
            Some(self.role),
            &self.model,
            response,
        ));
    }
}

#[async_trait]
impl<G: LlmGateway + 'static> ClinicalAgent for RoleAgent<G> {
    fn role(&self) -> Role {
        self.role
    }

    async fn assess(&self, conversation: &Conversation) -> Result<Assessment, GatewayError> {
        debug!("{} assessing with {}", self.role, self.model);
        let response = self
            .gateway
            .query(
                &self.model,
                &TriagePrompts::role_system(self.role, &self.examples),
                &TriagePrompts::assessment_prompt(self.role, conversation.text()),
            )
            .await?;
        self.log_response(DeliberationEvent::AssessmentResponse, &response);
        Ok(extract_for_role(self.role, &response))
    }

    async fn critique(
        &self,
        conversation: &Conversation,
        assessments: &[Assessment],
    ) -> Result<String, GatewayError> {
        debug!("{} responding to other assessments", self.role);
        let response = self
            .gateway
            .query(
                &self.model,
                &TriagePrompts::critique_system(self.role),
                &TriagePrompts::critique_prompt(self.role, conversation.text(), assessments),
            )
            .await?;
        self.log_response(DeliberationEvent::CritiqueResponse, &response);
        Ok(response)
    }
}
