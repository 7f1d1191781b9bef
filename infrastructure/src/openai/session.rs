//! One system prompt bound to one model over HTTP.

use super::protocol::{ChatRequest, ChatResponse};
use async_trait::async_trait;
use triage_application::{GatewayError, LlmSession};
use triage_domain::Model;
use tracing::debug;

/// A chat completions session. Stateless: every `send` is one request
/// carrying the system prompt.
pub struct OpenAiSession {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: Model,
    system_prompt: String,
    max_tokens: u32,
}

impl OpenAiSession {
    pub fn new(
        client: reqwest::Client,
        endpoint: String,
        api_key: String,
        model: Model,
        system_prompt: String,
        max_tokens: u32,
    ) -> Self {
        Self {
            client,
            endpoint,
            api_key,
            model,
            system_prompt,
            max_tokens,
        }
    }
}

fn map_transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_connect() || e.is_timeout() {
        GatewayError::ConnectionError(e.to_string())
    } else {
        GatewayError::RequestFailed(e.to_string())
    }
}

#[async_trait]
impl LlmSession for OpenAiSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, content: &str) -> Result<String, GatewayError> {
        let body = ChatRequest::build(&self.model, &self.system_prompt, content, self.max_tokens);
        debug!("POST {} model={} prompt_bytes={}", self.endpoint, self.model, content.len());

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;
        parsed.into_text()
    }
}
