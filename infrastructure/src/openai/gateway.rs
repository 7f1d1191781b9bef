//! OpenAI-compatible LLM Gateway implementation

use super::session::OpenAiSession;
use async_trait::async_trait;
use std::time::Duration;
use triage_application::{GatewayError, LlmGateway, LlmSession};
use triage_domain::Model;
use tracing::info;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const DEFAULT_MAX_TOKENS: u32 = 4000;

/// LLM Gateway for OpenAI-compatible chat completion servers
pub struct OpenAiGateway {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    api_key_env: String,
    max_tokens: u32,
}

impl OpenAiGateway {
    /// Create a gateway; a missing key is reported at first use.
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// Create a gateway taking the key from `explicit`, else from `api_key_env`.
    pub fn from_env(base_url: impl Into<String>, explicit: Option<String>, api_key_env: &str) -> Self {
        let api_key = explicit
            .filter(|k| !k.trim().is_empty())
            .or_else(|| std::env::var(api_key_env).ok());
        let mut gateway = Self::new(base_url, api_key);
        gateway.api_key_env = api_key_env.to_string();
        info!(
            "OpenAiGateway initialized for {} (key {})",
            gateway.base_url,
            if gateway.api_key.is_some() { "present" } else { "missing" }
        );
        gateway
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        if let Ok(client) = reqwest::Client::builder().timeout(timeout).build() {
            self.client = client;
        }
        self
    }

    pub fn endpoint(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for OpenAiGateway {
    fn default() -> Self {
        Self::from_env(DEFAULT_BASE_URL, None, DEFAULT_API_KEY_ENV)
    }
}

#[async_trait]
impl LlmGateway for OpenAiGateway {
    async fn create_session_with_system_prompt(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        let api_key = self
            .api_key
            .clone()
            .ok_or_else(|| GatewayError::MissingApiKey(self.api_key_env.clone()))?;

        Ok(Box::new(OpenAiSession::new(
            self.client.clone(),
            self.endpoint(),
            api_key,
            model.clone(),
            system_prompt.to_string(),
            self.max_tokens,
        )))
    }
}
