//! Retrying gateway decorator.
//!
//! Wraps any [`LlmGateway`] so that each `send` is attempted up to
//! `attempts` times with a fixed delay in between. Errors that cannot
//! improve on a second try (a missing API key) are returned immediately.

use async_trait::async_trait;
use std::time::Duration;
use triage_application::{GatewayError, LlmGateway, LlmSession};
use triage_domain::{Model, ModelOptions};
use tracing::warn;

pub struct RetryingGateway<G: LlmGateway> {
    inner: G,
    attempts: u32,
    delay: Duration,
}

impl<G: LlmGateway> RetryingGateway<G> {
    pub fn new(inner: G, attempts: u32, delay: Duration) -> Self {
        Self {
            inner,
            attempts: attempts.max(1),
            delay,
        }
    }

    /// Retry budget taken from the model options
    pub fn from_options(inner: G, options: &ModelOptions) -> Self {
        Self::new(inner, options.retry_count, options.retry_delay)
    }

    pub fn inner(&self) -> &G {
        &self.inner
    }
}

#[async_trait]
impl<G: LlmGateway> LlmGateway for RetryingGateway<G> {
    async fn create_session_with_system_prompt(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        let inner = self
            .inner
            .create_session_with_system_prompt(model, system_prompt)
            .await?;
        Ok(Box::new(RetryingSession {
            inner,
            attempts: self.attempts,
            delay: self.delay,
        }))
    }
}

struct RetryingSession {
    inner: Box<dyn LlmSession>,
    attempts: u32,
    delay: Duration,
}

#[async_trait]
impl LlmSession for RetryingSession {
    fn model(&self) -> &Model {
        self.inner.model()
    }

    async fn send(&self, content: &str) -> Result<String, GatewayError> {
        let mut last_error = String::new();

        for attempt in 1..=self.attempts {
            match self.inner.send(content).await {
                Ok(text) => return Ok(text),
                Err(e) if !e.is_retryable() => return Err(e),
                Err(e) => {
                    last_error = e.to_string();
                    if attempt < self.attempts {
                        warn!(
                            "Error querying {} (attempt {}/{}): {}. Retrying in {:?}",
                            self.inner.model(),
                            attempt,
                            self.attempts,
                            e,
                            self.delay
                        );
                        tokio::time::sleep(self.delay).await;
                    }
                }
            }
        }

        Err(GatewayError::RetriesExhausted {
            attempts: self.attempts,
            last_error,
        })
    }
}
