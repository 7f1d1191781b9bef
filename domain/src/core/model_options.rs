//! Model selection and query budget.
//!
//! [`ModelOptions`] is handed to every role agent and to the deliberation
//! engine at construction time, so no component carries its own default
//! model identifier.

use super::model::Model;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Which backend model to target and how hard to retry a failed query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelOptions {
    /// Model used by the three role agents.
    pub model: Model,
    /// Model used for the final consensus query.
    pub consensus_model: Model,
    /// Total attempts per query before giving up.
    pub retry_count: u32,
    /// Fixed delay between attempts.
    pub retry_delay: Duration,
}

impl Default for ModelOptions {
    fn default() -> Self {
        Self {
            model: Model::default(),
            consensus_model: Model::default(),
            retry_count: 3,
            retry_delay: Duration::from_secs(2),
        }
    }
}

impl ModelOptions {
    pub fn new(model: Model) -> Self {
        Self {
            consensus_model: model.clone(),
            model,
            ..Default::default()
        }
    }

    pub fn with_consensus_model(mut self, model: Model) -> Self {
        self.consensus_model = model;
        self
    }

    pub fn with_retry(mut self, retry_count: u32, retry_delay: Duration) -> Self {
        self.retry_count = retry_count.max(1);
        self.retry_delay = retry_delay;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_same_model_for_consensus() {
        let options = ModelOptions::new(Model::Gpt4oMini);
        assert_eq!(options.model, Model::Gpt4oMini);
        assert_eq!(options.consensus_model, Model::Gpt4oMini);
        assert_eq!(options.retry_count, 3);
    }

    #[test]
    fn test_retry_count_is_at_least_one() {
        let options = ModelOptions::default().with_retry(0, Duration::ZERO);
        assert_eq!(options.retry_count, 1);
    }
}
