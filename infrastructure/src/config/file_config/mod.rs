//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod deliberation;
mod models;
mod normalizer;
mod output;
mod provider;
mod retry;

pub use deliberation::FileDeliberationConfig;
pub use models::FileModelsConfig;
pub use normalizer::FileNormalizerConfig;
pub use output::FileOutputConfig;
pub use provider::FileProviderConfig;
pub use retry::FileRetryConfig;

use serde::{Deserialize, Serialize};
use triage_domain::{ConfigIssue, ModelOptions};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Agent and consensus model selection
    pub models: FileModelsConfig,
    /// Query retry budget
    pub retry: FileRetryConfig,
    /// Chat completions provider
    pub provider: FileProviderConfig,
    /// Deliberation behavior and reference examples
    pub deliberation: FileDeliberationConfig,
    /// Console format and report directories
    pub output: FileOutputConfig,
    /// Consensus normalizer symptom lexicon
    pub normalizer: FileNormalizerConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.models.parse_agent().1);
        issues.extend(self.models.parse_consensus().1);
        issues.extend(self.retry.validate());
        issues.extend(self.deliberation.validate());
        issues.extend(self.normalizer.validate());
        issues
    }

    /// Model selection and retry budget; the consensus model follows the
    /// agent model unless set.
    pub fn model_options(&self) -> ModelOptions {
        let agent = self.models.parse_agent().0.unwrap_or_default();
        let consensus = self
            .models
            .parse_consensus()
            .0
            .unwrap_or_else(|| agent.clone());
        ModelOptions::new(agent)
            .with_consensus_model(consensus)
            .with_retry(self.retry.count, self.retry.delay())
    }
}
