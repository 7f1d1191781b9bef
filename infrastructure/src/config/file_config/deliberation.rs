//! Deliberation settings from TOML (`[deliberation]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use triage_application::DeliberationParams;
use triage_domain::{ConfigIssue, ConfigIssueCode};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDeliberationConfig {
    /// Reference examples per ESI level in each system prompt
    pub examples_per_level: usize,
    /// Seed for reference example sampling
    pub example_seed: u64,
    /// Run the three initial assessments concurrently
    pub parallel_assessments: bool,
    /// Replacement reference example catalogue (JSON)
    pub examples_file: Option<PathBuf>,
}

impl Default for FileDeliberationConfig {
    fn default() -> Self {
        let params = DeliberationParams::default();
        Self {
            examples_per_level: params.examples_per_level,
            example_seed: params.example_seed,
            parallel_assessments: params.parallel_assessments,
            examples_file: None,
        }
    }
}

impl FileDeliberationConfig {
    pub fn to_params(&self) -> DeliberationParams {
        DeliberationParams::default()
            .with_examples_per_level(self.examples_per_level)
            .with_example_seed(self.example_seed)
            .with_parallel_assessments(self.parallel_assessments)
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if let Some(path) = &self.examples_file
            && !path.exists()
        {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::MissingFile {
                    field: "deliberation.examples_file".to_string(),
                    path: path.display().to_string(),
                },
                format!("deliberation.examples_file: {} does not exist", path.display()),
            ));
        }
        if self.examples_per_level == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::OutOfRange {
                    field: "deliberation.examples_per_level".to_string(),
                    value: "0".to_string(),
                },
                "deliberation.examples_per_level: 0 disables reference examples",
            ));
        }
        issues
    }
}
