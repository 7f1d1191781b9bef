//! Query retry budget from TOML (`[retry]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;
use triage_domain::{ConfigIssue, ConfigIssueCode};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRetryConfig {
    /// Total attempts per model query
    pub count: u32,
    /// Fixed delay between attempts, in seconds
    pub delay_secs: u64,
}

impl Default for FileRetryConfig {
    fn default() -> Self {
        Self {
            count: 3,
            delay_secs: 2,
        }
    }
}

impl FileRetryConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.delay_secs)
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        if self.count == 0 {
            vec![ConfigIssue::warning(
                ConfigIssueCode::OutOfRange {
                    field: "retry.count".to_string(),
                    value: "0".to_string(),
                },
                "retry.count: must be at least 1, using 1",
            )]
        } else {
            Vec::new()
        }
    }
}
