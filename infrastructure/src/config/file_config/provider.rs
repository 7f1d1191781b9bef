//! Provider settings from TOML (`[provider]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// OpenAI-compatible provider settings
///
/// ```toml
/// [provider]
/// base_url = "https://api.openai.com"
/// api_key_env = "OPENAI_API_KEY"
/// max_tokens = 4000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Base URL of the chat completions server
    pub base_url: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Direct API key (prefer the environment variable)
    pub api_key: Option<String>,
    /// Completion token budget per response
    pub max_tokens: u32,
    /// Per-request timeout, in seconds
    pub timeout_secs: u64,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            max_tokens: 4000,
            timeout_secs: 300,
        }
    }
}

impl FileProviderConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
