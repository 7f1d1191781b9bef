//! Configuration file loading for triage-council
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `TRIAGE_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./triage.toml` or `./.triage.toml`
//! 4. Global: `~/.config/triage-council/config.toml`
//! 5. Default values
//!
//! | Section | Purpose |
//! |---|---|
//! | `[models]` | agent and consensus model |
//! | `[retry]` | attempts and delay per query |
//! | `[provider]` | chat completions endpoint and API key |
//! | `[deliberation]` | reference examples and concurrency |
//! | `[output]` | console format and report directories |
//! | `[[normalizer.symptoms]]` | symptom lexicon for fallback actions |

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileDeliberationConfig, FileModelsConfig, FileNormalizerConfig, FileOutputConfig,
    FileProviderConfig, FileRetryConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
