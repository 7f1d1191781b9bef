//! Output format value object

use serde::{Deserialize, Serialize};

/// How a finished triage is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Full assessment with justification and discussion summary (default)
    #[default]
    Full,
    /// ESI level, confidence and actions only
    Summary,
    /// JSON case report
    Json,
}
