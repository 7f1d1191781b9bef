//! Output configuration from TOML (`[output]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use triage_domain::OutputFormat;

use crate::report::ReportDirs;

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Console output format (uses domain type)
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
    /// JSON and text case results
    pub results_dir: PathBuf,
    /// Full discussion transcripts
    pub discussions_dir: PathBuf,
    /// Bedside quick reference cards
    pub quick_ref_dir: PathBuf,
    /// Differential diagnosis reports
    pub differential_dir: PathBuf,
    /// JSONL log of every model exchange
    pub conversation_log: Option<PathBuf>,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
            results_dir: PathBuf::from("results"),
            discussions_dir: PathBuf::from("discussions"),
            quick_ref_dir: PathBuf::from("quick_ref"),
            differential_dir: PathBuf::from("differential_diagnoses"),
            conversation_log: None,
        }
    }
}

impl FileOutputConfig {
    pub fn report_dirs(&self) -> ReportDirs {
        ReportDirs {
            results: self.results_dir.clone(),
            quick_ref: self.quick_ref_dir.clone(),
            differential: self.differential_dir.clone(),
        }
    }
}
