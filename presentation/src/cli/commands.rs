//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Console output format for the triage result
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Full assessment with justification and discussion summary
    Full,
    /// ESI level, confidence and actions only
    Summary,
    /// JSON case report
    Json,
}

impl From<OutputFormat> for triage_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => triage_domain::OutputFormat::Full,
            OutputFormat::Summary => triage_domain::OutputFormat::Summary,
            OutputFormat::Json => triage_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for triage-council
#[derive(Parser, Debug)]
#[command(name = "triage-council")]
#[command(author, version, about = "Multi-role ESI triage from a patient conversation")]
#[command(long_about = r#"
Triage Council assigns an Emergency Severity Index (ESI) level to a
patient-nurse conversation by running three clinical roles against a
language model.

The process has three phases:
1. Assessment: Triage nurse, emergency physician and medical consultant
   each assess the conversation
2. Discussion: Each role critiques the others' assessments
3. Consensus: A final query settles the ESI level, confidence and actions

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./triage.toml       Project-level config
3. ~/.config/triage-council/config.toml   Global config

Example:
  triage-council --input-file conversation.txt
  triage-council --input-text "Patient reports chest pain..." --output summary
  triage-council --input-file case.txt --model gpt-4o --differential
"#)]
pub struct Cli {
    /// Path to a conversation text file
    #[arg(long, value_name = "PATH", conflicts_with = "input_text")]
    pub input_file: Option<PathBuf>,

    /// Conversation text given directly
    #[arg(long, value_name = "TEXT")]
    pub input_text: Option<String>,

    /// API key (defaults to the configured environment variable)
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Model used by the three role agents
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Model used for the consensus query (defaults to --model)
    #[arg(long, value_name = "MODEL")]
    pub consensus_model: Option<String>,

    /// Case identifier (defaults to CASE-<timestamp>)
    #[arg(long, value_name = "ID")]
    pub case_id: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Run the three initial assessments concurrently
    #[arg(long)]
    pub parallel: bool,

    /// Also generate differential diagnoses
    #[arg(long)]
    pub differential: bool,

    /// Do not write transcript, results or quick reference files
    #[arg(long)]
    pub no_reports: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Write diagnostic logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_invocation() {
        let cli = Cli::try_parse_from([
            "triage-council",
            "--input-file",
            "case.txt",
            "--model",
            "gpt-4o",
            "--output",
            "summary",
            "-vv",
            "--differential",
        ])
        .unwrap();

        assert_eq!(cli.input_file, Some(PathBuf::from("case.txt")));
        assert_eq!(cli.model.as_deref(), Some("gpt-4o"));
        assert_eq!(cli.output, Some(OutputFormat::Summary));
        assert_eq!(cli.verbose, 2);
        assert!(cli.differential);
        assert!(!cli.no_reports);
    }

    #[test]
    fn test_input_sources_conflict() {
        let result = Cli::try_parse_from([
            "triage-council",
            "--input-file",
            "case.txt",
            "--input-text",
            "Chest pain",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_output_format_maps_to_domain() {
        assert_eq!(
            triage_domain::OutputFormat::from(OutputFormat::Json),
            triage_domain::OutputFormat::Json
        );
    }
}
