//! Output formatter trait

use triage_application::DeliberationOutcome;
use triage_domain::{CaseReport, OutputFormat};

/// Renders a finished deliberation for the terminal
pub trait OutputFormatter {
    /// Full assessment with justification and discussion summary
    fn format(&self, outcome: &DeliberationOutcome, report: &CaseReport) -> String;

    /// ESI level, confidence and actions only
    fn format_summary(&self, report: &CaseReport) -> String;

    /// JSON case report
    fn format_json(&self, report: &CaseReport) -> String;

    /// Dispatch on the configured format
    fn render(&self, format: OutputFormat, outcome: &DeliberationOutcome, report: &CaseReport) -> String {
        match format {
            OutputFormat::Full => self.format(outcome, report),
            OutputFormat::Summary => self.format_summary(report),
            OutputFormat::Json => self.format_json(report),
        }
    }
}
