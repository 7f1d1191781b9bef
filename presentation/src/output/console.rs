//! Console output formatter for triage results

use crate::output::formatter::OutputFormatter;
use colored::{ColoredString, Colorize};
use triage_application::DeliberationOutcome;
use triage_domain::{CaseReport, EsiLevel};

const WIDTH: usize = 60;

/// Formats triage results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete assessment
    pub fn format(outcome: &DeliberationOutcome, report: &CaseReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("CLINICAL TRIAGE ASSESSMENT"));
        output.push('\n');
        output.push_str(&format!("{} {}\n", "Case ID:".cyan().bold(), report.case_id));
        output.push_str(&format!("{} {}\n\n", "Timestamp:".cyan().bold(), report.timestamp));

        output.push_str(&format!(
            "{}\n{} {}%\n",
            Self::level_banner(report.esi_level),
            "Confidence:".bold(),
            report.confidence
        ));
        if let Some(complaint) = outcome.chief_complaint() {
            output.push_str(&format!("{} {}\n", "Chief Complaint:".bold(), complaint));
        }

        output.push_str(&Self::section_header("CLINICAL JUSTIFICATION"));
        output.push_str(&format!("{}\n", report.justification));

        output.push_str(&Self::section_header("RECOMMENDED ACTIONS"));
        for action in &report.recommended_actions {
            output.push_str(&format!("  - {}\n", action));
        }

        if !outcome.assessments.is_empty() {
            output.push_str(&Self::section_header("ROLE RECOMMENDATIONS"));
            for assessment in &outcome.assessments {
                output.push_str(&format!(
                    "  {} {}\n",
                    format!("{}:", assessment.role()).yellow().bold(),
                    assessment.esi_field()
                ));
            }
        }

        output.push_str(&Self::section_header("AGENT DISCUSSION SUMMARY"));
        output.push_str(&format!("{}\n", report.discussion_summary));

        if let Some(path) = &outcome.transcript_path {
            output.push_str(&format!(
                "\n{} {}\n",
                "Transcript:".dimmed(),
                path.display()
            ));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format the bedside essentials
    pub fn format_summary(report: &CaseReport) -> String {
        let mut output = format!(
            "{} {}\n",
            Self::level_banner(report.esi_level),
            format!("({}% confidence)", report.confidence).dimmed()
        );
        for (i, action) in report.recommended_actions.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", i + 1, action));
        }
        output
    }

    /// Format as JSON
    pub fn format_json(report: &CaseReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    fn level_banner(level: EsiLevel) -> ColoredString {
        let text = format!("ESI LEVEL: {} - {}", level, level.short_description());
        match level {
            EsiLevel::One => text.red().bold(),
            EsiLevel::Two => text.truecolor(255, 140, 0).bold(),
            EsiLevel::Three => text.yellow().bold(),
            EsiLevel::Four => text.green().bold(),
            EsiLevel::Five => text.blue().bold(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(WIDTH);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n", title.cyan().bold())
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(WIDTH).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, outcome: &DeliberationOutcome, report: &CaseReport) -> String {
        Self::format(outcome, report)
    }

    fn format_summary(&self, report: &CaseReport) -> String {
        Self::format_summary(report)
    }

    fn format_json(&self, report: &CaseReport) -> String {
        Self::format_json(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use triage_domain::{
        Assessment, ConsensusResult, DiscussionHistory, NurseAssessment, OutputFormat,
    };

    fn outcome() -> DeliberationOutcome {
        DeliberationOutcome {
            case_id: "CASE-1".to_string(),
            result: ConsensusResult {
                esi_level: EsiLevel::Two,
                confidence: 85,
                justification: "Chest pain with diaphoresis.".to_string(),
                recommended_actions: vec!["12-lead ECG".to_string(), "Aspirin".to_string()],
                discussion_summary: "Triage Nurse: ESI 2.".to_string(),
            },
            assessments: vec![Assessment::Nurse(NurseAssessment {
                chief_complaint: "Chest pain".to_string(),
                recommended_esi: "ESI 2".to_string(),
                ..Default::default()
            })],
            history: DiscussionHistory::new(),
            transcript_path: None,
        }
    }

    fn report(outcome: &DeliberationOutcome) -> CaseReport {
        CaseReport::new(
            &outcome.case_id,
            Local.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
            &outcome.result,
        )
    }

    #[test]
    fn test_full_format_sections() {
        colored::control::set_override(false);
        let outcome = outcome();
        let text = ConsoleFormatter::format(&outcome, &report(&outcome));

        assert!(text.contains("CLINICAL TRIAGE ASSESSMENT"));
        assert!(text.contains("Case ID: CASE-1\n"));
        assert!(text.contains("ESI LEVEL: 2 - High risk situation; severe pain/distress\n"));
        assert!(text.contains("Confidence: 85%\n"));
        assert!(text.contains("Chief Complaint: Chest pain\n"));
        assert!(text.contains("  - 12-lead ECG\n  - Aspirin\n"));
        assert!(text.contains("Triage Nurse: ESI 2\n"));
        assert!(text.contains("AGENT DISCUSSION SUMMARY\nTriage Nurse: ESI 2.\n"));
    }

    #[test]
    fn test_summary_and_json() {
        colored::control::set_override(false);
        let outcome = outcome();
        let report = report(&outcome);

        let summary = ConsoleFormatter.render(OutputFormat::Summary, &outcome, &report);
        assert!(summary.starts_with("ESI LEVEL: 2"));
        assert!(summary.ends_with("1. 12-lead ECG\n2. Aspirin\n"));

        let json: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter.render(OutputFormat::Json, &outcome, &report))
                .unwrap();
        assert_eq!(json["case_id"], "CASE-1");
        assert_eq!(json["confidence"], 85);
    }
}
