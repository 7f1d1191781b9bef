//! Text layouts for transcripts, results and quick references

use crate::consensus::ConsensusResult;
use crate::discussion::DeliberationTranscript;
use crate::triage::EsiLevel;

use super::case::{CaseReport, iso_timestamp};

const RULE_WIDTH: usize = 80;

/// Full discussion transcript with the final consensus
pub fn render_transcript(transcript: &DeliberationTranscript) -> String {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);
    let result = &transcript.result;

    let mut out = format!(
        "CASE ID: {}\nTIMESTAMP: {}\n\nFULL AGENT DISCUSSION:\n{}\n\n",
        transcript.case_id,
        iso_timestamp(transcript.timestamp),
        heavy
    );
    for entry in transcript.history.entries() {
        out.push_str(&format!("[{}]\n{}\n\n{}\n\n", entry.role, entry.content, light));
    }
    out.push_str(&format!(
        "{}\n\nFINAL CONSENSUS:\nESI Level: {}\nConfidence: {}%\nJustification: {}\n\nRecommended Actions:\n",
        heavy, result.esi_level, result.confidence, result.justification
    ));
    for action in &result.recommended_actions {
        out.push_str(&format!("- {}\n", action));
    }
    out
}

/// Human-readable companion of the JSON result record
pub fn render_results_text(report: &CaseReport, stamp: &str) -> String {
    let mut out = format!(
        "Case ID: {}\nTimestamp: {}\n\nESI Level: {}\nConfidence: {}%\n\nJustification:\n{}\n\nRecommended Actions:\n",
        report.case_id, stamp, report.esi_level, report.confidence, report.justification
    );
    for (i, action) in report.recommended_actions.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, action));
    }
    out
}

/// Markdown card for the bedside nurse
pub fn render_quick_reference(
    case_id: &str,
    stamp: &str,
    result: &ConsensusResult,
    chief_complaint: Option<&str>,
) -> String {
    let mut out = format!(
        "# Emergency Triage - Quick Reference\n\n**Case ID:** {}  \n**Generated:** {}\n\n## ESI LEVEL: {}\n**Confidence:** {}%\n\n",
        case_id, stamp, result.esi_level, result.confidence
    );
    if let Some(complaint) = chief_complaint.filter(|c| !c.trim().is_empty()) {
        out.push_str(&format!("**Chief Complaint:** {}\n\n", complaint));
    }
    out.push_str("## Recommended Actions:\n\n");
    for (i, action) in result.recommended_actions.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, action));
    }
    out.push_str("\n## ESI Level Reference:\n");
    for level in EsiLevel::ALL {
        out.push_str(&format!("- **Level {}:** {}\n", level, level.short_description()));
    }
    out
}

/// Differential diagnosis report around the model's answer
pub fn render_differential(case_id: &str, stamp: &str, body: &str) -> String {
    format!(
        "\nDIFFERENTIAL DIAGNOSES\n=====================\nCase ID: {}\nGenerated: {}\n\n{}\n",
        case_id, stamp, body
    )
}
