//! Discussion-ready summary of an assessment.
//!
//! The extractor's summary is used as-is when it carries an ESI level.
//! Otherwise the level and rationale are recovered from whatever the model
//! did write, ending with a keyword guess at the severity.

use regex::Regex;
use std::sync::LazyLock;

use super::entities::{Assessment, FieldRef};
use super::extractor::compose_summary;
use super::sections::first_number;
use crate::triage::EsiLevel;

static ESI_IN_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)ESI\s*(?:level)?\s*([0-9]+)").unwrap());

/// Severity phrases, most urgent level first
const SEVERITY_KEYWORDS: [(EsiLevel, &[&str]); 5] = [
    (
        EsiLevel::One,
        &[
            "immediate",
            "life-saving",
            "critical",
            "unstable",
            "unresponsive",
            "cardiac arrest",
            "respiratory arrest",
        ],
    ),
    (
        EsiLevel::Two,
        &[
            "high risk",
            "severe pain",
            "severe distress",
            "abnormal vital signs",
            "altered mental status",
        ],
    ),
    (
        EsiLevel::Three,
        &["multiple resources", "stable vital signs", "moderate symptoms"],
    ),
    (EsiLevel::Four, &["one resource", "minor", "simple"]),
    (EsiLevel::Five, &["no resources", "minimal", "routine"]),
];

/// Guess a level from severity phrases in free text.
pub fn infer_level_from_keywords(text: &str) -> Option<EsiLevel> {
    let lowered = text.to_lowercase();
    SEVERITY_KEYWORDS
        .iter()
        .find(|(_, words)| words.iter().any(|w| lowered.contains(w)))
        .map(|(level, _)| *level)
}

/// Summarize an assessment for the discussion history.
pub fn summarize_for_discussion(assessment: &Assessment) -> String {
    let summary = assessment.summary();
    if summary.contains("ESI Level") {
        return summary.to_string();
    }

    let fields = assessment.fields();
    let esi_field = assessment.esi_field();

    let mut esi = first_number(esi_field).map(str::to_string).or_else(|| {
        fields
            .iter()
            .filter_map(|(_, value)| value.as_text())
            .filter(|text| text.to_lowercase().contains("esi"))
            .find_map(first_number)
            .map(str::to_string)
    });

    let rationale = Some(assessment.rationale_field())
        .filter(|s| !s.is_empty())
        .or_else(|| {
            fields
                .iter()
                .filter(|(key, _)| *key != "summary")
                .filter_map(|(_, value)| value.as_text())
                .filter(|text| *text != esi_field)
                .find(|text| text.chars().count() > 10)
        })
        .unwrap_or_default();

    if esi.is_none() && !rationale.is_empty() {
        esi = ESI_IN_TEXT
            .captures(rationale)
            .map(|caps| caps[1].to_string());
    }

    if esi.is_none() {
        esi = infer_level_from_keywords(&assessment_text(assessment))
            .map(|level| level.as_str().to_string());
    }

    compose_summary(esi.as_deref(), rationale)
}

/// Joined text of every field, for keyword scans over a whole assessment.
pub fn assessment_text(assessment: &Assessment) -> String {
    assessment
        .fields()
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(_, value)| match value {
            FieldRef::Text(s) => s.to_string(),
            FieldRef::List(items) => items.join(" "),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
