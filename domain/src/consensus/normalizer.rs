//! Consensus answer normalization.
//!
//! The consensus model is asked for a fixed format but answers in prose.
//! Each field is recovered by an ordered list of strategies; the first that
//! matches decides, and every field has a default, so [`ConsensusNormalizer::normalize`]
//! always yields a usable [`ConsensusResult`].
//!
//! | Field | Strategies | Default |
//! |-------|------------|---------|
//! | ESI level | `ESI Level: N`, `Level: N`, `ESI ... N`, standalone digit | 3 |
//! | Confidence | `Confidence: NN%` (clamped to 100) | 80 |
//! | Justification | text between justification and actions headers | fixed sentence |
//! | Actions | list under actions header, list items anywhere | level template |

use regex::Regex;
use std::sync::LazyLock;

use super::result::{ConsensusResult, DEFAULT_CONFIDENCE, NO_JUSTIFICATION};
use super::symptoms::SymptomLexicon;
use super::templates::default_actions;
use crate::assessment::sections::split_list_items;
use crate::triage::EsiLevel;

// Digits are ASCII only: numerals from other scripts do not parse as numbers.
static ESI_LABELED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:Final\s+)?ESI\s+Level[*_]*\s*:\s*[*_]*\s*([0-9])").unwrap()
});

// Also matches inside "Confidence Level:", so it runs after ESI_LABELED
static LEVEL_LABELED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Level[*_]*\s*:\s*[*_]*\s*([0-9])").unwrap());

static ESI_LOOSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)ESI.*?([0-9])").unwrap());

static STANDALONE_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\s)([0-9])(?:$|\s)").unwrap());

static CONFIDENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Confidence(?:\s*Level)?[*_]*\s*:\s*[*_]*\s*([0-9]+)%?").unwrap()
});

static JUSTIFICATION_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:Clinical\s+Justification(?:\s+for\s+ESI\s+Level)?|Justification|Rationale)[*_]*\s*:[*_]*",
    )
    .unwrap()
});

static ACTIONS_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Recommended(?:\s*Immediate)?\s*Actions[*_]*\s*:?[*_]*").unwrap()
});

/// Longest list item accepted by the whole-text scan, in characters
const MAX_SCANNED_ACTION_CHARS: usize = 200;

/// Phrases marking a scanned list item as part of the answer format
const META_PHRASES: [&str; 4] = [
    "ESI Level",
    "Confidence",
    "Justification",
    "Recommended Actions",
];

/// ESI level from the first strategy that matches; out-of-range digits and
/// no match at all fall back to level 3.
pub fn parse_esi_level(text: &str) -> EsiLevel {
    [&*ESI_LABELED, &*LEVEL_LABELED, &*ESI_LOOSE, &*STANDALONE_DIGIT]
        .iter()
        .find_map(|re| re.captures(text))
        .and_then(|caps| caps[1].parse::<EsiLevel>().ok())
        .unwrap_or_default()
}

/// Reported confidence, clamped to 0-100, default 80
pub fn parse_confidence(text: &str) -> u8 {
    CONFIDENCE
        .captures(text)
        // Only overflow fails to parse here, and overflow clamps to 100
        .map(|caps| caps[1].parse::<u64>().map_or(100, |c| c.min(100) as u8))
        .unwrap_or(DEFAULT_CONFIDENCE)
}

/// Text between the justification header and the actions header
pub fn parse_justification(text: &str) -> String {
    let Some(header) = JUSTIFICATION_HEADER.find(text) else {
        return NO_JUSTIFICATION.to_string();
    };
    let rest = &text[header.end()..];
    let end = ACTIONS_HEADER.find(rest).map_or(rest.len(), |m| m.start());
    let justification = rest[..end].trim_matches(|c: char| c.is_whitespace() || c == '*' || c == '_');

    if justification.is_empty() {
        NO_JUSTIFICATION.to_string()
    } else {
        justification.to_string()
    }
}

/// List items under the actions header, or from the whole answer when the
/// header yields nothing usable. Empty when neither strategy finds any.
pub fn parse_actions(text: &str) -> Vec<String> {
    let under_header: Vec<String> = ACTIONS_HEADER
        .find(text)
        .map(|m| split_list_items(&text[m.end()..]))
        .unwrap_or_default()
        .into_iter()
        .filter(|item| !item.starts_with("**"))
        .collect();

    if !under_header.is_empty() && !under_header.iter().any(|item| item.contains("**")) {
        return under_header;
    }

    split_list_items(text)
        .into_iter()
        .filter(|item| {
            !item.starts_with("**")
                && !META_PHRASES.iter().any(|phrase| item.contains(phrase))
                && item.chars().count() < MAX_SCANNED_ACTION_CHARS
        })
        .collect()
}

/// Turns a raw consensus answer into a [`ConsensusResult`]
#[derive(Debug, Clone, Default)]
pub struct ConsensusNormalizer {
    lexicon: SymptomLexicon,
}

impl ConsensusNormalizer {
    pub fn new(lexicon: SymptomLexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &SymptomLexicon {
        &self.lexicon
    }

    pub fn normalize(&self, raw: &str) -> ConsensusResult {
        let esi_level = parse_esi_level(raw);
        let justification = parse_justification(raw);

        let mut recommended_actions = parse_actions(raw);
        if recommended_actions.is_empty() {
            let symptoms = self.lexicon.describe(&justification);
            recommended_actions = default_actions(esi_level, &symptoms);
        }

        ConsensusResult {
            esi_level,
            confidence: parse_confidence(raw),
            justification,
            recommended_actions,
            discussion_summary: String::new(),
        }
    }
}

/// Normalize with the default symptom lexicon
pub fn normalize(raw: &str) -> ConsensusResult {
    ConsensusNormalizer::default().normalize(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_answer() {
        let raw = "\
ESI Level: 2
Confidence: 90%
Clinical Justification: Chest pain radiating to the left arm with diaphoresis.
Recommended Immediate Actions:
- Obtain 12-lead ECG within 10 minutes for suspected ACS
- Aspirin 325 mg chewed given chest pain
- Serial troponins";
        let result = normalize(raw);
        assert_eq!(result.esi_level, EsiLevel::Two);
        assert_eq!(result.confidence, 90);
        assert_eq!(
            result.justification,
            "Chest pain radiating to the left arm with diaphoresis."
        );
        assert_eq!(result.recommended_actions.len(), 3);
        assert_eq!(result.recommended_actions[2], "Serial troponins");
    }

    #[test]
    fn test_exact_format_round_trip() {
        let raw = "ESI Level: 2\nConfidence: 90%\nClinical Justification: X\nRecommended Immediate Actions:\n- a\n- b\n- c";
        let result = normalize(raw);
        assert_eq!(
            result,
            ConsensusResult {
                esi_level: EsiLevel::Two,
                confidence: 90,
                justification: "X".to_string(),
                recommended_actions: vec!["a".to_string(), "b".to_string(), "c".to_string()],
                discussion_summary: String::new(),
            }
        );
    }

    #[test]
    fn test_confidence_level_before_esi_line() {
        assert_eq!(parse_esi_level("Confidence Level: 85%\nESI Level: 2"), EsiLevel::Two);
        assert_eq!(parse_esi_level("Triage Level: 4"), EsiLevel::Four);
        let result = normalize("**Confidence Level:** 85%\n**ESI Level:** 2");
        assert_eq!(result.esi_level, EsiLevel::Two);
        assert_eq!(result.confidence, 85);
    }

    #[test]
    fn test_non_ascii_digits_are_not_numbers() {
        assert_eq!(parse_confidence("Confidence: \u{669}\u{660}%"), 80);
        assert_eq!(normalize("ESI Level: 2\nConfidence: \u{669}\u{660}%").confidence, 80);
        assert_eq!(parse_esi_level("ESI Level: \u{662}"), EsiLevel::Three);
    }

    #[test]
    fn test_markdown_emphasis() {
        let raw = "**ESI Level:** 1\n**Confidence:** 95%\n**Clinical Justification:** Apneic.\n**Recommended Immediate Actions:**\n- Bag-valve-mask ventilation\n- Call airway team";
        let result = normalize(raw);
        assert_eq!(result.esi_level, EsiLevel::One);
        assert_eq!(result.confidence, 95);
        assert_eq!(result.justification, "Apneic.");
        assert_eq!(
            result.recommended_actions,
            vec!["Bag-valve-mask ventilation", "Call airway team"]
        );
    }

    #[test]
    fn test_level_strategies() {
        assert_eq!(parse_esi_level("Final ESI Level: 4"), EsiLevel::Four);
        assert_eq!(parse_esi_level("I would assign ESI 5 here"), EsiLevel::Five);
        assert_eq!(parse_esi_level("Overall: \n 2 \n"), EsiLevel::Two);
        assert_eq!(parse_esi_level("ESI Level: 7"), EsiLevel::Three);
        assert_eq!(parse_esi_level("no digits at all"), EsiLevel::Three);
    }

    #[test]
    fn test_confidence_defaults_and_clamps() {
        assert_eq!(parse_confidence("nothing"), 80);
        assert_eq!(parse_confidence("Confidence Level: 70"), 70);
        assert_eq!(parse_confidence("Confidence: 150%"), 100);
    }

    #[test]
    fn test_missing_justification() {
        assert_eq!(parse_justification("ESI Level: 3"), "No justification provided.");
    }

    #[test]
    fn test_emphasized_header_items_fall_back_to_whole_text() {
        let raw = "\
Key concerns:
- Possible STEMI given ST elevation
- Confidence in diagnosis is high

ESI Level: 1
Recommended Actions:
- **Cardiac**: activate cath lab";
        assert_eq!(parse_actions(raw), vec!["Possible STEMI given ST elevation"]);
    }

    #[test]
    fn test_synthesized_actions_use_symptoms() {
        let raw = "ESI Level: 1\nConfidence: 90%\nJustification: Unresponsive after trauma with active bleeding.";
        let result = normalize(raw);
        assert_eq!(result.recommended_actions.len(), 5);
        assert_eq!(
            result.recommended_actions[0],
            "Immediate intervention by emergency physician for bleeding and trauma"
        );
    }

    #[test]
    fn test_garbage_is_still_valid() {
        let result = normalize("I am unable to decide.");
        assert_eq!(result.esi_level, EsiLevel::Three);
        assert_eq!(result.confidence, 80);
        assert_eq!(result.justification, "No justification provided.");
        assert_eq!(result.recommended_actions.len(), 5);
        assert!(result.recommended_actions[0].contains("presenting condition"));
    }
}
