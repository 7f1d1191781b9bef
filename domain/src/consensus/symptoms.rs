//! Symptom lexicon used to tailor fallback recommendations

use serde::{Deserialize, Serialize};

/// Label used when no symptom is recognized
pub const DEFAULT_SYMPTOM: &str = "presenting condition";

/// One recognizable symptom and the phrases that reveal it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomRule {
    pub label: String,
    pub keywords: Vec<String>,
}

impl SymptomRule {
    pub fn new(label: impl Into<String>, keywords: &[&str]) -> Self {
        Self {
            label: label.into(),
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    fn matches(&self, lowered: &str) -> bool {
        self.keywords
            .iter()
            .any(|k| lowered.contains(k.to_lowercase().as_str()))
    }
}

/// Ordered symptom rules. Matching is substring based and case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymptomLexicon {
    rules: Vec<SymptomRule>,
}

impl Default for SymptomLexicon {
    fn default() -> Self {
        Self::new(vec![
            SymptomRule::new("chest pain", &["chest pain"]),
            SymptomRule::new("respiratory distress", &["shortness of breath", "sob"]),
            SymptomRule::new("fever", &["fever"]),
            SymptomRule::new("bleeding", &["bleeding"]),
            SymptomRule::new("trauma", &["trauma", "injury"]),
            SymptomRule::new("pain", &["pain"]),
        ])
    }
}

impl SymptomLexicon {
    pub fn new(rules: Vec<SymptomRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[SymptomRule] {
        &self.rules
    }

    /// Labels of every rule matching `text`, in lexicon order
    pub fn detect(&self, text: &str) -> Vec<&str> {
        let lowered = text.to_lowercase();
        self.rules
            .iter()
            .filter(|rule| rule.matches(&lowered))
            .map(|rule| rule.label.as_str())
            .collect()
    }

    /// Detected labels joined with " and ", or [`DEFAULT_SYMPTOM`]
    pub fn describe(&self, text: &str) -> String {
        let found = self.detect(text);
        if found.is_empty() {
            DEFAULT_SYMPTOM.to_string()
        } else {
            found.join(" and ")
        }
    }
}
