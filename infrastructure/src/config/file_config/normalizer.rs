//! Consensus normalizer settings from TOML (`[normalizer]` section)

use serde::{Deserialize, Serialize};
use triage_domain::{ConfigIssue, ConfigIssueCode, SymptomLexicon, SymptomRule};

/// Symptom rules for tailoring fallback recommendations
///
/// ```toml
/// [[normalizer.symptoms]]
/// label = "abdominal pain"
/// keywords = ["abdominal pain", "belly pain"]
/// ```
///
/// When present, the list replaces the built-in lexicon entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileNormalizerConfig {
    pub symptoms: Option<Vec<SymptomRule>>,
}

impl FileNormalizerConfig {
    pub fn lexicon(&self) -> SymptomLexicon {
        match &self.symptoms {
            Some(rules) => SymptomLexicon::new(
                rules
                    .iter()
                    .filter(|r| !r.label.trim().is_empty() && !r.keywords.is_empty())
                    .cloned()
                    .collect(),
            ),
            None => SymptomLexicon::default(),
        }
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        self.symptoms
            .iter()
            .flatten()
            .enumerate()
            .filter(|(_, r)| r.label.trim().is_empty() || r.keywords.is_empty())
            .map(|(index, _)| {
                ConfigIssue::warning(
                    ConfigIssueCode::EmptySymptomRule { index },
                    format!(
                        "normalizer.symptoms[{}]: needs a label and at least one keyword, ignored",
                        index
                    ),
                )
            })
            .collect()
    }
}
