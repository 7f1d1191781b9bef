//! Reference ESI examples embedded in system prompts.
//!
//! A catalogue groups scenarios by the level their answer states
//! (`"ESI level N"`). Prompts carry a small seeded sample so the same
//! configuration always produces the same prompt.

use std::collections::BTreeMap;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::core::error::DomainError;
use crate::triage::{EsiLevel, Role};

static STATED_LEVEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)ESI\s+level\s+([0-9])").unwrap());

/// A worked triage scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceExample {
    pub scenario: String,
    pub answer: String,
}

impl ReferenceExample {
    pub fn new(scenario: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            scenario: scenario.into(),
            answer: answer.into(),
        }
    }

    /// Level stated in the answer, if any
    pub fn stated_level(&self) -> Option<EsiLevel> {
        STATED_LEVEL
            .captures(&self.answer)
            .and_then(|caps| caps[1].parse().ok())
    }
}

#[derive(Deserialize)]
struct CatalogueFile {
    #[serde(default)]
    scenarios: Vec<ReferenceExample>,
}

/// Examples grouped by ESI level
pub type ExampleSample = BTreeMap<EsiLevel, Vec<ReferenceExample>>;

/// All known reference examples, grouped by level
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExampleCatalogue {
    by_level: ExampleSample,
}

impl ExampleCatalogue {
    /// Group examples by stated level. Examples without one are dropped.
    pub fn new(examples: impl IntoIterator<Item = ReferenceExample>) -> Self {
        let mut by_level = ExampleSample::new();
        for example in examples {
            if let Some(level) = example.stated_level() {
                by_level.entry(level).or_default().push(example);
            }
        }
        Self { by_level }
    }

    /// Parse a `{"scenarios": [{"scenario", "answer"}]}` document
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let file: CatalogueFile =
            serde_json::from_str(json).map_err(|e| DomainError::InvalidExamples(e.to_string()))?;
        Ok(Self::new(file.scenarios))
    }

    pub fn len(&self) -> usize {
        self.by_level.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_level.is_empty()
    }

    pub fn level(&self, level: EsiLevel) -> &[ReferenceExample] {
        self.by_level.get(&level).map(Vec::as_slice).unwrap_or_default()
    }

    /// Up to `per_level` examples for each level that has any.
    ///
    /// Deterministic for a given catalogue, `per_level` and `seed`.
    pub fn sample(&self, per_level: usize, seed: u64) -> ExampleSample {
        let mut rng = StdRng::seed_from_u64(seed);
        self.by_level
            .iter()
            .map(|(level, examples)| {
                let picked: Vec<_> = examples
                    .choose_multiple(&mut rng, per_level.min(examples.len()))
                    .cloned()
                    .collect();
                (*level, picked)
            })
            .filter(|(_, picked)| !picked.is_empty())
            .collect()
    }
}

/// Who the examples are written for; decides the labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    Nurse,
    Physician,
    Consultant,
    Consensus,
}

impl Audience {
    /// (scenario label, answer label)
    pub fn labels(&self) -> (&'static str, &'static str) {
        match self {
            Audience::Nurse => ("Patient Presentation", "Assessment"),
            Audience::Physician => ("Clinical Scenario", "Medical Assessment"),
            Audience::Consultant => ("Case Presentation", "Specialist Assessment"),
            Audience::Consensus => ("Scenario", "Assessment"),
        }
    }
}

impl From<Role> for Audience {
    fn from(role: Role) -> Self {
        match role {
            Role::TriageNurse => Audience::Nurse,
            Role::EmergencyPhysician => Audience::Physician,
            Role::MedicalConsultant => Audience::Consultant,
        }
    }
}

/// Render a sample as prompt text, lowest level first
pub fn format_examples(sample: &ExampleSample, audience: Audience) -> String {
    let (scenario_label, answer_label) = audience.labels();
    sample
        .iter()
        .flat_map(|(level, examples)| {
            examples.iter().map(move |example| {
                format!(
                    "ESI LEVEL {} EXAMPLE:\n{}: {}\n{}: {}\n",
                    level, scenario_label, example.scenario, answer_label, example.answer
                )
            })
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalogue() -> ExampleCatalogue {
        ExampleCatalogue::new(vec![
            ReferenceExample::new("Cardiac arrest", "This is ESI level 1."),
            ReferenceExample::new("Apneic infant", "ESI level 1 due to apnea."),
            ReferenceExample::new("Sprained ankle", "Assign ESI level 4."),
            ReferenceExample::new("Unlabeled", "No level here."),
        ])
    }

    #[test]
    fn test_grouping_drops_unlabeled() {
        let catalogue = catalogue();
        assert_eq!(catalogue.len(), 3);
        assert_eq!(catalogue.level(EsiLevel::One).len(), 2);
        assert!(catalogue.level(EsiLevel::Two).is_empty());
    }

    #[test]
    fn test_sample_is_seeded() {
        let catalogue = catalogue();
        let a = catalogue.sample(1, 42);
        let b = catalogue.sample(1, 42);
        assert_eq!(a, b);
        assert_eq!(a.keys().copied().collect::<Vec<_>>(), vec![EsiLevel::One, EsiLevel::Four]);
        assert_eq!(a[&EsiLevel::One].len(), 1);
    }

    #[test]
    fn test_sample_caps_at_available() {
        let sample = catalogue().sample(5, 7);
        assert_eq!(sample[&EsiLevel::One].len(), 2);
        assert_eq!(sample[&EsiLevel::Four].len(), 1);
        assert!(catalogue().sample(0, 7).is_empty());
    }

    #[test]
    fn test_format_labels_per_audience() {
        let mut sample = ExampleSample::new();
        sample.insert(
            EsiLevel::Four,
            vec![ReferenceExample::new("Sprained ankle", "ESI level 4")],
        );
        assert_eq!(
            format_examples(&sample, Audience::Physician),
            "ESI LEVEL 4 EXAMPLE:\nClinical Scenario: Sprained ankle\nMedical Assessment: ESI level 4\n"
        );
        assert!(format_examples(&sample, Role::TriageNurse.into()).contains("Patient Presentation:"));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{"scenarios": [{"scenario": "Stroke symptoms", "answer": "ESI level 2"}]}"#;
        let catalogue = ExampleCatalogue::from_json(json).unwrap();
        assert_eq!(catalogue.level(EsiLevel::Two).len(), 1);
        assert!(ExampleCatalogue::from_json("not json").is_err());
    }
}
