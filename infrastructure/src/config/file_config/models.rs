//! Model selection from TOML (`[models]` section)

use serde::{Deserialize, Serialize};
use triage_domain::{ConfigIssue, ConfigIssueCode, Model};

/// Model selection from TOML
///
/// # Example
///
/// ```toml
/// [models]
/// agent = "o1-mini"        # Triage Nurse, Emergency Physician, Medical Consultant
/// consensus = "gpt-4o"     # Final consensus and differential diagnoses
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    /// Model backing the three role agents
    pub agent: Option<String>,
    /// Model for the consensus query (defaults to `agent`)
    pub consensus: Option<String>,
}

impl FileModelsConfig {
    /// Parse a single model string, collecting issues for empty names.
    fn parse_single_model(field: &str, value: Option<&String>) -> (Option<Model>, Vec<ConfigIssue>) {
        match value {
            None => (None, Vec::new()),
            Some(s) if s.trim().is_empty() => (
                None,
                vec![ConfigIssue::error(
                    ConfigIssueCode::EmptyModelName {
                        field: field.to_string(),
                    },
                    format!("models.{}: model name cannot be empty", field),
                )],
            ),
            Some(s) => (Some(Model::from(s.as_str())), Vec::new()),
        }
    }

    pub fn parse_agent(&self) -> (Option<Model>, Vec<ConfigIssue>) {
        Self::parse_single_model("agent", self.agent.as_ref())
    }

    pub fn parse_consensus(&self) -> (Option<Model>, Vec<ConfigIssue>) {
        Self::parse_single_model("consensus", self.consensus.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_models_config_deserialize() {
        let toml_str = r#"
[models]
agent = "gpt-4o-mini"
consensus = "o1"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.models.parse_agent().0, Some(Model::Gpt4oMini));
        assert_eq!(config.models.parse_consensus().0, Some(Model::O1));
    }

    #[test]
    fn test_custom_model_name() {
        let config = FileModelsConfig {
            agent: Some("llama3.1:70b".to_string()),
            consensus: None,
        };
        assert_eq!(
            config.parse_agent().0,
            Some(Model::Custom("llama3.1:70b".to_string()))
        );
        assert_eq!(config.parse_consensus(), (None, vec![]));
    }

    #[test]
    fn test_empty_model_name_is_an_error() {
        let config = FileModelsConfig {
            agent: Some("  ".to_string()),
            consensus: None,
        };
        let (model, issues) = config.parse_agent();
        assert!(model.is_none());
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
        assert_eq!(
            issues[0].code,
            ConfigIssueCode::EmptyModelName {
                field: "agent".to_string()
            }
        );
    }
}
