//! Model value object representing an LLM model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// LLM models that can back a triage role (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    // Reasoning models
    O1Mini,
    O1Preview,
    O1,
    // Chat models
    Gpt4o,
    Gpt4oMini,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::O1Mini => "o1-mini",
            Model::O1Preview => "o1-preview",
            Model::O1 => "o1",
            Model::Gpt4o => "gpt-4o",
            Model::Gpt4oMini => "gpt-4o-mini",
            Model::Custom(s) => s,
        }
    }

    /// Reasoning models take no system role and no temperature.
    ///
    /// Custom identifiers are classified by their `o1` prefix so that dated
    /// snapshots (e.g. `o1-2024-12-17`) get the same request shape.
    pub fn is_reasoning(&self) -> bool {
        match self {
            Model::O1Mini | Model::O1Preview | Model::O1 => true,
            Model::Gpt4o | Model::Gpt4oMini => false,
            Model::Custom(s) => s.starts_with("o1"),
        }
    }
}

impl Default for Model {
    /// Returns the default deliberation model (o1-mini)
    fn default() -> Self {
        Model::O1Mini
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.trim() {
            "o1-mini" => Model::O1Mini,
            "o1-preview" => Model::O1Preview,
            "o1" => Model::O1,
            "gpt-4o" => Model::Gpt4o,
            "gpt-4o-mini" => Model::Gpt4oMini,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(model) => model,
            Err(never) => match never {},
        }
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Model::from(s.as_str()))
    }
}
