//! Emergency Severity Index level

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// ESI acuity level (1 = most urgent, 5 = least)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum EsiLevel {
    One,
    Two,
    #[default]
    Three,
    Four,
    Five,
}

impl EsiLevel {
    pub const ALL: [EsiLevel; 5] = [
        EsiLevel::One,
        EsiLevel::Two,
        EsiLevel::Three,
        EsiLevel::Four,
        EsiLevel::Five,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EsiLevel::One => "1",
            EsiLevel::Two => "2",
            EsiLevel::Three => "3",
            EsiLevel::Four => "4",
            EsiLevel::Five => "5",
        }
    }

    pub fn number(&self) -> u8 {
        match self {
            EsiLevel::One => 1,
            EsiLevel::Two => 2,
            EsiLevel::Three => 3,
            EsiLevel::Four => 4,
            EsiLevel::Five => 5,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(EsiLevel::One),
            2 => Some(EsiLevel::Two),
            3 => Some(EsiLevel::Three),
            4 => Some(EsiLevel::Four),
            5 => Some(EsiLevel::Five),
            _ => None,
        }
    }

    /// Reference description used in prompts and reports
    pub fn description(&self) -> &'static str {
        match self {
            EsiLevel::One => "Requires immediate life-saving intervention",
            EsiLevel::Two => "High-risk situation, severe pain/distress, or vital sign abnormalities",
            EsiLevel::Three => "Requires multiple resources but stable vital signs",
            EsiLevel::Four => "Requires one resource",
            EsiLevel::Five => "Requires no resources",
        }
    }

    /// Shorter wording used in the quick reference card
    pub fn short_description(&self) -> &'static str {
        match self {
            EsiLevel::Two => "High risk situation; severe pain/distress",
            other => other.description(),
        }
    }
}

impl std::fmt::Display for EsiLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for EsiLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .ok()
            .and_then(Self::from_number)
            .ok_or_else(|| DomainError::InvalidEsiLevel(s.to_string()))
    }
}

impl Serialize for EsiLevel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EsiLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
