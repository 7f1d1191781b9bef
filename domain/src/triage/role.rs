//! Clinical roles taking part in a deliberation

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// One of the three simulated clinical perspectives
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    TriageNurse,
    EmergencyPhysician,
    MedicalConsultant,
}

impl Role {
    /// Protocol order. Transcript readers rely on it.
    pub const ALL: [Role; 3] = [
        Role::TriageNurse,
        Role::EmergencyPhysician,
        Role::MedicalConsultant,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::TriageNurse => "Triage Nurse",
            Role::EmergencyPhysician => "Emergency Physician",
            Role::MedicalConsultant => "Medical Consultant",
        }
    }

    /// Lower-case noun phrase used inside prompts ("a triage nurse")
    pub fn perspective(&self) -> &'static str {
        match self {
            Role::TriageNurse => "a triage nurse",
            Role::EmergencyPhysician => "an emergency physician",
            Role::MedicalConsultant => "a medical consultant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_'], " ").as_str() {
            "triage nurse" | "nurse" => Ok(Role::TriageNurse),
            "emergency physician" | "physician" => Ok(Role::EmergencyPhysician),
            "medical consultant" | "consultant" => Ok(Role::MedicalConsultant),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}
