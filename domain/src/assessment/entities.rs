//! Structured role assessments (Entities)

use serde::{Deserialize, Serialize};

use crate::triage::Role;

/// Borrowed view of one assessment field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRef<'a> {
    Text(&'a str),
    List(&'a [String]),
}

impl<'a> FieldRef<'a> {
    pub fn is_empty(&self) -> bool {
        match self {
            FieldRef::Text(s) => s.is_empty(),
            FieldRef::List(items) => items.is_empty(),
        }
    }

    /// Text content, `None` for list fields
    pub fn as_text(&self) -> Option<&'a str> {
        match *self {
            FieldRef::Text(s) => Some(s),
            FieldRef::List(_) => None,
        }
    }
}

impl std::fmt::Display for FieldRef<'_> {
    /// Lists render on one line, items separated by "; "
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldRef::Text(s) => write!(f, "{}", s),
            FieldRef::List(items) => write!(f, "{}", items.join("; ")),
        }
    }
}

/// Triage nurse assessment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NurseAssessment {
    pub initial_impression: String,
    pub chief_complaint: String,
    pub concerning_findings: String,
    pub resource_needs: String,
    pub recommended_esi: String,
    pub rationale: String,
    pub immediate_interventions: Vec<String>,
    pub notes: String,
    pub summary: String,
}

/// Emergency physician assessment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhysicianAssessment {
    pub clinical_assessment: String,
    pub potential_diagnoses: Vec<String>,
    pub esi_level: String,
    pub immediate_actions: Vec<String>,
    pub diagnostic_studies: Vec<String>,
    pub risk_assessment: String,
    pub disposition: String,
    pub summary: String,
}

/// Medical consultant assessment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultantAssessment {
    pub specialist_impression: String,
    pub differential_considerations: Vec<String>,
    pub esi_evaluation: String,
    pub specialized_recommendations: Vec<String>,
    pub potential_pitfalls: String,
    pub additional_insights: String,
    pub summary: String,
}

/// Assessment produced by one role, tagged by its role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role")]
pub enum Assessment {
    #[serde(rename = "triage_nurse")]
    Nurse(NurseAssessment),
    #[serde(rename = "emergency_physician")]
    Physician(PhysicianAssessment),
    #[serde(rename = "medical_consultant")]
    Consultant(ConsultantAssessment),
}

impl Assessment {
    pub fn role(&self) -> Role {
        match self {
            Assessment::Nurse(_) => Role::TriageNurse,
            Assessment::Physician(_) => Role::EmergencyPhysician,
            Assessment::Consultant(_) => Role::MedicalConsultant,
        }
    }

    pub fn summary(&self) -> &str {
        match self {
            Assessment::Nurse(a) => &a.summary,
            Assessment::Physician(a) => &a.summary,
            Assessment::Consultant(a) => &a.summary,
        }
    }

    /// The role's ESI recommendation as written by the model
    pub fn esi_field(&self) -> &str {
        match self {
            Assessment::Nurse(a) => &a.recommended_esi,
            Assessment::Physician(a) => &a.esi_level,
            Assessment::Consultant(a) => &a.esi_evaluation,
        }
    }

    /// The role's primary rationale
    pub fn rationale_field(&self) -> &str {
        match self {
            Assessment::Nurse(a) => &a.rationale,
            Assessment::Physician(a) => &a.clinical_assessment,
            Assessment::Consultant(a) => &a.specialist_impression,
        }
    }

    /// Chief complaint, when the role records one
    pub fn chief_complaint(&self) -> Option<&str> {
        match self {
            Assessment::Nurse(a) if !a.chief_complaint.is_empty() => Some(&a.chief_complaint),
            _ => None,
        }
    }

    /// All fields in answer order, summary last
    pub fn fields(&self) -> Vec<(&'static str, FieldRef<'_>)> {
        use FieldRef::{List, Text};
        match self {
            Assessment::Nurse(a) => vec![
                ("initial_impression", Text(&a.initial_impression)),
                ("chief_complaint", Text(&a.chief_complaint)),
                ("concerning_findings", Text(&a.concerning_findings)),
                ("resource_needs", Text(&a.resource_needs)),
                ("recommended_esi", Text(&a.recommended_esi)),
                ("rationale", Text(&a.rationale)),
                ("immediate_interventions", List(&a.immediate_interventions)),
                ("notes", Text(&a.notes)),
                ("summary", Text(&a.summary)),
            ],
            Assessment::Physician(a) => vec![
                ("clinical_assessment", Text(&a.clinical_assessment)),
                ("potential_diagnoses", List(&a.potential_diagnoses)),
                ("esi_level", Text(&a.esi_level)),
                ("immediate_actions", List(&a.immediate_actions)),
                ("diagnostic_studies", List(&a.diagnostic_studies)),
                ("risk_assessment", Text(&a.risk_assessment)),
                ("disposition", Text(&a.disposition)),
                ("summary", Text(&a.summary)),
            ],
            Assessment::Consultant(a) => vec![
                ("specialist_impression", Text(&a.specialist_impression)),
                ("differential_considerations", List(&a.differential_considerations)),
                ("esi_evaluation", Text(&a.esi_evaluation)),
                ("specialized_recommendations", List(&a.specialized_recommendations)),
                ("potential_pitfalls", Text(&a.potential_pitfalls)),
                ("additional_insights", Text(&a.additional_insights)),
                ("summary", Text(&a.summary)),
            ],
        }
    }

    /// Look up one field by name
    pub fn field(&self, name: &str) -> Option<FieldRef<'_>> {
        self.fields()
            .into_iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }
}
