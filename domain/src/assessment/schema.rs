//! Per-role section schemas for assessment extraction.
//!
//! Each role asks the model for the same kind of answer: a numbered list of
//! labeled sections. Only the labels and field names differ, so the three
//! roles share one extraction algorithm configured by an
//! [`AssessmentSchema`].

use crate::triage::Role;

/// Whether a section holds prose or a bulleted/numbered list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Text,
    List,
}

/// One numbered section of a role's answer format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpec {
    /// Ordinal marker in the answer ("3." -> 3)
    pub ordinal: u8,
    /// Field name in the extracted assessment
    pub key: &'static str,
    /// Regex fragment matching the section label (case-insensitive)
    pub label: &'static str,
    /// Label as written in the prompt
    pub prompt_label: &'static str,
    pub kind: SectionKind,
}

const fn text(ordinal: u8, key: &'static str, label: &'static str, prompt_label: &'static str) -> SectionSpec {
    SectionSpec { ordinal, key, label, prompt_label, kind: SectionKind::Text }
}

const fn list(ordinal: u8, key: &'static str, label: &'static str, prompt_label: &'static str) -> SectionSpec {
    SectionSpec { ordinal, key, label, prompt_label, kind: SectionKind::List }
}

/// Field schema of one role's assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssessmentSchema {
    pub role: Role,
    pub sections: &'static [SectionSpec],
    /// Field carrying the role's ESI recommendation
    pub esi_field: &'static str,
    /// Field carrying the role's primary rationale
    pub rationale_field: &'static str,
}

pub const NURSE_SECTIONS: &[SectionSpec] = &[
    text(1, "initial_impression", r"Initial\s+Impression", "Initial Impression"),
    text(2, "chief_complaint", r"Chief\s+Complaint", "Chief Complaint (as you understand it)"),
    text(3, "concerning_findings", r"Concerning\s+Findings", "Concerning Findings"),
    text(4, "resource_needs", r"(?:Estimated\s+)?Resource\s+Needs", "Estimated Resource Needs"),
    text(5, "recommended_esi", r"Recommended\s+ESI(?:\s+Level)?", "Recommended ESI Level"),
    text(6, "rationale", r"Rationale", "Rationale"),
    list(
        7,
        "immediate_interventions",
        r"Immediate\s+(?:Nursing\s+)?Interventions",
        "Immediate Nursing Interventions (list at least 2-3 specific actions)",
    ),
    text(8, "notes", r"(?:Additional\s+)?Notes", "Additional Notes"),
];

pub const PHYSICIAN_SECTIONS: &[SectionSpec] = &[
    text(1, "clinical_assessment", r"Clinical\s+Assessment", "Clinical Assessment"),
    list(
        2,
        "potential_diagnoses",
        r"Potential\s+Diagnos[ie]s",
        "Potential Diagnoses (in order of likelihood)",
    ),
    text(3, "esi_level", r"ESI\s+Level", "ESI Level Recommendation"),
    list(
        4,
        "immediate_actions",
        r"Immediate\s+Actions",
        "Immediate Actions/Interventions (list at least 3 specific actions)",
    ),
    list(5, "diagnostic_studies", r"Diagnostic\s+Studies", "Diagnostic Studies (be specific)"),
    text(6, "risk_assessment", r"Risk\s+Assessment", "Risk Assessment"),
    text(7, "disposition", r"Disposition", "Disposition Recommendation"),
];

pub const CONSULTANT_SECTIONS: &[SectionSpec] = &[
    text(1, "specialist_impression", r"Specialist\s+Impression", "Specialist Impression"),
    list(
        2,
        "differential_considerations",
        r"Differential\s+Considerations",
        "Differential Considerations (including rare but critical diagnoses)",
    ),
    text(3, "esi_evaluation", r"ESI\s+Level\s+Evaluation", "ESI Level Evaluation"),
    list(
        4,
        "specialized_recommendations",
        r"Specialized\s+Recommendations",
        "Specialized Recommendations (list at least 3-4 specific actions)",
    ),
    text(5, "potential_pitfalls", r"Potential\s+Pitfalls", "Potential Pitfalls/Concerns"),
    text(6, "additional_insights", r"Additional\s+Insights", "Additional Insights"),
];

impl AssessmentSchema {
    pub const NURSE: AssessmentSchema = AssessmentSchema {
        role: Role::TriageNurse,
        sections: NURSE_SECTIONS,
        esi_field: "recommended_esi",
        rationale_field: "rationale",
    };

    pub const PHYSICIAN: AssessmentSchema = AssessmentSchema {
        role: Role::EmergencyPhysician,
        sections: PHYSICIAN_SECTIONS,
        esi_field: "esi_level",
        rationale_field: "clinical_assessment",
    };

    pub const CONSULTANT: AssessmentSchema = AssessmentSchema {
        role: Role::MedicalConsultant,
        sections: CONSULTANT_SECTIONS,
        esi_field: "esi_evaluation",
        rationale_field: "specialist_impression",
    };

    pub fn for_role(role: Role) -> &'static AssessmentSchema {
        match role {
            Role::TriageNurse => &Self::NURSE,
            Role::EmergencyPhysician => &Self::PHYSICIAN,
            Role::MedicalConsultant => &Self::CONSULTANT,
        }
    }

    /// Section following `spec` in this schema, if any
    pub fn next_section(&self, spec: &SectionSpec) -> Option<&'static SectionSpec> {
        self.sections.iter().find(|s| s.ordinal == spec.ordinal + 1)
    }

    /// Numbered answer format enumerated in the assessment prompt
    pub fn answer_format(&self) -> String {
        self.sections
            .iter()
            .map(|s| format!("{}. {}:", s.ordinal, s.prompt_label))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
