//! Free text to structured assessment.
//!
//! [`extract`] never fails. Sections the model left out come back empty and
//! the summary degrades through fixed wordings instead.

use std::collections::HashMap;

use super::entities::{Assessment, ConsultantAssessment, NurseAssessment, PhysicianAssessment};
use super::schema::AssessmentSchema;
use super::sections::{first_number, section_content, split_list_items};
use crate::core::string::prefix_chars;
use crate::triage::Role;

/// Characters of rationale kept in a summary
pub const SUMMARY_RATIONALE_CHARS: usize = 100;

/// Section texts located in one answer, keyed by field name
struct Sections<'a> {
    found: HashMap<&'static str, &'a str>,
}

impl<'a> Sections<'a> {
    fn locate(schema: &AssessmentSchema, text: &'a str) -> Self {
        let found = schema
            .sections
            .iter()
            .filter_map(|spec| {
                section_content(text, spec, schema.next_section(spec)).map(|content| (spec.key, content))
            })
            .collect();
        Self { found }
    }

    fn text(&self, key: &str) -> String {
        self.found.get(key).map(|s| s.to_string()).unwrap_or_default()
    }

    fn list(&self, key: &str) -> Vec<String> {
        self.found.get(key).map(|s| split_list_items(s)).unwrap_or_default()
    }
}

/// Build the one-line summary from an ESI numeral and a rationale.
pub fn compose_summary(esi_numeral: Option<&str>, rationale: &str) -> String {
    let rationale = prefix_chars(rationale.trim(), SUMMARY_RATIONALE_CHARS);
    match (esi_numeral, rationale.is_empty()) {
        (Some(n), false) => format!("ESI Level: {}. Rationale: {}...", n, rationale),
        (Some(n), true) => format!("ESI Level: {}. No detailed rationale provided.", n),
        (None, false) => format!("No ESI level specified. Assessment: {}...", rationale),
        (None, true) => "Assessment completed but no ESI level or rationale found.".to_string(),
    }
}

/// Extract a role's assessment from the model's free-text answer.
pub fn extract(schema: &AssessmentSchema, text: &str) -> Assessment {
    let sections = Sections::locate(schema, text);
    let esi = sections.text(schema.esi_field);
    let summary = compose_summary(first_number(&esi), &sections.text(schema.rationale_field));

    match schema.role {
        Role::TriageNurse => Assessment::Nurse(NurseAssessment {
            initial_impression: sections.text("initial_impression"),
            chief_complaint: sections.text("chief_complaint"),
            concerning_findings: sections.text("concerning_findings"),
            resource_needs: sections.text("resource_needs"),
            recommended_esi: esi,
            rationale: sections.text("rationale"),
            immediate_interventions: sections.list("immediate_interventions"),
            notes: sections.text("notes"),
            summary,
        }),
        Role::EmergencyPhysician => Assessment::Physician(PhysicianAssessment {
            clinical_assessment: sections.text("clinical_assessment"),
            potential_diagnoses: sections.list("potential_diagnoses"),
            esi_level: esi,
            immediate_actions: sections.list("immediate_actions"),
            diagnostic_studies: sections.list("diagnostic_studies"),
            risk_assessment: sections.text("risk_assessment"),
            disposition: sections.text("disposition"),
            summary,
        }),
        Role::MedicalConsultant => Assessment::Consultant(ConsultantAssessment {
            specialist_impression: sections.text("specialist_impression"),
            differential_considerations: sections.list("differential_considerations"),
            esi_evaluation: esi,
            specialized_recommendations: sections.list("specialized_recommendations"),
            potential_pitfalls: sections.text("potential_pitfalls"),
            additional_insights: sections.text("additional_insights"),
            summary,
        }),
    }
}

/// Extract using the schema of `role`.
pub fn extract_for_role(role: Role, text: &str) -> Assessment {
    extract(AssessmentSchema::for_role(role), text)
}
