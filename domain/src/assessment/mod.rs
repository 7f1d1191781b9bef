//! Role assessments and their tolerant extraction from model output.

pub mod entities;
pub mod extractor;
pub mod schema;
pub mod sections;
pub mod summary;

pub use entities::{
    Assessment, ConsultantAssessment, FieldRef, NurseAssessment, PhysicianAssessment,
};
pub use extractor::{compose_summary, extract, extract_for_role};
pub use schema::{AssessmentSchema, SectionKind, SectionSpec};
pub use summary::summarize_for_discussion;
