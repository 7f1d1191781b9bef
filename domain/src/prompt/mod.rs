//! Prompt templates and reference examples

pub mod examples;
pub mod template;

pub use examples::{Audience, ExampleCatalogue, ExampleSample, ReferenceExample, format_examples};
pub use template::{TriagePrompts, esi_reference, render_assessment};
