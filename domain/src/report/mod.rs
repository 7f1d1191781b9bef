//! Plain-text and JSON renderings of a finished deliberation.
//!
//! Pure formatting; writing files is an infrastructure concern.

pub mod case;
pub mod render;

pub use case::{CaseReport, file_stamp, generate_case_id, iso_timestamp};
pub use render::{
    render_differential, render_quick_reference, render_results_text, render_transcript,
};
