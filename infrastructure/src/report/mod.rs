//! File-based case reports.
//!
//! | Output | Location |
//! |--------|----------|
//! | Discussion transcript | `{discussions_dir}/{case_id}_{stamp}.txt` |
//! | Results (JSON + text) | `{results_dir}/{case_id}_{stamp}.json` / `.txt` |
//! | Quick reference | `{quick_ref_dir}/{case_id}_quick_ref_{stamp}.md` |
//! | Differential diagnoses | `{differential_dir}/{case_id}_differential_diagnoses_{stamp}.txt` |
//!
//! `stamp` is `YYYYmmdd_HHMMSS` in local time.

mod transcript;
mod writer;

pub use transcript::FileTranscriptSink;
pub use writer::{ReportDirs, ReportError, ReportWriter, WrittenReports};
