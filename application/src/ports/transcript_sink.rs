//! Transcript sink port
//!
//! Receives the complete record of each finished deliberation.

use std::path::PathBuf;
use thiserror::Error;
use triage_domain::DeliberationTranscript;

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Destination for finished deliberation transcripts.
///
/// Returns the location written to, if the sink has one.
pub trait TranscriptSink: Send + Sync {
    fn write(&self, transcript: &DeliberationTranscript) -> Result<Option<PathBuf>, SinkError>;
}

/// Sink that discards transcripts
pub struct NoTranscriptSink;

impl TranscriptSink for NoTranscriptSink {
    fn write(&self, _transcript: &DeliberationTranscript) -> Result<Option<PathBuf>, SinkError> {
        Ok(None)
    }
}
