//! Transcript sink writing one text file per deliberation

use std::path::PathBuf;
use tracing::debug;
use triage_application::{SinkError, TranscriptSink};
use triage_domain::DeliberationTranscript;
use triage_domain::report::{file_stamp, render_transcript};

pub struct FileTranscriptSink {
    dir: PathBuf,
}

impl FileTranscriptSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }
}

impl TranscriptSink for FileTranscriptSink {
    fn write(&self, transcript: &DeliberationTranscript) -> Result<Option<PathBuf>, SinkError> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(format!(
            "{}_{}.txt",
            transcript.case_id,
            file_stamp(transcript.timestamp)
        ));
        std::fs::write(&path, render_transcript(transcript))?;
        debug!("Transcript written to {}", path.display());
        Ok(Some(path))
    }
}
