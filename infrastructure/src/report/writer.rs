//! Results, quick reference and differential files

use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;
use triage_application::DeliberationOutcome;
use triage_domain::report::{
    file_stamp, render_differential, render_quick_reference, render_results_text,
};
use triage_domain::{CaseReport, ConsensusResult};

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize results: {0}")]
    Json(#[from] serde_json::Error),
}

/// Output directories for each report kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDirs {
    pub results: PathBuf,
    pub quick_ref: PathBuf,
    pub differential: PathBuf,
}

impl Default for ReportDirs {
    fn default() -> Self {
        Self {
            results: PathBuf::from("results"),
            quick_ref: PathBuf::from("quick_ref"),
            differential: PathBuf::from("differential_diagnoses"),
        }
    }
}

/// Files written for one case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenReports {
    pub results_json: PathBuf,
    pub results_text: PathBuf,
    pub quick_reference: PathBuf,
}

pub struct ReportWriter {
    dirs: ReportDirs,
}

impl ReportWriter {
    pub fn new(dirs: ReportDirs) -> Self {
        Self { dirs }
    }

    pub fn dirs(&self) -> &ReportDirs {
        &self.dirs
    }

    /// Results and quick reference for a finished deliberation
    pub fn write_outcome(
        &self,
        outcome: &DeliberationOutcome,
        at: DateTime<Local>,
    ) -> Result<WrittenReports, ReportError> {
        let stamp = file_stamp(at);
        let report = CaseReport::new(&outcome.case_id, at, &outcome.result);
        let (results_json, results_text) = self.write_results(&report, &stamp)?;
        let quick_reference = self.write_quick_reference(
            &outcome.case_id,
            &stamp,
            &outcome.result,
            outcome.chief_complaint(),
        )?;
        info!("Reports saved for {}", outcome.case_id);
        Ok(WrittenReports {
            results_json,
            results_text,
            quick_reference,
        })
    }

    /// `{case_id}_{stamp}.json` and `.txt`
    pub fn write_results(
        &self,
        report: &CaseReport,
        stamp: &str,
    ) -> Result<(PathBuf, PathBuf), ReportError> {
        let base = format!("{}_{}", report.case_id, stamp);
        let json_path = self.dirs.results.join(format!("{}.json", base));
        let text_path = self.dirs.results.join(format!("{}.txt", base));

        write_file(&json_path, &serde_json::to_string_pretty(report)?)?;
        write_file(&text_path, &render_results_text(report, stamp))?;
        Ok((json_path, text_path))
    }

    pub fn write_quick_reference(
        &self,
        case_id: &str,
        stamp: &str,
        result: &ConsensusResult,
        chief_complaint: Option<&str>,
    ) -> Result<PathBuf, ReportError> {
        let path = self
            .dirs
            .quick_ref
            .join(format!("{}_quick_ref_{}.md", case_id, stamp));
        write_file(
            &path,
            &render_quick_reference(case_id, stamp, result, chief_complaint),
        )?;
        Ok(path)
    }

    pub fn write_differential(
        &self,
        case_id: &str,
        at: DateTime<Local>,
        body: &str,
    ) -> Result<PathBuf, ReportError> {
        let stamp = file_stamp(at);
        let path = self
            .dirs
            .differential
            .join(format!("{}_differential_diagnoses_{}.txt", case_id, stamp));
        write_file(&path, &render_differential(case_id, &stamp, body))?;
        Ok(path)
    }
}

fn write_file(path: &Path, content: &str) -> Result<(), ReportError> {
    let io_err = |source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, content).map_err(io_err)
}
