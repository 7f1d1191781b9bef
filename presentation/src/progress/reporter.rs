//! Progress reporting for deliberation

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use triage_application::ProgressNotifier;
use triage_domain::Phase;

/// Percent-driven progress bar with per-phase task lines
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    pub fn new() -> Self {
        let bar = ProgressBar::new(100);
        bar.set_style(Self::bar_style());
        bar.set_prefix("Triage");
        Self { bar }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos:>3}% {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn phase_number(phase: &Phase) -> u8 {
        match phase {
            Phase::Assessment => 1,
            Phase::Critique => 2,
            Phase::Consensus => 3,
        }
    }

    fn phase_display_name(phase: &Phase) -> String {
        format!("Phase {}: {}", Self::phase_number(phase), phase.display_name())
    }

    /// Complete the bar with a final message
    pub fn finish(&self, message: &str) {
        self.bar.set_position(100);
        self.bar.finish_with_message(message.to_string());
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_progress(&self, message: &str, percent: Option<u8>) {
        if let Some(percent) = percent {
            self.bar.set_position(u64::from(percent.min(100)));
        }
        self.bar.set_message(message.to_string());
    }

    fn on_phase_start(&self, phase: &Phase, total_tasks: usize) {
        self.bar.println(format!(
            "{} {} ({} tasks)",
            "->".cyan(),
            Self::phase_display_name(phase).bold(),
            total_tasks
        ));
        self.bar
            .set_prefix(format!("Phase {}", Self::phase_number(phase)));
    }

    fn on_task_complete(&self, _phase: &Phase, participant: &str, success: bool) {
        let status = if success {
            format!("  {} {}", "v".green(), participant)
        } else {
            format!("  {} {} (failed)", "x".red(), participant)
        };
        self.bar.println(status);
    }

    fn on_phase_complete(&self, phase: &Phase) {
        self.bar
            .println(format!("  {} complete", phase.display_name().green()));
    }
}

/// Plain line-per-event progress on stderr, for non-interactive runs
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_progress(&self, message: &str, percent: Option<u8>) {
        match percent {
            Some(percent) => eprintln!("[{:>3}%] {}", percent, message),
            None => eprintln!("      {}", message),
        }
    }

    fn on_phase_start(&self, phase: &Phase, total_tasks: usize) {
        eprintln!(
            "{} {} ({} tasks)",
            "->".cyan(),
            ProgressReporter::phase_display_name(phase).bold(),
            total_tasks
        );
    }

    fn on_task_complete(&self, _phase: &Phase, participant: &str, success: bool) {
        if success {
            eprintln!("  {} {}", "v".green(), participant);
        } else {
            eprintln!("  {} {} (failed)", "x".red(), participant);
        }
    }

    fn on_phase_complete(&self, _phase: &Phase) {
        eprintln!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_display_names() {
        assert_eq!(
            ProgressReporter::phase_display_name(&Phase::Assessment),
            "Phase 1: Initial Assessment"
        );
        assert_eq!(
            ProgressReporter::phase_display_name(&Phase::Consensus),
            "Phase 3: Consensus"
        );
    }

    #[test]
    fn test_progress_position_tracks_percent() {
        let reporter = ProgressReporter::new();
        reporter.on_progress("Triage Nurse is analyzing the conversation...", Some(15));
        assert_eq!(reporter.bar.position(), 15);

        reporter.on_progress("no percent", None);
        assert_eq!(reporter.bar.position(), 15);

        reporter.finish("done");
        assert_eq!(reporter.bar.position(), 100);
        assert!(reporter.bar.is_finished());
    }
}
