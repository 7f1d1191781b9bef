//! Progress notification port
//!
//! Defines the interface for reporting progress during a deliberation.

use triage_domain::Phase;

/// Callback for progress updates during a deliberation
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bar, plain lines, etc.)
pub trait ProgressNotifier: Send + Sync {
    /// A human-readable status line, with an overall percentage when known
    fn on_progress(&self, message: &str, percent: Option<u8>);

    /// Called when a phase starts
    fn on_phase_start(&self, _phase: &Phase, _total_tasks: usize) {}

    /// Called when a participant (a role, or the consensus query) finishes
    fn on_task_complete(&self, _phase: &Phase, _participant: &str, _success: bool) {}

    /// Called when a phase completes
    fn on_phase_complete(&self, _phase: &Phase) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_progress(&self, _message: &str, _percent: Option<u8>) {}
}

/// Adapter: closure → `ProgressNotifier`
///
/// Only status lines are forwarded; phase hooks are ignored.
pub struct FnProgress<F>(pub F);

impl<F> ProgressNotifier for FnProgress<F>
where
    F: Fn(&str, Option<u8>) + Send + Sync,
{
    fn on_progress(&self, message: &str, percent: Option<u8>) {
        (self.0)(message, percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_fn_progress_forwards_messages() {
        let seen = Mutex::new(Vec::new());
        let notifier = FnProgress(|msg: &str, pct: Option<u8>| {
            seen.lock().unwrap().push((msg.to_string(), pct));
        });
        notifier.on_progress("Triage Nurse is analyzing the conversation...", Some(15));
        notifier.on_phase_start(&Phase::Assessment, 3);
        assert_eq!(
            *seen.lock().unwrap(),
            vec![(
                "Triage Nurse is analyzing the conversation...".to_string(),
                Some(15)
            )]
        );
    }
}
