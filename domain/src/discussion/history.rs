//! Discussion history (Entity)

use serde::{Deserialize, Serialize};

use crate::core::string::truncate;
use crate::triage::Role;

/// Longest first sentence kept in a discussion summary line
const SUMMARY_SENTENCE_CHARS: usize = 100;

/// One contribution to the discussion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscussionEntry {
    pub role: Role,
    pub content: String,
}

impl DiscussionEntry {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Text up to the first `.`, with the `.` restored
    pub fn first_sentence(&self) -> String {
        let head = self.content.split('.').next().unwrap_or_default();
        truncate(&format!("{}.", head), SUMMARY_SENTENCE_CHARS)
    }
}

/// Append-only record of a deliberation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiscussionHistory {
    entries: Vec<DiscussionEntry>,
}

impl DiscussionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, role: Role, content: impl Into<String>) {
        self.entries.push(DiscussionEntry::new(role, content));
    }

    pub fn entries(&self) -> &[DiscussionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `"{role}: {first sentence}"`, one line per entry
    pub fn summary(&self) -> String {
        self.entries
            .iter()
            .map(|entry| format!("{}: {}", entry.role, entry.first_sentence()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// `"{role}: {content}"`, one line per entry, for the consensus prompt
    pub fn transcript_lines(&self) -> String {
        self.entries
            .iter()
            .map(|entry| format!("{}: {}", entry.role, entry.content))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_uses_first_sentence() {
        let mut history = DiscussionHistory::new();
        history.push(Role::TriageNurse, "I agree with ESI 2. The ECG is key.");
        history.push(Role::EmergencyPhysician, "No period here");
        assert_eq!(
            history.summary(),
            "Triage Nurse: I agree with ESI 2.\nEmergency Physician: No period here."
        );
    }

    #[test]
    fn test_long_sentence_is_cut_to_100() {
        let mut history = DiscussionHistory::new();
        history.push(Role::MedicalConsultant, "a".repeat(150));
        let line = history.summary();
        let sentence = line.strip_prefix("Medical Consultant: ").unwrap();
        assert_eq!(sentence.chars().count(), 100);
        assert!(sentence.ends_with("..."));
        assert_eq!(&sentence[..97], "a".repeat(97));
    }

    #[test]
    fn test_entries_keep_append_order() {
        let mut history = DiscussionHistory::new();
        for role in Role::ALL {
            history.push(role, "x");
        }
        let roles: Vec<Role> = history.entries().iter().map(|e| e.role).collect();
        assert_eq!(roles, Role::ALL.to_vec());
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_transcript_lines() {
        let mut history = DiscussionHistory::new();
        history.push(Role::TriageNurse, "Initial assessment: ESI Level: 2.");
        assert_eq!(
            history.transcript_lines(),
            "Triage Nurse: Initial assessment: ESI Level: 2."
        );
    }
}
