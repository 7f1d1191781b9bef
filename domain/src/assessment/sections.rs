//! Tolerant grammar for numbered, labeled answers.
//!
//! Model output is prose, not data. These helpers find `N. Label:` sections
//! and bullet lists with progressively looser strategies; each strategy is
//! a separate function so it can be tested on its own. None of them fail:
//! no match means `None` or an empty list.

use regex::Regex;
use std::collections::HashMap;
use std::sync::{LazyLock, Mutex};

use super::schema::SectionSpec;

/// Leading markdown noise allowed before an ordinal marker
const MARKUP: &str = r"[ \t#>*_]*";

static LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:-|[0-9]+\.(?:\s|$))\s*(.*)$").unwrap());

static FIRST_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());

/// Header and ordinal patterns, compiled once per distinct pattern
static PATTERN_CACHE: LazyLock<Mutex<HashMap<String, Regex>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

fn cached_regex(pattern: String) -> Option<Regex> {
    let Ok(mut cache) = PATTERN_CACHE.lock() else {
        return Regex::new(&pattern).ok();
    };
    if let Some(re) = cache.get(&pattern) {
        return Some(re.clone());
    }
    let re = Regex::new(&pattern).ok()?;
    cache.insert(pattern, re.clone());
    Some(re)
}

/// Byte span of a located section header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderMatch {
    /// Where the header starts
    pub start: usize,
    /// Where the section content starts
    pub content_start: usize,
}

fn header_regex(ordinal: u8, label: &str, line_anchored: bool) -> Option<Regex> {
    let anchor = if line_anchored {
        format!("(?m)^{MARKUP}")
    } else {
        r"(?:^|\s)[*_]*".to_string()
    };
    // `[^:\n]*` swallows trailing qualifiers such as "(as you understand it)"
    cached_regex(format!(
        r"(?i){anchor}{ordinal}\.\s*[*_]*\s*{label}[^:\n]*:[*_]*"
    ))
}

/// Locate `N. Label:` with the marker at the start of a line.
pub fn find_header_at_line_start(text: &str, ordinal: u8, label: &str) -> Option<HeaderMatch> {
    header_regex(ordinal, label, true)?
        .find(text)
        .map(|m| HeaderMatch { start: m.start(), content_start: m.end() })
}

/// Locate `N. Label:` anywhere after whitespace (single-line answers).
pub fn find_header_inline(text: &str, ordinal: u8, label: &str) -> Option<HeaderMatch> {
    header_regex(ordinal, label, false)?
        .find(text)
        .map(|m| HeaderMatch { start: m.start(), content_start: m.end() })
}

/// Locate a section header, preferring line-anchored matches.
pub fn find_header(text: &str, spec: &SectionSpec) -> Option<HeaderMatch> {
    find_header_at_line_start(text, spec.ordinal, spec.label)
        .or_else(|| find_header_inline(text, spec.ordinal, spec.label))
}

/// Offset of a bare `N.` marker at the start of a line.
pub fn find_ordinal_at_line_start(text: &str, ordinal: u8) -> Option<usize> {
    cached_regex(format!(r"(?m)^{MARKUP}{ordinal}\."))?
        .find(text)
        .map(|m| m.start())
}

/// Offset of a bare `N.` marker preceded by whitespace and followed by
/// whitespace or the end of text. Decimals such as `37.2.` do not match.
pub fn find_ordinal_inline(text: &str, ordinal: u8) -> Option<usize> {
    cached_regex(format!(r"(?:^|\s)[*_]*{ordinal}\.(?:\s|$)"))?
        .find(text)
        .map(|m| m.start())
}

/// Extract the content of one section.
///
/// The section runs from its header to whichever comes first of: the next
/// section's own header, the next bare ordinal marker, or the end of text.
/// Missing sections yield `None`.
pub fn section_content<'a>(
    text: &'a str,
    spec: &SectionSpec,
    next: Option<&SectionSpec>,
) -> Option<&'a str> {
    let header = find_header(text, spec)?;
    let rest = &text[header.content_start..];

    let end = next
        .and_then(|n| {
            find_header(rest, n)
                .map(|h| h.start)
                .or_else(|| find_ordinal_at_line_start(rest, n.ordinal))
                .or_else(|| find_ordinal_inline(rest, n.ordinal))
        })
        .unwrap_or(rest.len());

    Some(rest[..end].trim())
}

/// Split a section into list items on `-` or `N.` markers at line starts.
///
/// Continuation lines join the current item; a blank line ends it. Text
/// before the first marker and empty items are discarded.
pub fn split_list_items(section: &str) -> Vec<String> {
    let mut items = Vec::new();
    let mut current: Option<String> = None;

    for line in section.lines() {
        if let Some(caps) = LIST_MARKER.captures(line) {
            if let Some(done) = current.take() {
                items.push(done);
            }
            current = Some(caps[1].trim().to_string());
        } else if line.trim().is_empty() {
            if let Some(done) = current.take() {
                items.push(done);
            }
        } else if let Some(item) = current.as_mut() {
            if !item.is_empty() {
                item.push(' ');
            }
            item.push_str(line.trim());
        }
    }
    if let Some(done) = current {
        items.push(done);
    }

    items.retain(|item| !item.is_empty());
    items
}

/// First run of digits in a text, if any.
pub fn first_number(text: &str) -> Option<&str> {
    FIRST_NUMBER.find(text).map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::schema::AssessmentSchema;

    fn spec(key: &str) -> &'static SectionSpec {
        AssessmentSchema::PHYSICIAN
            .sections
            .iter()
            .chain(AssessmentSchema::NURSE.sections)
            .find(|s| s.key == key)
            .unwrap()
    }

    #[test]
    fn test_header_at_line_start_tolerates_markdown() {
        let text = "Intro\n**1. Clinical Assessment:** Unstable patient";
        let header = find_header_at_line_start(text, 1, r"Clinical\s+Assessment").unwrap();
        assert_eq!(text[header.content_start..].trim(), "Unstable patient");
    }

    #[test]
    fn test_header_inline() {
        let text = "Summary: 1. Clinical Assessment: stable 2. Potential Diagnoses: none";
        assert!(find_header_at_line_start(text, 1, r"Clinical\s+Assessment").is_none());
        let header = find_header_inline(text, 1, r"Clinical\s+Assessment").unwrap();
        assert!(text[header.content_start..].starts_with(" stable"));
    }

    #[test]
    fn test_header_with_parenthetical_qualifier() {
        let text = "2. Chief Complaint (as you understand it): chest pain";
        let content = section_content(text, spec("chief_complaint"), None).unwrap();
        assert_eq!(content, "chest pain");
    }

    #[test]
    fn test_header_case_insensitive() {
        let text = "1. CLINICAL   ASSESSMENT: febrile";
        let content = section_content(text, spec("clinical_assessment"), None).unwrap();
        assert_eq!(content, "febrile");
    }

    #[test]
    fn test_section_stops_at_next_header_not_list_item() {
        let text = "2. Potential Diagnoses:\n1. ACS\n2. PE\n3. Aortic dissection\n3. ESI Level Recommendation: 1";
        let content =
            section_content(text, spec("potential_diagnoses"), Some(spec("esi_level"))).unwrap();
        assert!(content.contains("3. Aortic dissection"));
        assert_eq!(split_list_items(content).len(), 3);
    }

    #[test]
    fn test_section_falls_back_to_bare_ordinal() {
        let text = "1. Clinical Assessment: sick\n2. Something unexpected: x";
        let content =
            section_content(text, spec("clinical_assessment"), Some(spec("potential_diagnoses")))
                .unwrap();
        assert_eq!(content, "sick");
    }

    #[test]
    fn test_inline_ordinal_ignores_decimals() {
        assert_eq!(find_ordinal_inline("temp 37.2. stable", 2), None);
        assert_eq!(find_ordinal_inline("stable 2. next", 2), Some(6));
    }

    #[test]
    fn test_missing_section() {
        assert!(section_content("no markers here", spec("clinical_assessment"), None).is_none());
    }

    #[test]
    fn test_split_list_items() {
        let items = split_list_items("Intro text\n- ECG\n- Troponin\n  serial at 3h\n\n3. Aspirin 325 mg\n-   \n");
        assert_eq!(items, vec!["ECG", "Troponin serial at 3h", "Aspirin 325 mg"]);
    }

    #[test]
    fn test_split_list_without_markers() {
        assert!(split_list_items("Just prose with no bullets.").is_empty());
    }

    #[test]
    fn test_blank_line_ends_item() {
        let items = split_list_items("- a\n- b\n\nClosing remarks that are not an action.");
        assert_eq!(items, vec!["a", "b"]);
    }

    #[test]
    fn test_header_patterns_compiled_once() {
        let text = "1. Clinical Assessment: stable\n2. Potential Diagnoses:\n- ACS";
        let first = section_content(text, spec("clinical_assessment"), Some(spec("potential_diagnoses")));
        assert_eq!(first, Some("stable"));

        let header = header_regex(1, spec("clinical_assessment").label, true).unwrap();
        assert!(PATTERN_CACHE.lock().unwrap().contains_key(header.as_str()));

        let again = section_content(text, spec("clinical_assessment"), Some(spec("potential_diagnoses")));
        assert_eq!(again, first);
    }

    #[test]
    fn test_first_number() {
        assert_eq!(first_number("ESI Level 2 (emergent)"), Some("2"));
        assert_eq!(first_number("Level: 12"), Some("12"));
        assert_eq!(first_number("none"), None);
    }
}
