//! String utilities for the domain layer.

/// Truncate a string to a maximum number of characters with ellipsis.
///
/// Strings of at most `max_chars` characters are returned unchanged;
/// longer ones keep `max_chars - 3` characters followed by `...`.
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Take the first `n` characters of a string (UTF-8 safe, no ellipsis).
pub fn prefix_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
