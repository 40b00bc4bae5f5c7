//! Truncation rules for collapsed plain-text payloads.
//!
//! A display string is truncatable once it exceeds 4 newline-delimited
//! segments or 500 characters. The character limit wins when both apply.

/// Maximum characters shown while collapsed.
pub const MAX_DISPLAY_CHARS: usize = 500;

/// Maximum newline-delimited segments shown while collapsed.
pub const MAX_DISPLAY_LINES: usize = 4;

/// Continuation marker appended to a truncated display string.
pub const TRUNCATION_MARKER: &str = "...";

/// Whether the collapsed form of `text` differs from the full form.
pub fn should_truncate(text: &str) -> bool {
    text.split('\n').count() > MAX_DISPLAY_LINES || text.chars().count() > MAX_DISPLAY_CHARS
}

/// The string actually shown for a plain-text payload, given the expand
/// flag. Pure in `(text, expanded)`.
pub fn display_slice(text: &str, expanded: bool) -> String {
    if expanded || !should_truncate(text) {
        return text.to_string();
    }

    if text.chars().count() > MAX_DISPLAY_CHARS {
        let prefix: String = text.chars().take(MAX_DISPLAY_CHARS).collect();
        format!("{prefix}{TRUNCATION_MARKER}")
    } else {
        let prefix: Vec<&str> = text.split('\n').take(MAX_DISPLAY_LINES).collect();
        format!("{}\n{TRUNCATION_MARKER}", prefix.join("\n"))
    }
}
