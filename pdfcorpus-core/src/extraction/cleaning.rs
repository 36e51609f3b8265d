//! Text normalization applied to every extraction result.
//!
//! Steps, in order:
//! 1. collapse every whitespace run, newlines included, to a single space.
//!    Separator controls (U+001C to U+001F, U+0085 NEL) count as whitespace
//!    here, so words they separate stay apart.
//! 2. delete the remaining C0/C1 control characters
//! 3. collapse again, since a deleted control may sit between two spaces
//! 4. trim both ends

use regex::Regex;
use std::sync::LazyLock;

static CONTROL_CHARS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x{00}-\x{08}\x{0B}\x{0C}\x{0E}-\x{1F}\x{7F}-\x{9F}]").unwrap()
});

static WHITESPACE_RUN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\x{1C}-\x{1F}\x{85}]+").unwrap());

/// Normalize raw extracted text into a single line of single-spaced words.
pub fn basic_cleaning(text: &str) -> String {
    let collapsed = WHITESPACE_RUN_REGEX.replace_all(text, " ");
    let without_controls = CONTROL_CHARS_REGEX.replace_all(&collapsed, "");
    let collapsed = WHITESPACE_RUN_REGEX.replace_all(&without_controls, " ");
    collapsed.trim().to_string()
}
