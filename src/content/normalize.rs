use regex::Regex;
use std::sync::LazyLock;

/// Maximum number of characters kept from a page
pub const MAX_CONTENT_CHARS: usize = 8000;

/// Appended to text cut at [`MAX_CONTENT_CHARS`]
pub const TRUNCATION_MARKER: &str = "... [content truncated]";

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("whitespace pattern is valid"));

/// Collapses every run of two or more whitespace characters into one space
/// and trims the ends
///
/// A single whitespace character between words (including a lone newline
/// or tab) is left untouched. Applying this twice gives the same result as
/// applying it once.
///
/// # Example
///
/// ```
/// use duckscribe::content::normalize_whitespace;
///
/// assert_eq!(normalize_whitespace("  Hello \n\t world  "), "Hello world");
/// ```
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

/// Caps `text` at [`MAX_CONTENT_CHARS`] characters
///
/// Longer text keeps exactly the first [`MAX_CONTENT_CHARS`] characters and
/// gets [`TRUNCATION_MARKER`] appended; shorter text is returned unchanged.
pub fn truncate_text(text: String) -> String {
    match text.char_indices().nth(MAX_CONTENT_CHARS) {
        Some((cut, _)) => {
            let mut truncated = text[..cut].to_string();
            truncated.push_str(TRUNCATION_MARKER);
            truncated
        }
        None => text,
    }
}
