use crate::content::normalize::{normalize_whitespace, truncate_text};
use crate::markup::Document;

/// Elements whose text never counts as page content
pub const NOISE_SELECTORS: &[&str] = &["script", "style", "nav", "header", "footer"];

/// Extracts the visible text of a page's body
///
/// 1. Removes every [`NOISE_SELECTORS`] subtree
/// 2. Takes the text of `<body>`
/// 3. Collapses whitespace runs and trims
/// 4. Caps the length, appending a truncation marker when cut
///
/// Never fails; markup without a body or without text yields an empty string.
///
/// # Example
///
/// ```
/// use duckscribe::content::extract_page_text;
///
/// let text = extract_page_text("<body><script>x</script><p>Hello   world</p></body>");
/// assert_eq!(text, "Hello world");
/// ```
pub fn extract_page_text(html: &str) -> String {
    let mut document = Document::parse(html);

    let removed: usize = NOISE_SELECTORS
        .iter()
        .map(|selector| document.remove_all(selector))
        .sum();

    let raw = document.body_text();
    drop(document);

    let text = truncate_text(normalize_whitespace(&raw));
    tracing::debug!(
        "Extracted {} characters of page text ({} noise elements removed)",
        text.chars().count(),
        removed
    );
    text
}
