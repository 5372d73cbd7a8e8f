use crate::markup::{attribute, joined_text, select_within, Document};
use crate::search::record::ResultSet;
use crate::search::redirect::unwrap_redirect;
use scraper::ElementRef;

/// Selector for one result listing item
pub const RESULT_SELECTOR: &str = ".result";

/// Selector for the title anchor inside a result
pub const TITLE_LINK_SELECTOR: &str = ".result__title a";

/// Selector for the snippet inside a result
pub const SNIPPET_SELECTOR: &str = ".result__snippet";

/// Substring identifying ad-redirect links
pub const AD_MARKER: &str = "y.js";

/// Extracts up to `max_results` search hits from a results page
///
/// # Candidate Rules
///
/// **Skip (not counted toward the cap):**
/// - Title anchor missing, or its `href` absent or empty
/// - `href` containing the ad marker `y.js`
/// - Redirect wrappers that carry no destination
///
/// **Accept:** everything else, with redirect wrappers replaced by their
/// destination. The link comes from the first title anchor; title and
/// snippet join the text of every matching element and are trimmed (empty
/// when absent).
///
/// Candidates after the cap is reached are not inspected. Malformed or
/// unrelated markup yields an empty set.
///
/// # Example
///
/// ```
/// use duckscribe::search::extract_results;
///
/// let html = r#"<div class="result">
///   <h2 class="result__title"><a href="https://example.com">Example Site</a></h2>
///   <a class="result__snippet">An example.</a>
/// </div>"#;
/// let results = extract_results(html, 10);
/// assert_eq!(results.len(), 1);
/// assert_eq!(results.records()[0].link, "https://example.com");
/// ```
pub fn extract_results(html: &str, max_results: usize) -> ResultSet {
    let document = Document::parse(html);
    let mut results = ResultSet::new();

    for candidate in document.select(RESULT_SELECTOR) {
        if results.len() >= max_results {
            break;
        }

        let title_links = select_within(candidate, TITLE_LINK_SELECTOR);

        let Some(link) = title_links.first().copied().and_then(candidate_link) else {
            continue;
        };

        let title = joined_text(&title_links);
        let snippet = joined_text(&select_within(candidate, SNIPPET_SELECTOR));

        let record = results.accept(title, link, snippet);
        tracing::trace!("Accepted result {}: {}", record.position, record.link);
    }

    tracing::debug!("Extracted {} search results", results.len());
    results
}

/// Reads and resolves the destination of a title anchor
///
/// Returns None if the candidate must be skipped.
fn candidate_link(anchor: ElementRef<'_>) -> Option<String> {
    let href = attribute(anchor, "href")?;

    if href.is_empty() {
        return None;
    }

    if href.contains(AD_MARKER) {
        tracing::trace!("Skipping ad result: {}", href);
        return None;
    }

    let link = unwrap_redirect(href);
    if link.is_none() {
        tracing::debug!("Skipping redirect without destination: {}", href);
    }
    link
}
