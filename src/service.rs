//! Request pipelines
//!
//! Each function performs one outbound request, then runs the matching
//! extractor on the returned markup. Parsing happens after the final
//! `.await`, so no document is ever held across a suspension point.

use crate::content::extract_page_text;
use crate::output::format_results_for_llm;
use crate::search::extract_results;
use crate::upstream::Upstream;
use crate::ScribeError;

/// Runs a search and renders the results as plain text
///
/// # Arguments
///
/// * `upstream` - Client for the search endpoint
/// * `query` - The search terms
/// * `max_results` - Maximum number of results to render
///
/// # Returns
///
/// * `Ok(String)` - Formatted results, or the "no results" message
/// * `Err(ScribeError)` - The search endpoint failed
pub async fn search_text(
    upstream: &Upstream,
    query: &str,
    max_results: usize,
) -> Result<String, ScribeError> {
    let html = upstream.search_html(query).await?;

    let results = extract_results(&html, max_results);
    tracing::info!(
        "Search '{}' returned {} results (max {})",
        query,
        results.len(),
        max_results
    );

    Ok(format_results_for_llm(&results))
}

/// Fetches a page and returns its visible text
///
/// # Returns
///
/// * `Ok(String)` - Normalized, length-capped page text (possibly empty)
/// * `Err(ScribeError)` - The page could not be fetched
pub async fn page_text(upstream: &Upstream, url: &str) -> Result<String, ScribeError> {
    let html = upstream.page_html(url).await?;

    let text = extract_page_text(&html);
    tracing::info!("Fetched {} ({} characters)", url, text.chars().count());

    Ok(text)
}
