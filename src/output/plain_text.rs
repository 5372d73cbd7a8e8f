//! Plain-text rendering of search results
//!
//! The layout is consumed verbatim by existing prompt templates, so spacing
//! is part of the contract.

use crate::search::ResultSet;

/// Rendered when a search produced no usable results
pub const NO_RESULTS_MESSAGE: &str = "No results were found.";

/// Formats search results as plain text
///
/// # Layout
///
/// ```text
/// Found {N} search results:
///
/// {position}. {title}
///    URL: {link}
///    Summary: {snippet}
///
/// {position}. {title}
/// ...
/// ```
///
/// Every record block ends with an empty line, and lines are joined with
/// `\n`, so the output ends with exactly one newline.
///
/// # Arguments
///
/// * `results` - The extracted results, already numbered
///
/// # Returns
///
/// The formatted text, or [`NO_RESULTS_MESSAGE`] for an empty set
pub fn format_results_for_llm(results: &ResultSet) -> String {
    if results.is_empty() {
        return NO_RESULTS_MESSAGE.to_string();
    }

    let mut lines = vec![format!("Found {} search results:\n", results.len())];
    for result in results {
        lines.push(format!("{}. {}", result.position, result.title));
        lines.push(format!("   URL: {}", result.link));
        lines.push(format!("   Summary: {}", result.snippet));
        lines.push(String::new());
    }

    lines.join("\n")
}
