//! Page content extraction
//!
//! Reduces an arbitrary third-party page to its visible text: noise subtrees
//! are removed, whitespace runs collapsed, and the result capped in length.

mod extractor;
mod normalize;

pub use extractor::{extract_page_text, NOISE_SELECTORS};
pub use normalize::{normalize_whitespace, truncate_text, MAX_CONTENT_CHARS, TRUNCATION_MARKER};
