//! Markup parsing module
//!
//! This module wraps `scraper` into a forgiving document type used by both
//! extractors:
//! - CSS selector lookup, globally or scoped to an element
//! - Trimmed text and attribute extraction
//! - In-place removal of matching subtrees
//!
//! Nothing here fails on bad input. Malformed markup is repaired by the HTML5
//! parser and invalid selectors produce empty selections.

mod document;

pub use document::{attribute, inner_text, joined_text, select_within, Document};
