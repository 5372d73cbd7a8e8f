//! Output module for rendering responses
//!
//! This module handles formatting extracted search results as plain text
//! suitable for pasting into an LLM prompt.

mod plain_text;

pub use plain_text::{format_results_for_llm, NO_RESULTS_MESSAGE};
