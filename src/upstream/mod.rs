//! Outbound HTTP module
//!
//! This module owns every request the service makes:
//! - Building the HTTP client with the configured user agent and timeouts
//! - POSTing the form-encoded query to the search endpoint
//! - GETting arbitrary pages for content extraction
//! - Classifying failures into status and transport errors

mod fetcher;

pub use fetcher::{build_http_client, Upstream};
