//! Route handlers
//!
//! Handlers only pull parameters out of the query string and delegate to
//! [`crate::service`]; every failure is returned as a [`ScribeError`] and
//! rendered by its `IntoResponse` impl.

use std::sync::Arc;

use axum::extract::{RawQuery, State};
use axum::http::StatusCode;

use crate::server::AppState;
use crate::service;
use crate::ScribeError;

/// Usage hint returned for unknown paths
pub const NOT_FOUND_MESSAGE: &str = "Not Found. Use /search?q=... or /fetch-content?url=...";

/// Decoded query-string pairs in request order
///
/// Repeated keys are kept; lookups return the first occurrence.
#[derive(Debug, Default)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Decodes a raw query string; `None` gives an empty set
    pub fn parse(raw: Option<&str>) -> Self {
        let pairs = raw
            .map(|raw| {
                url::form_urlencoded::parse(raw.as_bytes())
                    .into_owned()
                    .collect()
            })
            .unwrap_or_default();
        Self { pairs }
    }

    /// Returns the first value given for `key`
    pub fn first(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// `GET /search` - search and return formatted results
pub async fn search(
    State(state): State<Arc<AppState>>,
    RawQuery(raw): RawQuery,
) -> Result<String, ScribeError> {
    let params = QueryParams::parse(raw.as_deref());
    let query = required(params.first("q"), "q", "search parameter")?;
    let max_results = parse_max_results(
        params.first("max_results"),
        state.config.search.default_max_results,
    );

    service::search_text(&state.upstream, query, max_results).await
}

/// `GET /fetch-content` - fetch a page and return its visible text
pub async fn fetch_content(
    State(state): State<Arc<AppState>>,
    RawQuery(raw): RawQuery,
) -> Result<String, ScribeError> {
    let params = QueryParams::parse(raw.as_deref());
    let url = required(params.first("url"), "url", "parameter")?;

    service::page_text(&state.upstream, url).await
}

/// Fallback for every unknown path
pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE)
}

/// Rejects absent and empty parameters alike
fn required<'a>(
    value: Option<&'a str>,
    name: &'static str,
    description: &'static str,
) -> Result<&'a str, ScribeError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(ScribeError::MissingParameter { name, description })
}

/// Parses the `max_results` query parameter
///
/// Only the leading integer is read, after optional whitespace and sign, so
/// `"5abc"` means 5.
///
/// | Input | Result |
/// |-------|--------|
/// | absent, or no leading digits | `default` |
/// | negative integer | 0 |
/// | non-negative integer | that value (saturating) |
pub fn parse_max_results(raw: Option<&str>, default: usize) -> usize {
    let Some(raw) = raw else {
        return default;
    };

    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = unsigned
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits_len == 0 {
        tracing::debug!("Ignoring invalid max_results '{}'", raw);
        return default;
    }

    if negative {
        return 0;
    }

    unsigned[..digits_len].parse::<usize>().unwrap_or(usize::MAX)
}
