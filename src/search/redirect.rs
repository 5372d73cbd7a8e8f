//! Redirect-wrapper unwrapping
//!
//! DuckDuckGo routes outbound clicks through
//! `//duckduckgo.com/l/?uddg=<encoded target>&rut=...`. The real destination
//! is the form-decoded `uddg` parameter.

/// Prefix identifying an outbound redirect wrapper
pub const REDIRECT_PREFIX: &str = "//duckduckgo.com/l/?uddg=";

/// Resolves a result href to its final destination
///
/// Hrefs that are not redirect wrappers are returned unchanged. For a
/// wrapper, the query segment between the first `?` and any following `?` is
/// parsed and the decoded `uddg` value returned. A wrapper whose `uddg`
/// value is empty yields `None`; callers drop such entries rather than
/// keeping the wrapper URL.
///
/// # Example
///
/// ```
/// use duckscribe::search::unwrap_redirect;
///
/// let href = "//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com%2Fa&rut=abc";
/// assert_eq!(unwrap_redirect(href), Some("https://example.com/a".to_string()));
/// assert_eq!(unwrap_redirect("https://plain.example"), Some("https://plain.example".to_string()));
/// ```
pub fn unwrap_redirect(href: &str) -> Option<String> {
    if !href.starts_with(REDIRECT_PREFIX) {
        return Some(href.to_string());
    }

    let query = href.split('?').nth(1).unwrap_or_default();

    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "uddg")
        .map(|(_, value)| value.into_owned())
        .filter(|target| !target.is_empty())
}
