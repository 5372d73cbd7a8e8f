use crate::config::UpstreamConfig;
use crate::ScribeError;
use reqwest::{redirect::Policy, Client, Response};
use std::time::Duration;

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The outbound request configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &UpstreamConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .redirect(Policy::limited(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Client for the search endpoint and arbitrary pages
///
/// Cheap to share: the inner `reqwest::Client` pools connections and is
/// safe to use from concurrent requests.
#[derive(Debug, Clone)]
pub struct Upstream {
    client: Client,
    search_endpoint: String,
}

impl Upstream {
    /// Creates an upstream client from configuration
    pub fn new(config: &UpstreamConfig) -> Result<Self, ScribeError> {
        Ok(Self {
            client: build_http_client(config)?,
            search_endpoint: config.search_endpoint.clone(),
        })
    }

    /// Posts `query` to the search endpoint and returns the results markup
    ///
    /// The body is form-encoded as `q=<query>`; reqwest sets
    /// `Content-Type: application/x-www-form-urlencoded`.
    ///
    /// # Errors
    ///
    /// * `ScribeError::Transport` - The endpoint could not be reached
    /// * `ScribeError::UpstreamStatus` - The endpoint answered with a non-2xx status
    pub async fn search_html(&self, query: &str) -> Result<String, ScribeError> {
        tracing::debug!("Searching {} for '{}'", self.search_endpoint, query);

        let response = self
            .client
            .post(&self.search_endpoint)
            .form(&[("q", query)])
            .send()
            .await
            .map_err(|e| transport_error(&self.search_endpoint, e))?;

        read_body(&self.search_endpoint, response).await
    }

    /// Fetches `url` and returns its markup
    ///
    /// # Errors
    ///
    /// * `ScribeError::Transport` - The URL is invalid or the host could not be reached
    /// * `ScribeError::UpstreamStatus` - The server answered with a non-2xx status
    pub async fn page_html(&self, url: &str) -> Result<String, ScribeError> {
        tracing::debug!("Fetching page {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| transport_error(url, e))?;

        read_body(url, response).await
    }
}

/// Checks the status and reads the body of an upstream response
async fn read_body(url: &str, response: Response) -> Result<String, ScribeError> {
    let status = response.status();

    if !status.is_success() {
        tracing::warn!("Upstream {} answered {}", url, status);
        return Err(ScribeError::UpstreamStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|e| transport_error(url, e))
}

/// Classifies a reqwest failure for logging and wraps it
fn transport_error(url: &str, error: reqwest::Error) -> ScribeError {
    if error.is_timeout() {
        tracing::warn!("Request timeout for {}", url);
    } else if error.is_connect() {
        tracing::warn!("Connection failed for {}", url);
    } else if error.is_builder() {
        tracing::warn!("Could not build request for {}", url);
    }

    ScribeError::Transport {
        url: url.to_string(),
        source: error,
    }
}
