//! Integration tests for the HTTP service
//!
//! These tests use wiremock as the search engine and as arbitrary web pages,
//! start the real Axum router on an ephemeral port, and drive it with
//! reqwest end-to-end.

mod search_tests;

use std::net::SocketAddr;
use std::sync::Arc;

use duckscribe::config::{Config, UpstreamConfig};
use duckscribe::server::{router, AppState};
use tokio::net::TcpListener;

/// Creates a test configuration pointing the search endpoint at `search_endpoint`
pub fn create_test_config(search_endpoint: &str) -> Config {
    Config {
        upstream: UpstreamConfig {
            search_endpoint: search_endpoint.to_string(),
            user_agent: "TestBrowser/1.0".to_string(),
            timeout_secs: 5,
            connect_timeout_secs: 2,
        },
        ..Config::default()
    }
}

/// Binds 127.0.0.1:0, serves the router, returns the base URL
pub async fn start_test_server(config: Config) -> String {
    let state = Arc::new(AppState::new(config).expect("Failed to build app state"));

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr: SocketAddr = listener.local_addr().expect("Failed to read local addr");

    tokio::spawn(async move {
        axum::serve(listener, router(state)).await.ok();
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_unknown_path_returns_usage_hint() {
    let base = start_test_server(Config::default()).await;

    let response = reqwest::get(format!("{}/nope", base)).await.unwrap();

    assert_eq!(response.status(), 404);
    assert_eq!(
        response.text().await.unwrap(),
        "Not Found. Use /search?q=... or /fetch-content?url=..."
    );
}
