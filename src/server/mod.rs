//! HTTP server
//!
//! [`WebServer`] composes the Axum router and runs the listener. Routes:
//!
//! | Path | Handler |
//! |------|---------|
//! | `GET /search?q=&max_results=` | [`handlers::search`] |
//! | `GET /fetch-content?url=` | [`handlers::fetch_content`] |
//! | anything else | 404 with a usage hint |

mod error;
pub mod handlers;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::upstream::Upstream;
use crate::ScribeError;

/// State shared by every request handler
///
/// Read-only after startup; requests never mutate it.
#[derive(Debug)]
pub struct AppState {
    pub upstream: Upstream,
    pub config: Config,
}

impl AppState {
    /// Builds handler state, including the outbound HTTP client
    pub fn new(config: Config) -> Result<Self, ScribeError> {
        let upstream = Upstream::new(&config.upstream)?;
        Ok(Self { upstream, config })
    }
}

/// Builds the Axum router with all routes registered
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/search", get(handlers::search))
        .route("/fetch-content", get(handlers::fetch_content))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// The Duckscribe web server
pub struct WebServer {
    state: Arc<AppState>,
}

impl WebServer {
    /// Creates a new web server from configuration
    pub fn new(config: Config) -> Result<Self, ScribeError> {
        Ok(Self {
            state: Arc::new(AppState::new(config)?),
        })
    }

    /// Returns the `host:port` string this server will bind to
    pub fn addr(&self) -> String {
        let server = &self.state.config.server;
        format!("{}:{}", server.bind_address, server.port)
    }

    /// Binds the configured address and serves until Ctrl-C
    ///
    /// # Errors
    ///
    /// Returns an error if the TCP listener cannot be bound.
    pub async fn start(self) -> Result<(), ScribeError> {
        let listener = TcpListener::bind(self.addr()).await?;
        self.serve(listener).await
    }

    /// Serves on an already bound listener until Ctrl-C
    pub async fn serve(self, listener: TcpListener) -> Result<(), ScribeError> {
        tracing::info!("Listening on {}", listener.local_addr()?);

        axum::serve(listener, router(self.state))
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
