//! Duckscribe: search results and web pages as plain text for LLMs
//!
//! This crate queries the DuckDuckGo HTML endpoint and fetches arbitrary web
//! pages, turning the returned markup into bounded plain text that can be
//! handed directly to a language model.

pub mod config;
pub mod content;
pub mod markup;
pub mod output;
pub mod search;
pub mod server;
pub mod service;
pub mod upstream;

use thiserror::Error;

/// Main error type for Duckscribe operations
#[derive(Debug, Error)]
pub enum ScribeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Missing \"{name}\" {description}")]
    MissingParameter {
        name: &'static str,
        description: &'static str,
    },

    #[error("HTTP error! status: {status}")]
    UpstreamStatus { url: String, status: u16 },

    #[error("{source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScribeError {
    /// Returns true if the error was caused by the caller rather than upstream
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::MissingParameter { .. })
    }
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Duckscribe operations
pub type Result<T> = std::result::Result<T, ScribeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use content::extract_page_text;
pub use output::format_results_for_llm;
pub use search::{extract_results, ResultRecord, ResultSet};
