//! Configuration module for Duckscribe
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every key has a default, so the service also runs without a file.
//!
//! # Example
//!
//! ```no_run
//! use duckscribe::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("duckscribe.toml")).unwrap();
//! println!("Listening on port: {}", config.server.port);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, SearchConfig, ServerConfig, UpstreamConfig, DEFAULT_USER_AGENT};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use validation::validate;
