use crate::config::types::{Config, SearchConfig, ServerConfig, UpstreamConfig};
use crate::ConfigError;
use std::net::IpAddr;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_server_config(&config.server)?;
    validate_upstream_config(&config.upstream)?;
    validate_search_config(&config.search)?;
    Ok(())
}

/// Validates listener configuration
fn validate_server_config(config: &ServerConfig) -> Result<(), ConfigError> {
    config.bind_address.parse::<IpAddr>().map_err(|_| {
        ConfigError::Validation(format!(
            "bind_address must be an IP address, got '{}'",
            config.bind_address
        ))
    })?;

    Ok(())
}

/// Validates outbound request configuration
fn validate_upstream_config(config: &UpstreamConfig) -> Result<(), ConfigError> {
    let endpoint = Url::parse(&config.search_endpoint)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid search_endpoint: {}", e)))?;

    if endpoint.scheme() != "http" && endpoint.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "search_endpoint must use http or https, got '{}'",
            endpoint.scheme()
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout_secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    if config.connect_timeout_secs < 1 || config.connect_timeout_secs > config.timeout_secs {
        return Err(ConfigError::Validation(format!(
            "connect_timeout_secs must be between 1 and timeout_secs ({}), got {}",
            config.timeout_secs, config.connect_timeout_secs
        )));
    }

    Ok(())
}

/// Validates search configuration
fn validate_search_config(config: &SearchConfig) -> Result<(), ConfigError> {
    if config.default_max_results < 1 {
        return Err(ConfigError::Validation(format!(
            "default_max_results must be >= 1, got {}",
            config.default_max_results
        )));
    }

    Ok(())
}
