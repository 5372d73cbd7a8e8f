//! Duckscribe main entry point
//!
//! This is the command-line interface for the Duckscribe search and page-text
//! service.

use anyhow::Context;
use clap::Parser;
use duckscribe::config::{load_config_with_hash, validate, Config};
use duckscribe::server::WebServer;
use duckscribe::service;
use duckscribe::upstream::Upstream;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Duckscribe: web search and page text for LLMs
///
/// Serves `/search` and `/fetch-content` over HTTP, or runs a single search
/// or page fetch and prints the plain-text result.
#[derive(Parser, Debug)]
#[command(name = "duckscribe")]
#[command(version = "1.0.0")]
#[command(about = "Web search and page text for LLMs", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (defaults are used when omitted)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Override the configured bind address
    #[arg(long, value_name = "ADDR")]
    bind: Option<String>,

    /// Override the configured port
    #[arg(long)]
    port: Option<u16>,

    /// Run one search, print the results and exit
    #[arg(long, value_name = "QUERY", conflicts_with_all = ["fetch", "dry_run"])]
    search: Option<String>,

    /// Maximum number of results for --search
    #[arg(long, value_name = "N", requires = "search")]
    max_results: Option<usize>,

    /// Fetch one page, print its text and exit
    #[arg(long, value_name = "URL", conflicts_with_all = ["search", "dry_run"])]
    fetch: Option<String>,

    /// Validate the configuration, print it and exit
    #[arg(long, conflicts_with_all = ["search", "fetch"])]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = load(&cli)?;
    if let Some(bind) = &cli.bind {
        config.server.bind_address = bind.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    validate(&config).context("Invalid command-line override")?;

    if cli.dry_run {
        handle_dry_run(&config);
    } else if let Some(query) = &cli.search {
        let max_results = cli.max_results.unwrap_or(config.search.default_max_results);
        handle_search(&config, query, max_results).await?;
    } else if let Some(url) = &cli.fetch {
        handle_fetch(&config, url).await?;
    } else {
        handle_serve(config).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// `RUST_LOG` is not consulted; verbosity flags decide the filter.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("duckscribe=info,warn"),
            1 => EnvFilter::new("duckscribe=debug,tower_http=debug,info"),
            2 => EnvFilter::new("duckscribe=trace,tower_http=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    // Logs go to stderr so one-shot output on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the configuration file if one was given, otherwise the defaults
fn load(cli: &Cli) -> anyhow::Result<Config> {
    let Some(path) = &cli.config else {
        tracing::info!("No configuration file given, using defaults");
        return Ok(Config::default());
    };

    tracing::info!("Loading configuration from: {}", path.display());
    let (config, hash) = load_config_with_hash(path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", hash);

    Ok(config)
}

/// Handles the --dry-run mode: shows the effective configuration
fn handle_dry_run(config: &Config) {
    println!("=== Duckscribe Dry Run ===\n");

    println!("Server:");
    println!("  Bind address: {}", config.server.bind_address);
    println!("  Port: {}", config.server.port);

    println!("\nUpstream:");
    println!("  Search endpoint: {}", config.upstream.search_endpoint);
    println!("  User agent: {}", config.upstream.user_agent);
    println!("  Timeout: {}s", config.upstream.timeout_secs);
    println!("  Connect timeout: {}s", config.upstream.connect_timeout_secs);

    println!("\nSearch:");
    println!(
        "  Default max results: {}",
        config.search.default_max_results
    );

    println!("\n✓ Configuration is valid");
}

/// Handles the --search mode: prints formatted results
async fn handle_search(config: &Config, query: &str, max_results: usize) -> anyhow::Result<()> {
    let upstream = Upstream::new(&config.upstream)?;
    let output = service::search_text(&upstream, query, max_results).await?;
    println!("{}", output);
    Ok(())
}

/// Handles the --fetch mode: prints page text
async fn handle_fetch(config: &Config, url: &str) -> anyhow::Result<()> {
    let upstream = Upstream::new(&config.upstream)?;
    let text = service::page_text(&upstream, url).await?;
    println!("{}", text);
    Ok(())
}

/// Handles the default mode: runs the HTTP server
async fn handle_serve(config: Config) -> anyhow::Result<()> {
    let server = WebServer::new(config)?;
    tracing::info!("Starting server on {}", server.addr());

    server.start().await.context("Server failed")?;
    Ok(())
}
