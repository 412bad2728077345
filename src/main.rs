//! hello-service: a probe-aware greeting service.
//!
//! This is the application entry point. It parses command line arguments,
//! loads configuration from a TOML file, initializes tracing, sets up the
//! Axum router, and runs the HTTP server until a termination signal arrives.

mod config;
mod http;
mod middleware;
mod routes;

use std::path::Path;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::{AppConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use routes::create_router;

/// hello-service: an HTTP greeting service with orchestrator probe endpoints
#[derive(Parser, Debug)]
#[command(name = "hello-service", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "hello_service=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration. The container image normally runs without a mounted
    // config file, so a missing file at the default path means built-in
    // defaults; an explicitly requested file must exist.
    let config_exists = Path::new(&args.config).exists();
    let config = if !config_exists && args.config == DEFAULT_CONFIG_PATH {
        AppConfig::default()
    } else {
        AppConfig::load(&args.config)?
    };

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    match config.logging.format.as_str() {
        "json" => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        _ => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    if config_exists {
        tracing::info!(path = %args.config, "Loaded configuration");
    } else {
        tracing::info!("No configuration file found, using built-in defaults");
    }

    // Create router
    let app = create_router();

    // Start server; blocks until graceful shutdown completes
    http::start_server(app, &config).await?;

    tracing::info!("Server stopped");
    Ok(())
}
