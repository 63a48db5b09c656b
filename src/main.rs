//! Keyword Matrix Server Binary
//!
//! Starts the keyword matrix web service that feeds the 3D globe frontend.
//!
//! # Usage
//!
//! ```bash
//! # Start with defaults (0.0.0.0:8003, bundle from ./frontend/out)
//! keyword-matrix
//!
//! # Use a specific config file and debug logging
//! keyword-matrix --config ./keyword-matrix.toml --verbose
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use keyword_matrix::config::Config;
use keyword_matrix::constants::{APP_BINARY_NAME, SERVICE_NAME};
use keyword_matrix::web;

/// Keyword Matrix Server - REST API for the 3D keyword globe
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Args {
    /// Configuration file (TOML). Defaults to the platform config directory:
    /// - Linux: ~/.config/KeywordMatrix/config.toml
    /// - macOS: ~/Library/Application Support/KeywordMatrix/config.toml
    /// - Windows: %APPDATA%\KeywordMatrix\config.toml
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    info!(
        "{} v{} ({} worker thread(s))",
        SERVICE_NAME,
        env!("CARGO_PKG_VERSION"),
        config.server.workers
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.server.workers)
        .enable_all()
        .build()
        .context("Failed to build async runtime")?;

    runtime.block_on(web::run_server(config))
}
