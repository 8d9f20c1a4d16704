//! # Stellar Burgers CLI
//!
//! Terminal front-end over [`burger_store::App`].
//!
//! ## Module Organization
//! ```text
//! burger_cli/
//! ├── lib.rs          ◄─── You are here (tracing setup & run)
//! ├── cli.rs          ◄─── clap argument definitions
//! ├── commands/
//! │   ├── mod.rs      ◄─── dispatch + output helpers
//! │   ├── catalog.rs  ◄─── ingredients, feed, route
//! │   ├── orders.rs   ◄─── order show / place, orders
//! │   └── account.rs  ◄─── login, register, logout, profile, password reset
//! └── render.rs       ◄─── plain-text views
//! ```

pub mod cli;
pub mod commands;
pub mod render;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use burger_store::{App, AppConfig};

pub use cli::Cli;

/// Runs one CLI invocation.
///
/// ## Sequence
/// 1. Load configuration (env > config.toml > defaults), apply `--api-url`
/// 2. Build the app (file session storage + HTTP client)
/// 3. Mount: fetch the catalog and restore the session concurrently
/// 4. Execute the command
pub async fn run(cli: Cli) -> Result<()> {
    let mut config = AppConfig::load(cli.config.clone()).context("Failed to load configuration")?;
    if let Some(url) = &cli.api_url {
        config.api_url = url.clone();
        config.validate()?;
    }

    let app = App::from_config(&config).context("Failed to set up the API client")?;

    info!(api_url = %config.api_url, json = cli.json, "Starting");
    app.mount().await;

    commands::execute(&app, &config, cli.command, cli.json).await
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so command output stays pipeable.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=burger_store=trace` - Show every dispatched action
/// - Default: warnings only, `--verbose` for debug
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "info,burger=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
