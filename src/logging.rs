//! Tracing subscriber setup for each front-end.
//!
//! `RUST_LOG` always takes precedence over the level picked here.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::constants::TUI_LOG_FILE;

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into())
}

/// Headless commands log to stderr so stdout stays parseable.
pub fn init_cli(verbose: bool) -> Result<()> {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(env_filter(filter))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()
        .context("Failed to initialize logging")
}

/// The terminal UI owns the screen, so logs go to a file in the config directory.
///
/// Returns the log file path.
pub fn init_tui(verbose: bool) -> Result<PathBuf> {
    let path = Config::config_dir()?.join(TUI_LOG_FILE);
    init_file(&path, verbose)?;
    Ok(path)
}

/// Appends logs to `path`, creating parent directories as needed.
pub fn init_file(path: &Path, verbose: bool) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(env_filter(filter))
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .try_init()
        .context("Failed to initialize logging")
}

/// The HTTP server logs to stdout.
pub fn init_web(verbose: bool) -> Result<()> {
    let filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(env_filter(filter))
        .with(fmt::layer())
        .try_init()
        .context("Failed to initialize logging")
}
