//! Vizygo Web Server Binary
//!
//! This binary starts the Vizygo REST API that a browser frontend uses to
//! list, filter, price and book rentals.
//!
//! # Usage
//!
//! ```bash
//! # Start with default settings (port 3001, built-in catalog)
//! vizygo-web
//!
//! # Specify port and catalog fixture
//! vizygo-web --port 8080 --catalog fleet.json
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tracing::{info, warn};

use vizygo::config::Config;
use vizygo::{logging, web};

/// Vizygo Web Server - REST API for the rental catalog
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3001")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Catalog file (.json or .json5). Defaults to the configured catalog,
    /// then the built-in one.
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logging::init_web(args.verbose)?;

    // Fall back to defaults if the config file is unreadable
    let config = Config::load().unwrap_or_else(|e| {
        warn!("Using default configuration: {e:#}");
        Config::default()
    });
    let catalog = args.catalog.or(config.paths.catalog);
    match &catalog {
        Some(path) => info!("Catalog: {}", path.display()),
        None => info!("Catalog: built-in"),
    }

    // Build socket address
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;

    // Start the server
    web::run_server(catalog.as_deref(), addr).await
}
