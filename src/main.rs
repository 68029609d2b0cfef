//! Vizygo - Terminal browser for bike and scooter rentals
//!
//! Without a subcommand this opens the interactive catalog browser. The
//! subcommands give headless, scriptable access to the same catalog.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use vizygo::catalog::CatalogStore;
use vizygo::cli::{CliResult, ConfigArgs, FiltersArgs, ListArgs, SearchArgs, ShowArgs};
use vizygo::config::Config;
use vizygo::constants::APP_NAME;
use vizygo::{app::RentalSession, logging, tui};

/// Vizygo - browse, price and book rental bikes and scooters
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Catalog file (.json or .json5) for the browser instead of the built-in one
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List listings matching the given filters
    List(ListArgs),
    /// Show rate plans, hourly bands and extras for a listing
    Show(ShowArgs),
    /// List categories, locations and price bands
    Filters(FiltersArgs),
    /// Find available rides for a pickup/dropoff window
    Search(SearchArgs),
    /// View or change configuration
    Config(ConfigArgs),
}

impl Command {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::List(args) => args.execute(),
            Self::Show(args) => args.execute(),
            Self::Filters(args) => args.execute(),
            Self::Search(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(command) = cli.command {
        if let Err(e) = logging::init_cli(cli.verbose) {
            eprintln!("Warning: {e:#}");
        }
        if let Err(e) = command.execute() {
            eprintln!("Error: {e}");
            std::process::exit(e.kind.code());
        }
        return Ok(());
    }

    run_browser(cli.catalog.as_deref(), cli.verbose)
}

/// Loads configuration and catalog, then runs the TUI until the user quits.
fn run_browser(catalog: Option<&Path>, verbose: bool) -> Result<()> {
    // Logging is best effort; the browser works without it
    let log_path = logging::init_tui(verbose).ok();

    let config = Config::load().context("Failed to load configuration")?;
    let catalog_path = catalog.map(Path::to_path_buf).or_else(|| config.paths.catalog.clone());
    let store = CatalogStore::load(catalog_path.as_deref())?;

    tracing::info!(
        listings = store.len(),
        city = %config.service.city,
        "Starting {APP_NAME}"
    );

    let mut state = tui::AppState::new(RentalSession::new(store), config)?;
    let mut terminal = tui::setup_terminal()?;
    let result = tui::run_tui(&mut state, &mut terminal);
    tui::restore_terminal(terminal)?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "Browser exited with an error");
        if let Some(path) = log_path {
            eprintln!("See {} for details", path.display());
        }
    }
    result
}
