//! CLI command handlers for Vizygo.
//!
//! This module provides headless, scriptable access to the rental catalog
//! for automation and testing.

pub mod common;
pub mod config;
pub mod filters;
pub mod list;
pub mod search;
pub mod show;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use filters::FiltersArgs;
pub use list::ListArgs;
pub use search::SearchArgs;
pub use show::ShowArgs;
