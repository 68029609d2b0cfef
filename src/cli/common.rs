//! Shared CLI plumbing: error type, exit codes and catalog loading.

use serde::Serialize;
use std::fmt;
use std::path::Path;

use crate::app::RentalSession;
use crate::catalog::CatalogStore;
use crate::config::Config;
use crate::error::CatalogError;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Invalid input: bad flag values, rejected transitions
    Validation = 1,
    /// File system or serialization failure
    Io = 2,
    /// Referenced listing or story does not exist
    NotFound = 3,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code category
    pub kind: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Invalid input.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::Validation,
            message: message.into(),
        }
    }

    /// I/O or serialization failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::Io,
            message: message.into(),
        }
    }

    /// Missing entity.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::NotFound,
            message: message.into(),
        }
    }

    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.kind.code()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

impl From<CatalogError> for CliError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::InvalidListingId(_) => Self::not_found(err.to_string()),
            _ => Self::validation(err.to_string()),
        }
    }
}

/// Result alias for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Loads the catalog from `--catalog`, else the configured fixture, else the
/// embedded seed.
pub fn load_session(catalog: Option<&Path>) -> CliResult<RentalSession> {
    let configured = match catalog {
        Some(_) => None,
        None => Config::load()
            .map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))?
            .paths
            .catalog,
    };
    let path = catalog.or(configured.as_deref());

    let store = CatalogStore::load(path)
        .map_err(|e| CliError::io(format!("Failed to load catalog: {e:#}")))?;
    Ok(RentalSession::new(store))
}

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}
