//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::{Config, ThemeMode};
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug, Clone)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug, Clone)]
pub struct ConfigSetArgs {
    /// Catalog file to load instead of the built-in one
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Theme mode (auto, light, or dark)
    #[arg(long, value_name = "MODE")]
    theme: Option<String>,

    /// Operating city (must be served)
    #[arg(long, value_name = "NAME")]
    city: Option<String>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    paths: PathsOutput,
    service: ServiceOutput,
    ui: UiOutput,
}

#[derive(Serialize, Debug)]
struct PathsOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    catalog: Option<String>,
}

#[derive(Serialize, Debug)]
struct ServiceOutput {
    city: String,
    cities: Vec<String>,
    served_cities: Vec<String>,
    otp_delay_ms: u64,
    chat_reply_delay_ms: u64,
    otp_ttl_secs: u64,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme: String,
    show_help_on_startup: bool,
    show_coupon: bool,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            output_json(&config)?;
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.catalog.is_none() && self.theme.is_none() && self.city.is_none() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --catalog, --theme, or --city",
            ));
        }

        // An unreadable file is reported rather than replaced with defaults
        let mut config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if let Some(path) = &self.catalog {
            config
                .set_catalog_path(path.clone())
                .map_err(|e| CliError::validation(format!("{e:#}")))?;
        }

        if let Some(theme) = &self.theme {
            config.ui.theme_mode = theme
                .parse::<ThemeMode>()
                .map_err(|e| CliError::validation(e.to_string()))?;
        }

        if let Some(city) = &self.city {
            config
                .set_city(city)
                .map_err(|e| CliError::validation(format!("{e:#}")))?;
        }

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

fn theme_name(mode: ThemeMode) -> String {
    format!("{mode:?}").to_lowercase()
}

/// Output configuration in JSON format
fn output_json(config: &Config) -> CliResult<()> {
    let output = ConfigOutput {
        paths: PathsOutput {
            catalog: config
                .paths
                .catalog
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        },
        service: ServiceOutput {
            city: config.service.city.clone(),
            cities: config.service.cities.clone(),
            served_cities: config.service.served_cities.clone(),
            otp_delay_ms: config.service.otp_delay_ms,
            chat_reply_delay_ms: config.service.chat_reply_delay_ms,
            otp_ttl_secs: config.service.otp_ttl_secs,
        },
        ui: UiOutput {
            theme: theme_name(config.ui.theme_mode),
            show_help_on_startup: config.ui.show_help_on_startup,
            show_coupon: config.ui.show_coupon,
        },
    };

    print_json(&output)
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("Configuration:");
    println!();
    println!("Paths:");
    match &config.paths.catalog {
        Some(path) => println!("  {:<20} {}", "Catalog:", path.display()),
        None => println!("  {:<20} (built-in)", "Catalog:"),
    }
    println!();
    println!("Service:");
    println!("  {:<20} {}", "City:", config.service.city);
    println!("  {:<20} {}", "Served cities:", config.service.served_cities.join(", "));
    println!("  {:<20} {}", "All cities:", config.service.cities.join(", "));
    println!("  {:<20} {} ms", "OTP delay:", config.service.otp_delay_ms);
    println!("  {:<20} {} ms", "Chat reply delay:", config.service.chat_reply_delay_ms);
    println!("  {:<20} {} s", "OTP valid for:", config.service.otp_ttl_secs);
    println!();
    println!("UI:");
    println!("  {:<20} {}", "Theme:", theme_name(config.ui.theme_mode));
    println!("  {:<20} {}", "Help on startup:", config.ui.show_help_on_startup);
    println!("  {:<20} {}", "Coupon banner:", config.ui.show_coupon);
}
