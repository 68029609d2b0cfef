//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use crate::constants::{APP_DATA_DIR, CONFIG_DIR_ENV};

/// Longest simulated latency accepted for OTP and chat replies.
pub const MAX_DELAY_MS: u64 = 60_000;

/// Longest OTP validity window accepted, in seconds.
pub const MAX_OTP_TTL_SECS: u64 = 3600;

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

impl FromStr for ThemeMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => anyhow::bail!("Invalid theme mode '{other}': expected auto, dark or light"),
        }
    }
}

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Catalog fixture to load instead of the built-in seed
    #[serde(default)]
    pub catalog: Option<PathBuf>,
}

/// Operating city and simulated service latency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Current operating city
    pub city: String,
    /// Cities offered in the city picker
    pub cities: Vec<String>,
    /// Cities where rentals are available
    pub served_cities: Vec<String>,
    /// Simulated OTP delivery latency in milliseconds
    #[serde(default = "default_otp_delay_ms")]
    pub otp_delay_ms: u64,
    /// Simulated support chat reply latency in milliseconds
    #[serde(default = "default_chat_reply_delay_ms")]
    pub chat_reply_delay_ms: u64,
    /// How long an issued OTP is accepted, in seconds
    #[serde(default = "default_otp_ttl_secs")]
    pub otp_ttl_secs: u64,
}

impl ServiceConfig {
    /// OTP validity window.
    #[must_use]
    pub const fn otp_ttl(&self) -> Duration {
        Duration::from_secs(self.otp_ttl_secs)
    }
}

fn default_otp_delay_ms() -> u64 {
    1500
}

fn default_otp_ttl_secs() -> u64 {
    300
}

fn default_chat_reply_delay_ms() -> u64 {
    1000
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            city: "Bangalore".to_string(),
            cities: ["Bangalore", "Hyderabad", "Mumbai", "Delhi", "Chennai", "Pune"]
                .into_iter()
                .map(String::from)
                .collect(),
            served_cities: vec!["Bangalore".to_string()],
            otp_delay_ms: default_otp_delay_ms(),
            chat_reply_delay_ms: default_chat_reply_delay_ms(),
            otp_ttl_secs: default_otp_ttl_secs(),
        }
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Display help on startup
    pub show_help_on_startup: bool,
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Show the first-booking coupon banner on the Explore page
    #[serde(default = "default_show_coupon")]
    pub show_coupon: bool,
}

fn default_show_coupon() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_help_on_startup: true,
            theme_mode: ThemeMode::default(),
            show_coupon: default_show_coupon(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/Vizygo/config.toml`
/// - macOS: `~/Library/Application Support/Vizygo/config.toml`
/// - Windows: `%APPDATA%\Vizygo\config.toml`
///
/// `VIZYGO_CONFIG_DIR` overrides the directory.
///
/// # Validation
///
/// - `catalog` path must exist when set
/// - `city` must be one of `served_cities`
/// - every served city must be listed in `cities`
/// - delays must not exceed [`MAX_DELAY_MS`]
/// - `otp_ttl_secs` must be between 1 and [`MAX_OTP_TTL_SECS`] and outlast
///   `otp_delay_ms`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
    /// City and latency settings
    #[serde(default)]
    pub service: ServiceConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the platform-specific config directory path.
    ///
    /// - Linux: `~/.config/Vizygo/`
    /// - macOS: `~/Library/Application Support/Vizygo/`
    /// - Windows: `%APPDATA%\Vizygo\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DATA_DIR);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit file.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).with_context(|| {
            format!("Failed to read config file: {}", config_path.display())
        })?;

        let config: Self = toml::from_str(&content).with_context(|| {
            format!("Failed to parse config file: {}", config_path.display())
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to an explicit file.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).with_context(|| {
                format!("Failed to create config directory: {}", config_dir.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).with_context(|| {
            format!("Failed to write temp config file: {}", temp_path.display())
        })?;

        // Atomic rename
        fs::rename(&temp_path, config_path).with_context(|| {
            format!("Failed to rename temp config file to: {}", config_path.display())
        })?;

        tracing::debug!(path = %config_path.display(), "Saved configuration");
        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if let Some(catalog) = &self.paths.catalog {
            if !catalog.exists() {
                anyhow::bail!("Catalog file does not exist: {}", catalog.display());
            }
        }

        let service = &self.service;
        if !contains_city(&service.served_cities, &service.city) {
            anyhow::bail!(
                "City '{}' is not served (served cities: {})",
                service.city,
                service.served_cities.join(", ")
            );
        }

        if let Some(unknown) = service
            .served_cities
            .iter()
            .find(|served| !contains_city(&service.cities, served))
        {
            anyhow::bail!("Served city '{unknown}' is missing from the city list");
        }

        for (name, value) in [
            ("otp_delay_ms", service.otp_delay_ms),
            ("chat_reply_delay_ms", service.chat_reply_delay_ms),
        ] {
            if value > MAX_DELAY_MS {
                anyhow::bail!("{name} must be at most {MAX_DELAY_MS}, got {value}");
            }
        }

        let ttl = service.otp_ttl_secs;
        if ttl == 0 || ttl > MAX_OTP_TTL_SECS {
            anyhow::bail!("otp_ttl_secs must be between 1 and {MAX_OTP_TTL_SECS}, got {ttl}");
        }
        if service.otp_ttl() <= Duration::from_millis(service.otp_delay_ms) {
            anyhow::bail!(
                "otp_ttl_secs ({ttl}) must be longer than otp_delay_ms ({})",
                service.otp_delay_ms
            );
        }

        Ok(())
    }

    /// Sets the catalog fixture path with validation.
    pub fn set_catalog_path(&mut self, path: PathBuf) -> Result<()> {
        self.paths.catalog = Some(path);
        self.validate()
    }

    /// Sets the operating city with validation.
    pub fn set_city(&mut self, city: &str) -> Result<()> {
        let canonical = self
            .service
            .cities
            .iter()
            .find(|known| known.eq_ignore_ascii_case(city.trim()))
            .cloned()
            .with_context(|| format!("Unknown city '{city}'"))?;
        self.service.city = canonical;
        self.validate()
    }
}

fn contains_city(list: &[String], city: &str) -> bool {
    list.iter().any(|known| known.eq_ignore_ascii_case(city))
}
