//! Application-wide constants.
//!
//! Names, paths and contact details used across the CLI, TUI and web API.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Vizygo";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "vizygo";

/// The directory name for application data (config, logs).
///
/// - Linux: `~/.config/{APP_DATA_DIR}/`
/// - macOS: `~/Library/Application Support/{APP_DATA_DIR}/`
/// - Windows: `%APPDATA%\{APP_DATA_DIR}\`
pub const APP_DATA_DIR: &str = "Vizygo";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "VIZYGO_CONFIG_DIR";

/// Log file written by the terminal UI, inside the config directory.
pub const TUI_LOG_FILE: &str = "vizygo.log";

/// Tagline shown in the title bar.
pub const TAGLINE: &str = "Ride Your Way";

/// Support mailbox.
pub const SUPPORT_EMAIL: &str = "support@vizygo.in";

/// Support phone line.
pub const SUPPORT_PHONE: &str = "+91 9182762800";

/// First-booking coupon code.
pub const COUPON_CODE: &str = "NEWUSER";

/// Coupon headline.
pub const COUPON_TITLE: &str = "Get ₹500 off on your first booking";

/// Coupon fine print.
pub const COUPON_TERMS: &str = "*Valid for new users only";
