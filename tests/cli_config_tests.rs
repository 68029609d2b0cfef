//! End-to-end tests for `vizygo config` commands.
//!
//! Every test points `VIZYGO_CONFIG_DIR` at its own temp directory, so they
//! never touch the user's real configuration and can run in parallel.

use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

mod fixtures;
use fixtures::*;

fn show_json(config_dir: &Path) -> Value {
    let output = isolated_command(&["config", "show", "--json"], config_dir)
        .output()
        .expect("Failed to execute command");
    assert_eq!(
        output.status.code(),
        Some(0),
        "config show should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("Should parse JSON output")
}

// ============================================================================
// Show Command Tests
// ============================================================================

#[test]
fn test_config_show_defaults() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(&["config", "show"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("(built-in)"), "stdout: {stdout}");
    assert!(stdout.contains("Bangalore"));
}

#[test]
fn test_config_show_json_schema() {
    let config_dir = TempDir::new().unwrap();
    let result = show_json(config_dir.path());

    assert!(result["paths"].is_object(), "Should have paths object");
    assert!(result["paths"]["catalog"].is_null(), "No catalog by default");
    assert_eq!(result["service"]["city"], "Bangalore");
    assert_eq!(result["service"]["served_cities"], serde_json::json!(["Bangalore"]));
    assert_eq!(result["service"]["cities"].as_array().unwrap().len(), 6);
    assert_eq!(result["service"]["otp_delay_ms"], 1500);
    assert_eq!(result["service"]["chat_reply_delay_ms"], 1000);
    assert_eq!(result["service"]["otp_ttl_secs"], 300);
    assert_eq!(result["ui"]["theme"], "auto");
    assert_eq!(result["ui"]["show_help_on_startup"], true);
    assert_eq!(result["ui"]["show_coupon"], true);
}

#[test]
fn test_config_show_rejects_invalid_file() {
    let config_dir = TempDir::new().unwrap();
    fs::write(
        config_dir.path().join("config.toml"),
        "[service]\ncity = \"Atlantis\"\ncities = [\"Atlantis\"]\nserved_cities = []\n\
         [ui]\nshow_help_on_startup = false\n",
    )
    .unwrap();

    let output = isolated_command(&["config", "show"], config_dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("not served"));
}

// ============================================================================
// Set Command Tests
// ============================================================================

#[test]
fn test_config_set_requires_an_option() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(&["config", "set"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("At least one configuration option"));
}

#[test]
fn test_config_set_theme_persists() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(&["config", "set", "--theme", "dark"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(config_dir.path().join("config.toml").exists());
    assert_eq!(show_json(config_dir.path())["ui"]["theme"], "dark");
}

#[test]
fn test_config_set_keeps_invalid_file_untouched() {
    let config_dir = TempDir::new().unwrap();
    let config_file = config_dir.path().join("config.toml");
    let original = "[service]\ncity = \"Atlantis\"\ncities = [\"Atlantis\"]\nserved_cities = []\n\
                    [ui]\nshow_help_on_startup = false\nshow_coupon = false\n";
    fs::write(&config_file, original).unwrap();

    let output = isolated_command(&["config", "set", "--theme", "dark"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to load configuration"));
    assert_eq!(fs::read_to_string(&config_file).unwrap(), original);
}

#[test]
fn test_config_set_preserves_other_settings() {
    let config_dir = TempDir::new().unwrap();
    fs::write(
        config_dir.path().join("config.toml"),
        "[service]\ncity = \"Bangalore\"\ncities = [\"Bangalore\"]\nserved_cities = [\"Bangalore\"]\n\
         otp_ttl_secs = 120\n[ui]\nshow_help_on_startup = false\nshow_coupon = false\n",
    )
    .unwrap();

    let output = isolated_command(&["config", "set", "--theme", "light"], config_dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));

    let result = show_json(config_dir.path());
    assert_eq!(result["ui"]["theme"], "light");
    assert_eq!(result["ui"]["show_coupon"], false);
    assert_eq!(result["service"]["otp_ttl_secs"], 120);
}

#[test]
fn test_config_set_invalid_theme() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(&["config", "set", "--theme", "sepia"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid theme mode"));
    assert!(!config_dir.path().join("config.toml").exists());
}

#[test]
fn test_config_set_city_is_case_insensitive() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(&["config", "set", "--city", "bangalore"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(show_json(config_dir.path())["service"]["city"], "Bangalore");
}

#[test]
fn test_config_set_unserved_city_fails() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(&["config", "set", "--city", "Hyderabad"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("not served"));
}

#[test]
fn test_config_set_unknown_city_fails() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(&["config", "set", "--city", "Atlantis"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown city 'Atlantis'"));
}

#[test]
fn test_config_set_missing_catalog_fails() {
    let config_dir = TempDir::new().unwrap();
    let missing = config_dir.path().join("missing.json");
    let output = isolated_command(
        &["config", "set", "--catalog", missing.to_str().unwrap()],
        config_dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("does not exist"));
}

#[test]
fn test_configured_catalog_is_used_by_list() {
    let config_dir = TempDir::new().unwrap();
    let catalog = write_catalog(config_dir.path(), "fleet.json", &test_catalog());

    let output = isolated_command(
        &["config", "set", "--catalog", catalog.to_str().unwrap()],
        config_dir.path(),
    )
    .output()
    .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));

    let result = show_json(config_dir.path());
    assert_eq!(result["paths"]["catalog"], catalog.to_str().unwrap());

    let output = isolated_command(&["list", "--json"], config_dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));
    let listed: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(listed["count"], 4);
}
