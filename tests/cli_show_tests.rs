//! End-to-end tests for `vizygo show`.

use tempfile::TempDir;

mod fixtures;
use fixtures::*;

#[test]
fn test_show_json_default_tier() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(&["show", "7", "--json"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let result: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Should parse JSON output");

    assert_eq!(result["listing"]["id"], 7);
    assert_eq!(result["listing"]["category"], "scooter");
    assert_eq!(result["selected_tier"], "daily");
    assert_eq!(result["quote"]["price"], 100);
    assert_eq!(result["quote"]["distance_allowance_km"], 40);
    assert!(result["listing"]["hourly_bands"]["weekday"]["rates"].is_array());
    assert!(result["listing"]["extras"]["excess_distance_charge_km"].is_number());
}

#[test]
fn test_show_json_selected_tier() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(&["show", "2", "--tier", "monthly", "--json"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["selected_tier"], "monthly");
    assert_eq!(result["quote"]["price"], 100);
    assert_eq!(result["quote"]["distance_allowance_km"], 60);
}

#[test]
fn test_show_human_readable_card() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(&["show", "5", "--tier", "weekly"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("(#5)"), "stdout: {stdout}");
    assert!(stdout.contains("Rate plans:"));
    assert!(stdout.contains("Hourly rates:"));
    assert!(stdout.contains("Extras:"));
    assert!(stdout.contains("* 7 Days"), "Selected tier should be marked");
}

#[test]
fn test_show_unknown_listing_exits_not_found() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(&["show", "404"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No listing with id 404"), "stderr: {stderr}");
}

#[test]
fn test_show_booked_listing_from_fixture() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = write_catalog(temp_dir.path(), "catalog.json", &test_catalog());

    let output = isolated_command(
        &["show", "4", "--catalog", catalog.to_str().unwrap()],
        temp_dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Booked"));
}
