//! End-to-end tests for `vizygo list`, `vizygo filters` and `vizygo search`.

use serde_json::Value;
use tempfile::TempDir;

mod fixtures;
use fixtures::*;

fn run_json(args: &[&str]) -> Value {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(args, config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Command {args:?} should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("Should parse JSON output")
}

fn listing_ids(result: &Value) -> Vec<u64> {
    result["listings"]
        .as_array()
        .expect("listings should be an array")
        .iter()
        .map(|l| l["id"].as_u64().unwrap())
        .collect()
}

// ============================================================================
// List Command Tests
// ============================================================================

#[test]
fn test_list_json_shows_whole_catalog() {
    let result = run_json(&["list", "--json"]);

    assert_eq!(result["count"], 8);
    assert_eq!(listing_ids(&result), vec![2, 3, 4, 5, 6, 7, 8, 1]);

    let first = &result["listings"][0];
    assert_eq!(first["category"], "standard");
    assert_eq!(first["location"], "Indiranagar");
    assert_eq!(first["tier"], "daily");
    assert_eq!(first["price"], 150);
    assert_eq!(first["distance_allowance_km"], 60);
    assert_eq!(first["available"], true);
}

#[test]
fn test_list_filters_by_category_alias() {
    let result = run_json(&["list", "--category", "scooties", "--json"]);
    assert_eq!(listing_ids(&result), vec![7, 8, 1]);
}

#[test]
fn test_list_filters_combine() {
    let result = run_json(&[
        "list",
        "--location",
        "Koramangala",
        "--price-band",
        "premium",
        "--json",
    ]);
    assert_eq!(listing_ids(&result), vec![5]);
}

#[test]
fn test_list_all_is_unconstrained() {
    let result = run_json(&[
        "list",
        "--category",
        "all",
        "--location",
        "all",
        "--price-band",
        "all",
        "--json",
    ]);
    assert_eq!(result["count"], 8);
}

#[test]
fn test_list_no_matches_is_not_an_error() {
    let result = run_json(&["list", "--location", "Atlantis", "--json"]);
    assert_eq!(result["count"], 0);
    assert!(result["listings"].as_array().unwrap().is_empty());
}

#[test]
fn test_list_quotes_requested_tier() {
    let result = run_json(&["list", "--tier", "monthly", "--category", "standard", "--json"]);
    let first = &result["listings"][0];
    assert_eq!(first["id"], 2);
    assert_eq!(first["tier"], "monthly");
    assert_eq!(first["price"], 100);
}

#[test]
fn test_list_unknown_category_fails() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(&["list", "--category", "helicopter"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown category 'helicopter'"), "stderr: {stderr}");
}

#[test]
fn test_list_invalid_tier_fails() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(&["list", "--tier", "yearly"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid tier 'yearly'"));
}

#[test]
fn test_list_available_only_with_fixture() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = write_catalog(temp_dir.path(), "catalog.json", &test_catalog());
    let catalog = catalog.to_str().unwrap();

    let all = run_json(&["list", "--catalog", catalog, "--json"]);
    assert_eq!(listing_ids(&all), vec![1, 2, 3, 4]);

    let open = run_json(&["list", "--catalog", catalog, "--available-only", "--json"]);
    assert_eq!(listing_ids(&open), vec![1, 2, 3]);
}

#[test]
fn test_list_missing_catalog_file_fails() {
    let config_dir = TempDir::new().unwrap();
    let missing = config_dir.path().join("missing.json");
    let output = isolated_command(
        &["list", "--catalog", missing.to_str().unwrap()],
        config_dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_list_human_readable() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(&["list", "--category", "premium"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Listings (2)"), "stdout: {stdout}");
    assert!(stdout.contains("Koramangala"));
    assert!(stdout.contains("Whitefield"));
}

// ============================================================================
// Filters Command Tests
// ============================================================================

#[test]
fn test_filters_json() {
    let result = run_json(&["filters", "--json"]);

    let categories: Vec<&str> = result["categories"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["key"].as_str().unwrap())
        .collect();
    assert_eq!(categories, vec!["standard", "premium", "scooter"]);

    assert_eq!(result["locations"][0], "Indiranagar");
    assert_eq!(result["locations"].as_array().unwrap().len(), 7);

    let bands: Vec<&str> = result["price_bands"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["key"].as_str().unwrap())
        .collect();
    assert_eq!(bands, vec!["budget", "mid", "premium"]);
}

// ============================================================================
// Search Command Tests
// ============================================================================

#[test]
fn test_search_lists_available_rides() {
    let result = run_json(&[
        "search",
        "--pickup-date",
        "2025-01-10",
        "--pickup-time",
        "09:00",
        "--dropoff-date",
        "2025-01-11",
        "--dropoff-time",
        "10:30",
        "--category",
        "scooter",
        "--json",
    ]);

    assert_eq!(result["hours"], 26);
    assert_eq!(result["count"], 3);
    assert_eq!(listing_ids(&result), vec![7, 8, 1]);
}

#[test]
fn test_search_rejects_dropoff_before_pickup() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(
        &[
            "search",
            "--pickup-date",
            "2025-01-10",
            "--pickup-time",
            "09:00",
            "--dropoff-date",
            "2025-01-10",
            "--dropoff-time",
            "09:00",
        ],
        config_dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("must be after pickup"));
}
