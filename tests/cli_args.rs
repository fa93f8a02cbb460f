//! Integration tests for CLI argument handling
//!
//! Tests the city argument, --offline flag, and the offline no-data path
//! against the real binary. No test here touches the network.

use std::process::Command;

/// Helper to run the CLI with given args and capture output
fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_skycast"))
        .args(args)
        .env_remove("SKYCAST_API_KEY")
        .output()
        .expect("Failed to execute skycast")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(
        output.status.success(),
        "Expected --help to exit successfully"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("skycast"), "Help should mention skycast");
    assert!(stdout.contains("offline"), "Help should mention --offline flag");
}

#[test]
fn test_missing_city_fails() {
    let output = run_cli(&["--api-key", "test-key"]);
    assert!(!output.status.success(), "Expected missing city to fail");
}

#[test]
fn test_missing_api_key_fails() {
    let output = run_cli(&["London"]);
    assert!(
        !output.status.success(),
        "Expected missing API key to fail"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("api-key") || stderr.contains("SKYCAST_API_KEY"),
        "Should point at the missing key: {}",
        stderr
    );
}

#[test]
fn test_blank_city_prints_error_and_exits() {
    let output = run_cli(&["   ", "--api-key", "test-key", "--offline"]);
    assert!(!output.status.success(), "Expected blank city to fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("empty") || stderr.contains("Empty"),
        "Should print error message about empty city: {}",
        stderr
    );
}

#[test]
fn test_offline_with_empty_cache_reports_no_data() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp directory");

    let output = run_cli(&[
        "tokyo",
        "--offline",
        "--api-key",
        "test-key",
        "--cache-dir",
        temp_dir.path().to_str().unwrap(),
    ]);

    // A valid empty result, not an error
    assert!(
        output.status.success(),
        "Offline with no cached data should still exit cleanly"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("no cached data"),
        "Should report that nothing is cached: {}",
        stdout
    );
}
