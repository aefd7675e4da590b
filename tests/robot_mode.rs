//! Robot-mode (JSON) end-to-end tests for the snip binary.

use assert_cmd::Command;
use serde_json::Value;
use tempfile::TempDir;

/// Command pointed at a fresh database inside `dir`, with color and
/// log noise disabled.
fn snip(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("snip").unwrap();
    cmd.env("SNIP_DB", dir.path().join("snippets.db"))
        .env("NO_COLOR", "1")
        .env("RUST_LOG", "off");
    cmd
}

fn parse_json(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).unwrap_or_else(|_| {
        panic!(
            "Failed to parse JSON:\n{}",
            String::from_utf8_lossy(bytes)
        )
    })
}

#[test]
fn robot_put_reports_stored_snippet() {
    let dir = TempDir::new().unwrap();

    let assert = snip(&dir)
        .args(["--robot", "put", "list", "A sequence of things"])
        .assert()
        .success();

    let json = parse_json(&assert.get_output().stdout);
    assert_eq!(json.get("ok").and_then(Value::as_bool), Some(true));
    assert_eq!(json.get("keyword").and_then(Value::as_str), Some("list"));
    assert_eq!(
        json.get("message").and_then(Value::as_str),
        Some("A sequence of things")
    );
    assert_eq!(json.get("hidden").and_then(Value::as_bool), Some(false));
    assert!(json.get("recorded_at").is_some_and(Value::is_string));
}

#[test]
fn robot_get_returns_found_snippet() {
    let dir = TempDir::new().unwrap();

    snip(&dir).args(["put", "list", "A sequence of things"]).assert().success();

    let assert = snip(&dir)
        .args(["--robot", "get", "list"])
        .assert()
        .success();

    let json = parse_json(&assert.get_output().stdout);
    assert_eq!(json.get("found").and_then(Value::as_bool), Some(true));
    assert_eq!(
        json.get("message").and_then(Value::as_str),
        Some("A sequence of things")
    );
}

#[test]
fn robot_get_missing_reports_found_false() {
    let dir = TempDir::new().unwrap();

    let assert = snip(&dir)
        .args(["--robot", "get", "nope"])
        .assert()
        .success();

    let stdout = assert.get_output().stdout.clone();
    let json = parse_json(&stdout);
    assert_eq!(json.get("found").and_then(Value::as_bool), Some(false));
    assert_eq!(json.get("keyword").and_then(Value::as_str), Some("nope"));

    // The human-mode sentinel text must not leak into robot output
    assert!(!String::from_utf8_lossy(&stdout).contains("404"));
}

#[test]
fn robot_catalog_is_sorted_json_array() {
    let dir = TempDir::new().unwrap();

    snip(&dir).args(["put", "beta", "b"]).assert().success();
    snip(&dir).args(["put", "alpha", "a"]).assert().success();

    let assert = snip(&dir).args(["--robot", "catalog"]).assert().success();

    let json = parse_json(&assert.get_output().stdout);
    assert_eq!(json, serde_json::json!(["alpha", "beta"]));
}

#[test]
fn robot_search_returns_full_rows() {
    let dir = TempDir::new().unwrap();

    snip(&dir).args(["put", "a", "contains cat"]).assert().success();
    snip(&dir).args(["put", "b", "all about dogs"]).assert().success();

    let assert = snip(&dir)
        .args(["--robot", "search", "cat"])
        .assert()
        .success();

    let json = parse_json(&assert.get_output().stdout);
    let rows = json.as_array().expect("search output should be an array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("keyword").and_then(Value::as_str), Some("a"));
    assert_eq!(
        rows[0].get("message").and_then(Value::as_str),
        Some("contains cat")
    );
    assert_eq!(rows[0].get("hidden").and_then(Value::as_bool), Some(false));
    assert!(rows[0].get("recorded_at").is_some_and(Value::is_string));
}

#[test]
fn robot_version_reports_build_info() {
    let dir = TempDir::new().unwrap();

    let assert = snip(&dir).args(["--robot", "version"]).assert().success();

    let json = parse_json(&assert.get_output().stdout);
    assert!(json.get("version").is_some_and(Value::is_string));
    assert!(json.get("git_sha").is_some());
    assert!(json.get("rustc_version").is_some());
}

#[test]
fn robot_error_is_json_on_stderr() {
    let dir = TempDir::new().unwrap();

    // Pointing the database at an existing directory forces an open failure
    let mut cmd = Command::cargo_bin("snip").unwrap();
    let assert = cmd
        .env("SNIP_DB", dir.path())
        .env("NO_COLOR", "1")
        .env("RUST_LOG", "off")
        .args(["--robot", "catalog"])
        .assert()
        .failure();

    let json = parse_json(&assert.get_output().stderr);
    assert_eq!(json.get("error").and_then(Value::as_bool), Some(true));
    assert!(json
        .get("message")
        .and_then(Value::as_str)
        .is_some_and(|m| m.contains("Cannot open snippet database")));
    assert_eq!(json.get("recoverable").and_then(Value::as_bool), Some(true));
    assert!(json.get("suggestion").is_some_and(Value::is_string));
}
