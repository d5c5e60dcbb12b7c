//! Integration tests for top-level CLI behavior.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

fn run_electro_spec(args: &[&str]) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_electro-spec");
    Command::new(bin)
        .args(args)
        .env_remove("ELECTRO_SPEC_CONFIG")
        .output()
        .expect("failed to run electro-spec binary")
}

/// Writes `contents` to a per-test file in the system temp dir.
fn fixture(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("electro-spec-cli-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

const SPEC_A: &str = r#"{"name":"Spec A","code":"SPEC_A","description":"desc","status":1}"#;

#[test]
fn validate_accepts_complete_request() {
    let input = fixture("validate_ok.json", SPEC_A);
    let output = run_electro_spec(&["validate", input.to_str().unwrap()]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("[PASS] status"));
    assert!(stdout.contains("Result: VALID"));
}

#[test]
fn validate_names_only_the_empty_name() {
    let input = fixture(
        "validate_empty_name.json",
        r#"{"name":"","code":"SPEC_B","description":"","status":1}"#,
    );
    let output = run_electro_spec(&["validate", input.to_str().unwrap()]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stdout.contains("[FAIL] name: must not be empty"));
    assert!(stdout.contains("[PASS] description"));
    assert!(stderr.contains("1 invalid field(s)"));
}

#[test]
fn serialize_prints_all_four_fields() {
    let input = fixture("serialize.json", SPEC_A);
    let output = run_electro_spec(&["serialize", input.to_str().unwrap()]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert_eq!(
        stdout.trim(),
        r#"{"code":"SPEC_A","description":"desc","name":"Spec A","status":1}"#
    );
}

#[test]
fn serialize_honours_snake_case_config() {
    let config = fixture("snake.yaml", "wire:\n  casing: snake\n  renames:\n    code: slug\n");
    let input = fixture("serialize_snake.json", r#"{"name":"n","slug":"S","description":"","status":0}"#);
    let output = run_electro_spec(&[
        "--config",
        config.to_str().unwrap(),
        "serialize",
        input.to_str().unwrap(),
    ]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains(r#""slug":"S""#));
}

#[test]
fn decode_reports_missing_status() {
    let input = fixture(
        "decode_missing_status.json",
        r#"{"id":1,"createdAt":"2024-01-01T00:00:00Z","updatedAt":"2024-01-01T00:00:00Z","name":"n","code":"c","description":"d"}"#,
    );
    let output = run_electro_spec(&["decode", input.to_str().unwrap()]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("missing required field `status`"));
}

#[test]
fn exchange_round_trips_through_loopback() {
    let input = fixture("exchange.json", SPEC_A);
    let output = run_electro_spec(&["exchange", input.to_str().unwrap()]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains("Specification: 1"));
    assert!(stdout.contains("Code: SPEC_A"));
}

#[test]
fn missing_config_file_is_an_error() {
    let input = fixture("config_missing.json", SPEC_A);
    let output = run_electro_spec(&[
        "--config",
        "/nonexistent/electro-spec.yaml",
        "validate",
        input.to_str().unwrap(),
    ]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("config file not found"));
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let output = run_electro_spec(&["nonsense"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("unrecognized subcommand"));
}

#[test]
fn clashing_wire_keys_in_config_are_rejected() {
    let config = fixture("clash.yaml", "wire:\n  renames:\n    name: code\n");
    let input = fixture("clash.json", SPEC_A);
    let output = run_electro_spec(&[
        "--config",
        config.to_str().unwrap(),
        "serialize",
        input.to_str().unwrap(),
    ]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("both use wire key `code`"));
}
