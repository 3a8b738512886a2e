//! Integration tests for the rwbuf CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn rwbuf() -> Command {
    Command::cargo_bin("rwbuf").unwrap()
}

#[test]
fn test_scan_wraps_to_the_first_word() {
    rwbuf()
        .args(["scan", "--text", "hello world ", "--count", "3"])
        .assert()
        .success()
        .stdout("hello\nworld\nhello\n");
}

#[test]
fn test_scan_never_joins_fragments() {
    rwbuf()
        .args(["scan", "--text", "a", "--text", "b ", "--count", "1"])
        .assert()
        .success()
        .stdout("b\n");
}

#[test]
fn test_scan_without_words_prints_nothing() {
    rwbuf()
        .args(["scan", "--text", "   ", "--text", "tail"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_scan_json_output() {
    let output = rwbuf()
        .args(["scan", "-t", "red green ", "-n", "2", "-f", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let words = json.as_array().unwrap();
    assert_eq!(words.len(), 2);
    assert_eq!(words[0]["text"], "red");
    assert_eq!(words[1]["text"], "green");
    assert_eq!(words[1]["index"], 1);
}

#[test]
fn test_scan_log_format_writes_to_log() {
    rwbuf()
        .env_remove("RUST_LOG")
        .args(["scan", "-t", "hello world ", "-n", "2", "-f", "log"])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("rwbuf::words"))
        .stderr(predicate::str::contains("hello"))
        .stderr(predicate::str::contains("world"));
}

#[test]
fn test_run_log_format() {
    rwbuf()
        .env_remove("RUST_LOG")
        .args([
            "run",
            "-i",
            &fixture_path("sample.txt"),
            "--interval-ms",
            "10",
            "--linger-ms",
            "200",
            "-f",
            "log",
        ])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("rwbuf::words"));
}

#[test]
fn test_scan_file_input() {
    rwbuf()
        .args(["scan", "-i", &fixture_path("sample.txt"), "-n", "4"])
        .assert()
        .success()
        .stdout("the\nquick\nbrown\nfox\n");
}

#[test]
fn test_scan_missing_file() {
    rwbuf()
        .args(["scan", "-i", "nonexistent.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open input"));
}

#[test]
fn test_run_drains_input_unchanged() {
    let dir = TempDir::new().unwrap();
    let drained = dir.path().join("drained.txt");

    rwbuf()
        .args([
            "run",
            "-i",
            &fixture_path("sample.txt"),
            "--chunk-size",
            "16",
            "--drain-size",
            "7",
            "--interval-ms",
            "10",
            "--linger-ms",
            "200",
            "--quiet",
        ])
        .arg("--drain-to")
        .arg(&drained)
        .assert()
        .success()
        .stdout(predicate::str::contains("the\n"))
        .stderr(predicate::str::contains("drained 80 bytes"));

    let original = fs::read(fixture_path("sample.txt")).unwrap();
    assert_eq!(fs::read(&drained).unwrap(), original);
}

#[test]
fn test_run_with_faulting_producer() {
    rwbuf()
        .args([
            "run",
            "-i",
            &fixture_path("sample.txt"),
            "--chunk-size",
            "10",
            "--fault-after",
            "25",
            "--interval-ms",
            "10",
            "--linger-ms",
            "0",
            "--quiet",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("enqueued 20 bytes"))
        .stderr(predicate::str::contains("drained 20 bytes"));
}

#[test]
fn test_generate_then_validate_config() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("rwbuf.toml");

    rwbuf()
        .arg("generate-config")
        .arg("-o")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("generated successfully"));

    rwbuf()
        .arg("validate")
        .arg("-c")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn test_validate_rejects_zero_drain_size() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("bad.toml");
    fs::write(&config, "[queue]\ndrain_size = 0\n").unwrap();

    rwbuf()
        .arg("validate")
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Configuration is invalid"));
}

#[test]
fn test_run_rejects_invalid_config() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("bad.toml");
    fs::write(&config, "[scan]\ninterval_ms = 0\n").unwrap();

    rwbuf()
        .args(["run", "-i", &fixture_path("sample.txt"), "--quiet"])
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("scan interval must be greater than zero"));
}

#[test]
fn test_help_lists_commands() {
    rwbuf()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("scan"))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("generate-config"));
}
