//! CLI tests for the liquidator binary.
//!
//! Spawns the binary and verifies exit codes and report output for the
//! default pass, file input/output, and input read failures.

use std::fs;
use std::process::Command;

use serde_json::Value;

fn liquidator() -> Command {
    Command::new(env!("CARGO_BIN_EXE_liquidator"))
}

#[test]
fn default_run_prints_successful_report() {
    let output = liquidator().output().expect("run liquidator");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).expect("utf-8 stdout");
    let report: Value = serde_json::from_str(&stdout).expect("parse report json");
    assert_eq!(report["success"], Value::Bool(true));
    assert!(report["timestamp"].is_string());
}

#[test]
fn missing_input_path_fails_with_read_error() {
    let output = liquidator()
        .args(["--input", "does-not-exist.txt"])
        .output()
        .expect("run liquidator");

    assert_ne!(output.status.code(), Some(0));
    let stderr = String::from_utf8(output.stderr).expect("utf-8 stderr");
    assert!(stderr.contains("read input"));
    assert!(stderr.contains("does-not-exist.txt"));
}

#[test]
fn file_input_and_output_round_trip() {
    let temp = tempfile::tempdir().expect("tempdir");
    let input_path = temp.path().join("input.txt");
    let output_path = temp.path().join("report.json");
    fs::write(&input_path, "open positions\n").expect("write input");

    let status = liquidator()
        .arg("--input")
        .arg(&input_path)
        .arg("--output")
        .arg(&output_path)
        .status()
        .expect("run liquidator");

    assert_eq!(status.code(), Some(0));
    let raw = fs::read_to_string(&output_path).expect("read report");
    let report: Value = serde_json::from_str(&raw).expect("parse report json");
    assert_eq!(report["success"], Value::Bool(true));
    assert_eq!(report["data"]["bytes"], Value::from(15));
}

#[test]
fn verbose_diagnostics_stay_off_stdout() {
    let output = liquidator()
        .arg("--verbose")
        .env_remove("RUST_LOG")
        .output()
        .expect("run liquidator");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).expect("utf-8 stdout");
    // stdout must stay pure JSON even when narration is enabled
    let report: Value = serde_json::from_str(&stdout).expect("parse report json");
    assert_eq!(report["success"], Value::Bool(true));
}
