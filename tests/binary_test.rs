//! End-to-end tests for the `lev-distance` binary.

use std::process::{Command, Output};

fn run(args: &[&str], rust_log: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lev-distance"))
        .args(args)
        .env("RUST_LOG", rust_log)
        .output()
        .expect("binary should start")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is utf-8")
}

#[test]
fn test_default_prints_distance() {
    let output = run(&["kitten", "sitting"], "warn");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "3\n");
}

#[test]
fn test_similarity_format() {
    let output = run(&["--format", "similarity", "flaw", "lawn"], "warn");
    assert!(output.status.success());
    let value: f64 = stdout(&output).trim().parse().expect("stdout is a float");
    assert!((value - 0.5).abs() < f64::EPSILON);
}

#[test]
fn test_json_format() {
    let output = run(&["-f", "json", "", "abc"], "warn");
    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_str(stdout(&output).trim()).expect("stdout is JSON");
    assert_eq!(value["distance"], serde_json::json!(3));
    assert_eq!(value["source"], serde_json::json!(""));
}

#[test]
fn test_logs_stay_off_stdout() {
    let output = run(&["a", "ab"], "debug");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("comparing strings"));
}

#[test]
fn test_missing_argument_fails() {
    let output = run(&["only-one"], "warn");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}
