//! Integration tests for the pgn-report binary.
//!
//! These invoke the actual binary and verify:
//! - Exit codes (0 = success, 1 = extraction failure, 2 = usage error)
//! - stdout line format and stderr diagnostics
//! - JSON output format

use std::path::PathBuf;
use std::process::Command;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(format!("tests/fixtures/{}", name))
}

fn run_report(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_pgn-report"))
        .args(args)
        .output()
        .expect("failed to execute pgn-report")
}

fn stdout_lines(output: &std::process::Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_default_report() {
    let path = fixture("test_match.pgn");
    let output = run_report(&[path.to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec![
            "Event: Test Match",
            "White: Alice",
            "Black: Bob",
            "Result: 1-0",
            "Move 1: e4",
            "Move 2: e5",
            "Move 3: Nf3",
        ]
    );
}

#[test]
fn test_move_limit_truncates_long_game() {
    let path = fixture("opera.pgn");
    let output = run_report(&[path.to_str().unwrap()]);

    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 4 + 10);
    assert_eq!(lines[4], "Move 1: e4");
    assert_eq!(lines[13], "Move 10: dxe5");
}

#[test]
fn test_custom_fields_and_limit() {
    let path = fixture("opera.pgn");
    let output = run_report(&[
        path.to_str().unwrap(),
        "--fields",
        "White,Black,Site",
        "--moves",
        "2",
    ]);

    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec![
            "White: Morphy, Paul",
            "Black: Duke Karl / Count Isouard",
            "Site: Paris FRA",
            "Move 1: e4",
            "Move 2: e5",
        ]
    );
}

#[test]
fn test_move_limit_zero_prints_headers_only() {
    let path = fixture("test_match.pgn");
    let output = run_report(&[path.to_str().unwrap(), "--moves", "0"]);

    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 4);
    assert!(lines.iter().all(|line| !line.starts_with("Move")));
}

#[test]
fn test_headerless_game_shows_placeholders() {
    let path = fixture("headerless.pgn");
    let output = run_report(&[path.to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec![
            "Event: Unknown",
            "White: Unknown",
            "Black: Unknown",
            "Result: Unknown",
            "Move 1: d4",
            "Move 2: d5",
            "Move 3: c4",
            "Move 4: e6",
        ]
    );
}

#[test]
fn test_illegal_move_fails_without_output() {
    let path = fixture("illegal.pgn");
    let output = run_report(&[path.to_str().unwrap()]);

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("illegal move 'Bc4' at ply 1"));
}

#[test]
fn test_empty_file_fails_with_empty_input() {
    let path = fixture("empty.pgn");
    let output = run_report(&[path.to_str().unwrap()]);

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no game record found"));
}

#[test]
fn test_missing_file_fails_with_diagnostic() {
    let output = run_report(&["no/such/file.pgn"]);

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot open"));
}

#[test]
fn test_invalid_compression_value_is_usage_error() {
    let path = fixture("test_match.pgn");
    let output = run_report(&[path.to_str().unwrap(), "--compression", "gzip"]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid compression value 'gzip'"));
}

#[test]
fn test_json_report() {
    let path = fixture("test_match.pgn");
    let output = run_report(&[path.to_str().unwrap(), "--json", "--moves", "2"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();

    assert_eq!(parsed["headers"]["Event"], "Test Match");
    assert_eq!(parsed["headers"]["Result"], "1-0");
    assert_eq!(parsed["moves"].as_array().unwrap().len(), 2);
    assert_eq!(parsed["moves"][0]["ply"], 1);
    assert_eq!(parsed["moves"][0]["san"], "e4");
}

#[test]
fn test_repeated_invocations_are_byte_identical() {
    let path = fixture("opera.pgn");
    let first = run_report(&[path.to_str().unwrap()]);
    let second = run_report(&[path.to_str().unwrap()]);

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}
