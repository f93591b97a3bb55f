//! CLI integration tests.
//!
//! Tests the jsontree binary by invoking it as a subprocess.

use std::io::Write;
use std::process::{Command, Stdio};

fn binary_path() -> std::path::PathBuf {
    // Find the binary in the target directory
    let mut path = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_default();

    // Navigate to the deps directory's sibling (the main binary location)
    if path.ends_with("deps") {
        path.pop();
    }

    if cfg!(windows) {
        path.join("jsontree.exe")
    } else {
        path.join("jsontree")
    }
}

fn run_with_stdin(args: &[&str], input: &str) -> (i32, String, String) {
    let binary = binary_path();
    let mut child = Command::new(&binary)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap_or_else(|e| panic!("Failed to spawn jsontree at {:?}: {}", binary, e));

    {
        let stdin = child.stdin.as_mut().unwrap();
        stdin.write_all(input.as_bytes()).unwrap();
    }

    let output = child.wait_with_output().unwrap();
    let code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (code, stdout, stderr)
}

// ============================================================================
// Formatting
// ============================================================================

#[test]
fn compact_output_preserves_member_order() {
    let (code, stdout, _) = run_with_stdin(&["--compact"], r#"{ "b": 1, "a": 2 }"#);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim_end(), r#"{"b":1,"a":2}"#);
}

#[test]
fn indented_output_is_default() {
    let (code, stdout, _) = run_with_stdin(&[], r#"{"a": [1, 2]}"#);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim_end(), "{\n  \"a\": [\n    1,\n    2\n  ]\n}");
}

#[test]
fn custom_indent_width() {
    let (code, stdout, _) = run_with_stdin(&["--indent", "4"], "[1]");
    assert_eq!(code, 0);
    assert_eq!(stdout.trim_end(), "[\n    1\n]");
}

#[test]
fn decimal_literal_text_survives() {
    let (code, stdout, _) = run_with_stdin(&["--compact"], "1.500e3");
    assert_eq!(code, 0);
    assert_eq!(stdout.trim_end(), "1.500e3");
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn malformed_input_reports_location_and_fails() {
    let (code, stdout, stderr) = run_with_stdin(&[], r#"{"a":[{"c":0"#);
    assert_ne!(code, 0);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Missing closing brace in JSON object at /a/0"));
}

#[test]
fn duplicate_key_reported() {
    let (code, _, stderr) = run_with_stdin(&[], r#"{"a":1,"a":2}"#);
    assert_ne!(code, 0);
    assert!(stderr.contains("Duplicate key in JSON object"));
}

#[test]
fn max_depth_option_is_applied() {
    let (code, _, stderr) = run_with_stdin(&["--max-depth", "2"], "[[[1]]]");
    assert_ne!(code, 0);
    assert!(stderr.contains("Maximum nesting depth exceeded"));

    let (code, stdout, _) = run_with_stdin(&["--max-depth", "3", "--compact"], "[[[1]]]");
    assert_eq!(code, 0);
    assert_eq!(stdout.trim_end(), "[[[1]]]");
}

#[test]
fn out_of_range_max_depth_rejected() {
    let (code, _, stderr) = run_with_stdin(&["--max-depth", "5000"], "1");
    assert_ne!(code, 0);
    assert!(stderr.contains("Maximum nesting depth must be between"));
}
