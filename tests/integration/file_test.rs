//! Integration tests for the file-argument conversion workflow

use pretty_assertions::assert_eq;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::NamedTempFile;

fn run_tomljson(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_tomljson"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start tomljson");

    child
        .stdin
        .take()
        .expect("child stdin not captured")
        .write_all(stdin.as_bytes())
        .expect("failed to write to stdin");

    child
        .wait_with_output()
        .expect("failed to wait for tomljson")
}

fn toml_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    file.write_all(contents.as_bytes()).expect("write failed");
    file
}

#[test]
fn test_file_argument_conversion() {
    let file = toml_file("a = 1\nb = \"x\"\n");
    let output = run_tomljson(&[file.path().to_str().unwrap()], "");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "{\n  \"a\": 1,\n  \"b\": \"x\"\n}\n"
    );
}

#[test]
fn test_file_takes_precedence_over_stdin() {
    let file = toml_file("from = \"file\"\n");
    // Piped input is present but must be ignored
    let output = run_tomljson(&[file.path().to_str().unwrap()], "from = \"stdin\"\n");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "{\n  \"from\": \"file\"\n}\n"
    );
}

#[test]
fn test_extra_file_arguments_are_ignored() {
    let file = toml_file("n = 1\n");
    let output = run_tomljson(
        &[file.path().to_str().unwrap(), "/no/such/second.toml"],
        "",
    );

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "{\n  \"n\": 1\n}\n"
    );
    assert!(output.stderr.is_empty());
}

#[test]
fn test_missing_file_reports_bare_message() {
    let output = run_tomljson(&["/no/such/file.toml"], "");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.lines().count(), 1, "stderr was: {stderr}");
    assert!(stderr.contains("/no/such/file.toml"));
    assert!(!stderr.contains("error occurred at row"));
}

#[test]
fn test_invalid_file_reports_same_diagnostic_as_stdin() {
    let file = toml_file("a = 1\na = 2\n");
    let from_file = run_tomljson(&[file.path().to_str().unwrap()], "");
    let from_stdin = run_tomljson(&[], "a = 1\na = 2\n");

    assert!(!from_file.status.success());
    assert_eq!(from_file.stderr, from_stdin.stderr);
    assert_eq!(from_file.status.code(), from_stdin.status.code());
}
