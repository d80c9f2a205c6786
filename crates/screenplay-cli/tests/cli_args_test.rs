//! Argument-parsing and exit-code tests run against the compiled `screenplay`
//! binary, in the spirit of the workspace's end-to-end CLI test convention.
//! These deliberately avoid exercising real PDF extraction (no `pdfium`
//! system library is assumed to be present in a test environment) and stick
//! to input shapes that fail, or succeed, before extraction ever runs.

use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

fn get_binary_path() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    format!("{manifest_dir}/../../target/debug/screenplay")
}

fn build_binary() {
    let status = Command::new("cargo")
        .args(["build", "--bin", "screenplay"])
        .status()
        .expect("failed to build screenplay binary");
    assert!(status.success(), "failed to build screenplay binary");
}

#[test]
fn help_lists_both_subcommands() {
    build_binary();
    let output = Command::new(get_binary_path())
        .arg("--help")
        .output()
        .expect("failed to run screenplay --help");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("parse-pdf"));
    assert!(stdout.contains("parse-debug"));
}

#[test]
fn parse_pdf_help_lists_all_output_formats() {
    build_binary();
    let output = Command::new(get_binary_path())
        .args(["parse-pdf", "--help"])
        .output()
        .expect("failed to run screenplay parse-pdf --help");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    for format in ["text", "json", "json-pretty", "structured"] {
        assert!(stdout.contains(format), "expected --format help to list '{format}'");
    }
}

#[test]
fn parse_pdf_missing_arguments_exits_nonzero() {
    build_binary();
    let output = Command::new(get_binary_path())
        .arg("parse-pdf")
        .output()
        .expect("failed to run screenplay parse-pdf");

    assert!(!output.status.success());
}

#[test]
fn parse_pdf_rejects_nonexistent_input_file() {
    build_binary();
    let dir = TempDir::new().expect("failed to create temp dir");
    let missing_input = dir.path().join("does-not-exist.pdf");
    let output_path: PathBuf = dir.path().join("out.txt");

    let output = Command::new(get_binary_path())
        .arg("parse-pdf")
        .arg(&missing_input)
        .arg(&output_path)
        .output()
        .expect("failed to run screenplay parse-pdf");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to extract text from"));
    assert!(!output_path.exists(), "no output file should be written on extraction failure");
}

#[test]
fn parse_pdf_rejects_unknown_format_value() {
    build_binary();
    let dir = TempDir::new().expect("failed to create temp dir");
    let missing_input = dir.path().join("does-not-exist.pdf");
    let output_path = dir.path().join("out.txt");

    let output = Command::new(get_binary_path())
        .args(["parse-pdf"])
        .arg(&missing_input)
        .arg(&output_path)
        .args(["--format", "yaml"])
        .output()
        .expect("failed to run screenplay parse-pdf");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("format"));
}

#[test]
fn parse_debug_rejects_nonexistent_input_file() {
    build_binary();
    let dir = TempDir::new().expect("failed to create temp dir");
    let missing_input = dir.path().join("does-not-exist.pdf");
    let output_path = dir.path().join("debug.txt");

    let output = Command::new(get_binary_path())
        .arg("parse-debug")
        .arg(&missing_input)
        .arg(&output_path)
        .output()
        .expect("failed to run screenplay parse-debug");

    assert!(!output.status.success());
    assert!(!output_path.exists());
}
