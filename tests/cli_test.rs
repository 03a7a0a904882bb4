//! Tests for the `hmatrix` binary.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::path::Path;

use assert_cmd::Command;

const DATA: &str = r##"{
    "labels": ["alpha", "beta", "gamma", "delta"],
    "values": [0.9, 0.1, 0.4, 0.7, 0.3, 0.8],
    "value_domain": [0, 1],
    "value_colors": ["#fff", "#aaa", "#555", "#000"],
    "clusters": [1, 1, 2, 2],
    "edges": [{"from": 0, "to": 3, "value": 0.75}]
}"##;

fn hmatrix() -> Command {
    Command::cargo_bin("hmatrix").expect("binary should build")
}

fn write(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_renders_data_file_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let data = write(dir.path(), "data.json", DATA);

    let output = hmatrix().arg(&data).output().unwrap();
    assert!(output.status.success());

    let svg = String::from_utf8(output.stdout).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(r#"width="1000" height="1000""#));
    assert!(svg.contains(r#"class="l0""#));
    assert!(svg.contains(r#"class="line e0 e3""#));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn test_default_data_file_in_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "data.json", DATA);

    let output = hmatrix().current_dir(dir.path()).output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout).unwrap().contains(r#"id="heatmap""#));
}

#[test]
fn test_options_file() {
    let dir = tempfile::tempdir().unwrap();
    let data = write(dir.path(), "data.json", DATA);
    let options = write(dir.path(), "opts.json", r#"{"width": 400, "height": 300}"#);

    let output = hmatrix().args([&data, &options]).output().unwrap();
    assert!(output.status.success());
    let svg = String::from_utf8(output.stdout).unwrap();
    assert!(svg.contains(r#"width="400" height="300""#));
}

#[test]
fn test_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.json");

    let output = hmatrix().arg(&missing).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8(output.stderr).unwrap().contains("error"));
}

#[test]
fn test_invalid_document_fails() {
    let dir = tempfile::tempdir().unwrap();
    let data = write(dir.path(), "data.json", &DATA.replace("[1, 1, 2, 2]", "[1, 3, 3, 3]"));

    let output = hmatrix().arg(&data).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8(output.stderr).unwrap().contains("Cluster ids"));
}

#[test]
fn test_help() {
    let output = hmatrix().arg("--help").output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout).unwrap().contains("Usage: hmatrix"));
}

#[test]
fn test_usage_error() {
    let output = hmatrix().args(["a.json", "b.json", "c.json"]).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());

    let output = hmatrix().arg("--pretty").output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8(output.stderr).unwrap().contains("--pretty"));
}
