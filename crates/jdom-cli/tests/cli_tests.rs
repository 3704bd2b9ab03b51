//! Integration tests for the `jdom` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the get, set,
//! and inspect subcommands through the actual binary, including stdin input,
//! file I/O, placeholder arguments, and error reporting.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

const DOC: &str = r#"{"items":[{"name":"first"},{"name":"second"}],"count":2}"#;

fn jdom() -> Command {
    Command::cargo_bin("jdom").unwrap()
}

/// Helper: a per-test file path under the system temp dir.
fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("jdom-cli-test-{}-{}", std::process::id(), name))
}

// ─────────────────────────────────────────────────────────────────────────────
// get
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn get_from_stdin() {
    jdom()
        .args(["get", ".items[1].name"])
        .write_stdin(DOC)
        .assert()
        .success()
        .stdout("\"second\"\n");
}

#[test]
fn get_missing_path_prints_null() {
    jdom()
        .args(["get", ".items[7].name"])
        .write_stdin(DOC)
        .assert()
        .success()
        .stdout("null\n");
}

#[test]
fn get_with_default() {
    jdom()
        .args(["get", ".settings.theme", "--default", "\"light\""])
        .write_stdin(DOC)
        .assert()
        .success()
        .stdout("\"light\"\n");
}

#[test]
fn get_binds_placeholder_arguments() {
    jdom()
        .args(["get", ".%[%].%", "--arg", "items", "--arg", "0", "--arg", "name"])
        .write_stdin(DOC)
        .assert()
        .success()
        .stdout("\"first\"\n");
}

#[test]
fn name_prefix_forces_a_member_name() {
    jdom()
        .args(["get", ".%", "--arg", "name:7"])
        .write_stdin(r#"{"7":"seven"}"#)
        .assert()
        .success()
        .stdout("\"seven\"\n");
}

#[test]
fn get_from_file() {
    let input = temp_path("get-input.json");
    std::fs::write(&input, DOC).unwrap();

    jdom()
        .args(["get", ".count", "-i"])
        .arg(&input)
        .assert()
        .success()
        .stdout("2\n");

    let _ = std::fs::remove_file(&input);
}

#[test]
fn pretty_output() {
    jdom()
        .args(["get", ".items[0]", "--pretty"])
        .write_stdin(DOC)
        .assert()
        .success()
        .stdout("{\n  \"name\": \"first\"\n}\n");
}

// ─────────────────────────────────────────────────────────────────────────────
// set
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn set_creates_missing_nodes() {
    jdom()
        .args(["set", ".a[2].b", "true"])
        .write_stdin("null")
        .assert()
        .success()
        .stdout("{\"a\":[null,null,{\"b\":true}]}\n");
}

#[test]
fn set_replaces_existing_value() {
    let output = jdom()
        .args(["set", ".count", "3"])
        .write_stdin(DOC)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let doc: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(doc["count"], 3);
    assert_eq!(doc["items"][0]["name"], "first");
}

#[test]
fn set_writes_to_file() {
    let output = temp_path("set-output.json");
    let _ = std::fs::remove_file(&output);

    jdom()
        .args(["set", ".name", "\"jdom\"", "-o"])
        .arg(&output)
        .write_stdin("{}")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = std::fs::read_to_string(&output).expect("output file must exist");
    assert_eq!(content, "{\"name\":\"jdom\"}\n");
    let _ = std::fs::remove_file(&output);
}

#[test]
fn set_through_a_scalar_fails() {
    jdom()
        .args(["set", ".count.x", "1"])
        .write_stdin(DOC)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot create path"))
        .stderr(predicate::str::contains("value of type int"));
}

#[test]
fn set_rejects_invalid_value() {
    jdom()
        .args(["set", ".a", "{not json"])
        .write_stdin("{}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse value"));
}

// ─────────────────────────────────────────────────────────────────────────────
// inspect
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn inspect_root() {
    jdom()
        .arg("inspect")
        .write_stdin(DOC)
        .assert()
        .success()
        .stdout("type: object\nsize: 2\nkeys:\n  \"count\"\n  \"items\"\n");
}

#[test]
fn inspect_array_node() {
    jdom()
        .args(["inspect", ".items"])
        .write_stdin(DOC)
        .assert()
        .success()
        .stdout(predicate::str::contains("type: array"))
        .stdout(predicate::str::contains("[1]"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Errors
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn invalid_path_is_reported() {
    jdom()
        .args(["get", ".items[x]"])
        .write_stdin(DOC)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid path"))
        .stderr(predicate::str::contains("invalid array index at position 7"));
}

#[test]
fn missing_placeholder_argument_is_reported() {
    jdom()
        .args(["get", ".items[%]"])
        .write_stdin(DOC)
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing argument"));
}

#[test]
fn invalid_json_input_is_reported() {
    jdom()
        .args(["get", "."])
        .write_stdin("{\"a\":")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse JSON input"));
}

#[test]
fn missing_input_file_is_reported() {
    jdom()
        .args(["get", ".", "-i", "/nonexistent/jdom/input.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}
