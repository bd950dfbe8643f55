use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_pfagen")))
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

#[test]
fn generates_expected_scala() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("FunctionLibrary.scala");

    cmd()
        .args(["-i", &fixture_path("libfcns.xml")])
        .args(["-o", out.to_str().unwrap()])
        .assert()
        .success();

    let output = std::fs::read_to_string(&out).unwrap();
    let expected =
        std::fs::read_to_string(fixture_path("FunctionLibrary.expected.scala")).unwrap();
    assert_eq!(output, expected);
}

#[test]
fn regeneration_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("first.scala");
    let second = dir.path().join("second.scala");

    for out in [&first, &second] {
        cmd()
            .args(["-i", &fixture_path("libfcns.xml")])
            .args(["-o", out.to_str().unwrap()])
            .assert()
            .success();
    }

    assert_eq!(
        std::fs::read(&first).unwrap(),
        std::fs::read(&second).unwrap()
    );
}

#[test]
fn default_output_name() {
    let dir = TempDir::new().unwrap();

    cmd()
        .current_dir(dir.path())
        .args(["-i", &fixture_path("libfcns.xml")])
        .assert()
        .success();

    assert!(dir.path().join("FunctionLibrary.scala").is_file());
}

#[test]
fn custom_default_namespace() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out.scala");

    cmd()
        .args(["-i", &fixture_path("libfcns.xml")])
        .args(["-o", out.to_str().unwrap()])
        .args(["--namespace", "util"])
        .assert()
        .success();

    let output = std::fs::read_to_string(&out).unwrap();
    assert!(output.contains("object util {"));
    assert!(!output.contains("object core {"));
}

#[test]
fn malformed_parameter_fails_with_identity() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out.scala");

    cmd()
        .args(["-i", &fixture_path("bad.xml")])
        .args(["-o", out.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("m.bad"))
        .stderr(predicate::str::contains("no type children"));

    // Partial output is never written.
    assert!(!out.exists());
}

#[test]
fn missing_input_file_fails() {
    cmd()
        .args(["-i", "does-not-exist.xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}
