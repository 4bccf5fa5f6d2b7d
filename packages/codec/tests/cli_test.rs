//! Tests for the `kml-codec` binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn codec() -> Command {
    Command::cargo_bin("kml-codec").unwrap()
}

#[test]
fn test_inspect_text() {
    codec()
        .arg("inspect")
        .arg(fixture_path("geometry.kml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Placemark: 3"))
        .stdout(predicate::str::contains("Extruded path"));
}

#[test]
fn test_inspect_json() {
    let output = codec()
        .args(["inspect", "--format", "json"])
        .arg(fixture_path("styles.kml"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["styles"], 3);
    assert_eq!(value["top_level"][0], "Roll over this icon");
}

#[test]
fn test_inspect_strict_failure() {
    codec()
        .arg("inspect")
        .arg(fixture_path("unknown.kml"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Unsupported element <Bogus>"));
}

#[test]
fn test_inspect_lenient() {
    codec()
        .args(["inspect", "--lenient"])
        .arg(fixture_path("unknown.kml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Partly known"));
}

#[test]
fn test_convert_to_kmz_and_back() {
    let dir = tempfile::tempdir().unwrap();
    let kmz = dir.path().join("out.kmz");
    let kml = dir.path().join("back.kml");

    codec()
        .arg("convert")
        .arg(fixture_path("track.kml"))
        .arg(&kmz)
        .assert()
        .success()
        .stdout(predicate::str::contains("Converted"));
    assert!(fs::read(&kmz).unwrap().starts_with(b"PK"));

    codec().arg("convert").arg(&kmz).arg(&kml).assert().success();
    let text = fs::read_to_string(&kml).unwrap();
    assert!(text.contains("<gx:Track"));
}

#[test]
fn test_convert_rejects_output_format() {
    let dir = tempfile::tempdir().unwrap();
    codec()
        .arg("convert")
        .arg(fixture_path("track.kml"))
        .arg(dir.path().join("out.gpx"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file format"));
}

#[test]
fn test_check_passes() {
    codec()
        .arg("check")
        .arg(fixture_path("styles.kml"))
        .arg(fixture_path("update.kml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("ok"));
}

#[test]
fn test_check_reports_failures() {
    codec()
        .arg("check")
        .arg(fixture_path("styles.kml"))
        .arg(fixture_path("unknown.kml"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("FAIL"))
        .stderr(predicate::str::contains("1 of 2 file(s) failed"));
}
