//! Integration tests for the ropf CLI
//!
//! These tests run the binary against poll files written to a temporary
//! directory and check its output and exit status.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper function to create a ropf command
fn ropf() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("ropf"))
}

/// Helper to write a poll file
fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

const CLEAN: &str = "\
‡ Test polls
A: AA001 •A: AP •N: Alpha Party
B: BB002 •A: BP •N: Beta Party

•PF: ACME •FS: 2021-07-20 •FE: 2021-07-22 •SS: 1000 A:55 B:45
& •A: North A:50 B:50
•PF: Other •PD: 2021-08 •SS: 800 •A: North A:48 B:52
";

const DIRTY: &str = "\
•PF: ACME •PD: 2021-07-27 A:x B:45
this line means nothing
•PD: 2021-07-28 A:60 B:50
";

// =============================================================================
// CHECK
// =============================================================================

#[test]
fn test_check_clean_file() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "clean.ropf", CLEAN);

    ropf()
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 opinion poll(s), 0 warning(s)."));
}

#[test]
fn test_check_reports_warnings_and_fails() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "dirty.ropf", DIRTY);

    ropf()
        .arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Malformed result value (“x”) detected in line 1.",
        ))
        .stdout(predicate::str::contains("Unrecognized line format on line 2."))
        .stdout(predicate::str::contains(
            "Polling firm and commissioner missing in line 3.",
        ))
        .stdout(predicate::str::contains(
            "Result values in line 3 don’t add up within the rounding error interval.",
        ));
}

#[test]
fn test_check_json_output() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "dirty.ropf", DIRTY);

    let output = ropf().arg("--json").arg("check").arg(&path).output().unwrap();
    assert!(!output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["passed"], serde_json::json!(false));
    assert_eq!(json["opinion_polls"], serde_json::json!(2));
    let codes: Vec<&str> = json["warnings"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|warning| warning["code"].as_str())
        .collect();
    assert_eq!(
        codes,
        vec![
            "malformed-result-value",
            "unrecognized-line-format",
            "polling-firm-and-commissioner-missing",
            "result-values-not-adding-up-within-rounding-error-interval",
        ]
    );
}

#[test]
fn test_check_missing_file() {
    let temp = TempDir::new().unwrap();

    ropf()
        .arg("check")
        .arg(temp.path().join("missing.ropf"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn test_check_with_config_file() {
    let temp = TempDir::new().unwrap();
    let path = write_file(
        &temp,
        "undeclared.ropf",
        "A: AA001 •A: AP\n•PF: ACME •PD: 2021-07-27 A:55 Z:45\n",
    );

    ropf().arg("check").arg(&path).assert().failure().stdout(
        predicate::str::contains("Unknown electoral list key (“Z”) detected in line 2."),
    );

    let config = write_file(&temp, "ropf.toml", "[parser]\nkey_resolution = \"registry\"\n");
    ropf()
        .arg("--config")
        .arg(&config)
        .arg("check")
        .arg(&path)
        .assert()
        .success();
}

#[test]
fn test_check_with_invalid_config_file() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "clean.ropf", CLEAN);
    let config = write_file(&temp, "ropf.toml", "[parser]\nkey_resolution = 3\n");

    ropf()
        .arg("--config")
        .arg(&config)
        .arg("check")
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid parser configuration"));
}

// =============================================================================
// SUMMARY
// =============================================================================

#[test]
fn test_summary_human_output() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "clean.ropf", CLEAN);

    ropf()
        .arg("summary")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Total: 2 opinion poll(s), 3 response scenario(s), 6 result value(s)",
        ))
        .stdout(predicate::str::contains("Most recent date: 2021-08-31"))
        .stdout(predicate::str::contains("Lowest sample size: 800"))
        .stdout(predicate::str::contains("Per year:"));
}

#[test]
fn test_summary_json_output() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "clean.ropf", CLEAN);

    let output = ropf().args(["summary", "--json"]).arg(&path).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["statistics"]["total"]["opinion_polls"], serde_json::json!(2));
    assert_eq!(json["lowest_sample_size"], serde_json::json!(800));
    assert_eq!(json["most_recent_date"], serde_json::json!("2021-08-31"));
    assert_eq!(json["electoral_list_sets"], serde_json::json!(2));
    assert_eq!(json["warnings"], serde_json::json!(0));
}

#[test]
fn test_summary_still_runs_on_dirty_files() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "dirty.ropf", DIRTY);

    ropf()
        .arg("summary")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Warnings: 4"));
}

// =============================================================================
// CLI
// =============================================================================

#[test]
fn test_help_lists_commands() {
    ropf()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("summary"));
}

#[test]
fn test_unknown_command_fails() {
    ropf().arg("frobnicate").assert().failure();
}
