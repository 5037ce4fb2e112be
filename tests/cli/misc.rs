use crate::support::{campus_nav, Campus};
use predicates::prelude::*;

// ============================================================================
// Help, version and global flag tests
// ============================================================================

#[test]
fn test_help_flag() {
    campus_nav()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: campus-nav"))
        .stdout(predicate::str::contains("distance"))
        .stdout(predicate::str::contains("mst"));
}

#[test]
fn test_version_flag() {
    campus_nav()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("campus-nav"));
}

#[test]
fn test_no_command_prints_hint() {
    campus_nav()
        .assert()
        .success()
        .stdout(predicate::str::contains("campus-nav --help"));
}

#[test]
fn test_unknown_command_is_usage_error() {
    campus_nav().arg("teleport").assert().code(2);
}

#[test]
fn test_unknown_format_is_usage_error() {
    campus_nav()
        .args(["--format", "yaml", "connected"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown format"));
}

#[test]
fn test_usage_error_as_json() {
    let output = campus_nav()
        .args(["--format", "json", "distance", "Gate"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
}

#[test]
fn test_quiet_suppresses_confirmations() {
    Campus::new()
        .cmd()
        .args(["--quiet", "vertex", "add", "Gym", "sports", "30"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_quiet_suppresses_errors() {
    Campus::new()
        .cmd()
        .args(["--quiet", "vertex", "show", "Observatory"])
        .assert()
        .code(3)
        .stderr("");
}

#[test]
fn test_verbose_logs_to_stderr() {
    Campus::new()
        .cmd()
        .args(["--verbose", "connected"])
        .assert()
        .success()
        .stdout("Graph is connected\n")
        .stderr(predicate::str::contains("load_graph"));
}
