use crate::support::{stdout_json, Campus, EDGES};
use predicates::prelude::*;

// ============================================================================
// Edge command tests
// ============================================================================

#[test]
fn test_edge_show_is_symmetric() {
    let campus = Campus::new();

    campus
        .cmd()
        .args(["edge", "show", "Canteen", "Library"])
        .assert()
        .success()
        .stdout("Canteen <-> Library: 2\n");
}

#[test]
fn test_edge_list_records_sorted_by_weight() {
    let campus = Campus::new();

    campus
        .cmd()
        .args(["--format", "records", "edge", "list"])
        .assert()
        .success()
        .stdout("Gate,Library,1\nGate,Dorm,1\nCanteen,Dorm,1\nLibrary,Canteen,2\nGate,Canteen,5\n");
}

#[test]
fn test_edge_add_and_update() {
    let campus = Campus::new();

    campus
        .cmd()
        .args(["edge", "add", "Library", "Dorm", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Connected Library and Dorm (4)"));

    campus
        .cmd()
        .args(["edge", "update", "Dorm", "Library", "3"])
        .assert()
        .success();

    let output = campus
        .cmd()
        .args(["--format", "json", "edge", "show", "Library", "Dorm"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["weight"], 3);
}

#[test]
fn test_edge_add_duplicate_fails() {
    let campus = Campus::new();

    campus
        .cmd()
        .args(["edge", "add", "Library", "Gate", "9"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("edge already exists"));

    assert_eq!(campus.read("data/edges.csv"), EDGES);
}

#[test]
fn test_edge_add_self_loop_fails() {
    let campus = Campus::new();

    campus
        .cmd()
        .args(["edge", "add", "Gate", "Gate", "1"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("self-loop"));
}

#[test]
fn test_edge_remove() {
    let campus = Campus::new();

    campus
        .cmd()
        .args(["edge", "remove", "Gate", "Canteen"])
        .assert()
        .success();

    campus
        .cmd()
        .args(["edge", "show", "Gate", "Canteen"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("edge not found: Gate - Canteen"));
}

#[test]
fn test_edge_error_as_json_envelope() {
    let campus = Campus::new();

    let output = campus
        .cmd()
        .args(["--format", "json", "edge", "remove", "Library", "Dorm"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "edge_not_found");
    assert_eq!(json["error"]["code"], 3);
}
