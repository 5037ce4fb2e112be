use crate::support::{stdout_json, Campus, NODES};
use predicates::prelude::*;

// ============================================================================
// Vertex command tests
// ============================================================================

#[test]
fn test_vertex_show() {
    let campus = Campus::new();

    campus
        .cmd()
        .args(["vertex", "show", "Library"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: Library"))
        .stdout(predicate::str::contains("Category: study"))
        .stdout(predicate::str::contains("Visit time: 60 minutes"))
        .stdout(predicate::str::contains("Connections: 2"));
}

#[test]
fn test_vertex_show_missing_is_data_error() {
    let campus = Campus::new();

    campus
        .cmd()
        .args(["vertex", "show", "Observatory"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("vertex not found: Observatory"));
}

#[test]
fn test_vertex_list_json() {
    let campus = Campus::new();

    let output = campus
        .cmd()
        .args(["--format", "json", "vertex", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 4);
    assert_eq!(items[0]["name"], "Gate");
    assert_eq!(items[0]["id"], 0);
    assert_eq!(items[0]["degree"], 3);
    assert_eq!(items[3]["name"], "Dorm");
    assert_eq!(items[3]["visit_minutes"], 0);
}

#[test]
fn test_vertex_add_persists() {
    let campus = Campus::new();

    campus
        .cmd()
        .args(["vertex", "add", "Gym", "sports", "45"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added location Gym"));

    assert!(campus.read("data/nodes.csv").ends_with("Gym,sports,45\n"));

    campus
        .cmd()
        .args(["vertex", "show", "Gym"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Connections: 0"));
}

#[test]
fn test_vertex_add_duplicate_leaves_files_untouched() {
    let campus = Campus::new();

    campus
        .cmd()
        .args(["vertex", "add", "Gate", "entrance", "10"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("vertex already exists: Gate"));

    assert_eq!(campus.read("data/nodes.csv"), NODES);
}

#[test]
fn test_vertex_remove_drops_incident_edges() {
    let campus = Campus::new();

    campus
        .cmd()
        .args(["vertex", "remove", "Library"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Removed location Library and 2 connection(s)",
        ));

    assert_eq!(
        campus.read("data/nodes.csv"),
        "Gate,entrance,5\nCanteen,food,30\nDorm,housing,0\n"
    );
    assert_eq!(
        campus.read("data/edges.csv"),
        "Gate,Dorm,1\nCanteen,Dorm,1\nGate,Canteen,5\n"
    );
}

#[test]
fn test_vertex_update_keeps_name() {
    let campus = Campus::new();

    campus
        .cmd()
        .args(["vertex", "update", "Canteen", "cafe", "20"])
        .assert()
        .success();

    campus
        .cmd()
        .args(["--format", "records", "vertex", "show", "Canteen"])
        .assert()
        .success()
        .stdout("Canteen,cafe,20\n");
}

#[test]
fn test_vertex_export_to_explicit_path() {
    let campus = Campus::new();

    campus
        .cmd()
        .args(["vertex", "export", "out/nodes.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 4 location(s)"));

    assert_eq!(campus.read("out/nodes.csv"), NODES);
}

#[test]
fn test_negative_minutes_rejected_by_parser() {
    let campus = Campus::new();

    campus
        .cmd()
        .args(["vertex", "add", "Gym", "sports", "-5"])
        .assert()
        .code(2);
}

#[test]
fn test_vertex_add_rejects_comma_in_name() {
    let campus = Campus::new();

    campus
        .cmd()
        .args(["vertex", "add", "Hall, North", "dorm", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid name"));

    assert_eq!(campus.read("data/nodes.csv"), NODES);
}
