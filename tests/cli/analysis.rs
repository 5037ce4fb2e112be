use crate::support::{stdout_json, Campus, EDGES, NODES};
use predicates::prelude::*;

// ============================================================================
// Connectivity, Euler and spanning tree tests
// ============================================================================

/// The fixture plus an isolated Gym
fn campus_with_island() -> Campus {
    Campus::with_records(&format!("{NODES}Gym,sports,30\n"), EDGES)
}

/// The fixture without its chord: a plain four-cycle
fn square_campus() -> Campus {
    Campus::with_records(
        NODES,
        "Gate,Library,1\nLibrary,Canteen,2\nCanteen,Dorm,1\nDorm,Gate,1\n",
    )
}

#[test]
fn test_connected() {
    Campus::new()
        .cmd()
        .arg("connected")
        .assert()
        .success()
        .stdout("Graph is connected\n");

    campus_with_island()
        .cmd()
        .args(["--format", "records", "connected"])
        .assert()
        .success()
        .stdout("connected,false\n");
}

#[test]
fn test_euler_path_only_with_two_odd_vertices() {
    let campus = Campus::new();

    let output = campus
        .cmd()
        .args(["--format", "json", "euler", "--path"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["circuit_exists"], false);
    assert_eq!(json["path_exists"], true);
    assert_eq!(json["circuit"].as_array().unwrap().len(), 0);

    let path = json["path"].as_array().unwrap();
    assert_eq!(path.len(), 6);
    assert_eq!(path[0], "Gate");
    assert_eq!(path[5], "Canteen");
}

#[test]
fn test_euler_circuit_from_start() {
    let campus = square_campus();

    campus
        .cmd()
        .args(["euler", "--start", "Library"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Euler circuit: exists"))
        .stdout(predicate::str::is_match(r"Circuit: Library( -> \w+){3} -> Library\n").unwrap());
}

#[test]
fn test_euler_unknown_start() {
    square_campus()
        .cmd()
        .args(["euler", "--start", "Observatory"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("vertex not found: Observatory"));
}

#[test]
fn test_euler_disconnected_has_neither() {
    campus_with_island()
        .cmd()
        .arg("euler")
        .assert()
        .success()
        .stdout("Euler circuit: none\nEuler path: none\n");
}

#[test]
fn test_mst_human() {
    Campus::new()
        .cmd()
        .arg("mst")
        .assert()
        .success()
        .stdout("Gate - Library : 1\nGate - Dorm : 1\nCanteen - Dorm : 1\nTotal weight: 3\n");
}

#[test]
fn test_mst_json() {
    let output = Campus::new()
        .cmd()
        .args(["--format", "json", "mst"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["spanning"], true);
    assert_eq!(json["total_weight"], 3);
    assert_eq!(json["edges"].as_array().unwrap().len(), 3);
}

#[test]
fn test_mst_disconnected() {
    campus_with_island()
        .cmd()
        .arg("mst")
        .assert()
        .success()
        .stdout("No spanning tree: graph is not connected\n");
}

#[test]
fn test_mst_single_location() {
    Campus::with_records("Gate,entrance,5\n", "")
        .cmd()
        .arg("mst")
        .assert()
        .success()
        .stdout("No spanning tree: fewer than two locations\n");
}
