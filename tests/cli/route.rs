use crate::support::{stdout_json, Campus, EDGES, NODES};
use predicates::prelude::*;

// ============================================================================
// Distance and route tests
// ============================================================================

#[test]
fn test_distance_takes_shorter_detour() {
    Campus::new()
        .cmd()
        .args(["distance", "Gate", "Canteen"])
        .assert()
        .success()
        .stdout("Shortest distance from Gate to Canteen: 2\n");
}

#[test]
fn test_distance_with_trace() {
    Campus::new()
        .cmd()
        .args(["distance", "Gate", "Canteen", "--trace"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Path: Gate -> Dorm -> Canteen"));
}

#[test]
fn test_distance_to_self_is_zero() {
    Campus::new()
        .cmd()
        .args(["--format", "records", "distance", "Library", "Library"])
        .assert()
        .success()
        .stdout("Library,Library,0\n");
}

#[test]
fn test_distance_unreachable() {
    let campus = Campus::with_records(&format!("{NODES}Gym,sports,30\n"), EDGES);

    campus
        .cmd()
        .args(["distance", "Gate", "Gym"])
        .assert()
        .success()
        .stdout("Gate and Gym are not connected (distance -1)\n");

    campus
        .cmd()
        .args(["--format", "records", "distance", "Gate", "Gym"])
        .assert()
        .success()
        .stdout("Gate,Gym,-1\n");

    let output = campus
        .cmd()
        .args(["--format", "json", "distance", "Gate", "Gym"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["reachable"], false);
    assert!(json["distance"].is_null());
}

#[test]
fn test_distance_unknown_location() {
    Campus::new()
        .cmd()
        .args(["distance", "Gate", "Observatory"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("vertex not found: Observatory"));
}

#[test]
fn test_route_in_order() {
    Campus::new()
        .cmd()
        .args(["route", "Gate", "Canteen", "Library"])
        .assert()
        .success()
        .stdout("Route length: 4\n");
}

#[test]
fn test_route_with_trace_json() {
    let output = Campus::new()
        .cmd()
        .args(["--format", "json", "route", "Gate", "Canteen", "Library", "--trace"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["distance"], 4);
    assert_eq!(
        json["path"],
        serde_json::json!(["Gate", "Dorm", "Canteen", "Library"])
    );
}

#[test]
fn test_route_single_stop_is_free() {
    Campus::new()
        .cmd()
        .args(["route", "Dorm"])
        .assert()
        .success()
        .stdout("Route length: 0\n");
}

#[test]
fn test_route_unknown_stop() {
    Campus::new()
        .cmd()
        .args(["route", "Gate", "Observatory", "Library"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Observatory"));
}
