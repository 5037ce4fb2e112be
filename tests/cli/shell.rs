use crate::support::{Campus, EDGES, NODES};
use predicates::prelude::*;

// ============================================================================
// Interactive shell and batch runner tests
// ============================================================================

#[test]
fn test_shell_reports_errors_and_continues() {
    Campus::new()
        .cmd()
        .arg("shell")
        .write_stdin("bogus\ndistance Gate Canteen\nquit\ndistance Gate Library\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("campus-nav> "))
        .stdout(predicate::str::contains(
            "Shortest distance from Gate to Canteen: 2",
        ))
        .stdout(predicate::str::contains("Gate to Library").not())
        .stderr(predicate::str::contains("unrecognized command: bogus"));
}

#[test]
fn test_shell_ends_at_end_of_input() {
    Campus::new()
        .cmd()
        .arg("shell")
        .write_stdin("help\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("eulerpath"));
}

#[test]
fn test_shell_mutations_stay_in_memory() {
    let campus = Campus::new();

    campus
        .cmd()
        .arg("shell")
        .write_stdin("edge remove Gate Canteen\nedge list\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Gate <-> Canteen").not());

    assert_eq!(campus.read("data/edges.csv"), EDGES);
}

#[test]
fn test_shell_reload_discards_changes() {
    Campus::new()
        .cmd()
        .arg("shell")
        .write_stdin("edge remove Gate Canteen\nreload\nedge get Gate Canteen\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Reloaded 4 location(s) and 5 connection(s)",
        ))
        .stdout(predicate::str::contains("Gate <-> Canteen: 5"));
}

#[test]
fn test_batch_runs_script_and_saves() {
    let campus = Campus::new();
    campus.write(
        "script.txt",
        "# add a gym next to the dorm\n\
         vertex add Gym sports 30\n\
         edge add Gym Dorm 2\n\
         \n\
         distance Gate Gym\n\
         edge add Gym Nowhere 1\n\
         mst\n\
         save\n",
    );

    campus
        .cmd()
        .args(["batch", "script.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added location Gym"))
        .stdout(predicate::str::contains("Shortest distance from Gate to Gym: 3"))
        .stdout(predicate::str::contains("Total weight: 5"))
        .stderr(predicate::str::contains(
            "error: line 6: vertex not found: Nowhere",
        ));

    assert!(campus.read("test_nodes.csv").ends_with("Gym,sports,30\n"));
    assert!(campus.read("test_edges.csv").contains("Gym,Dorm,2\n"));
    assert_eq!(campus.read("data/nodes.csv"), NODES);
}

#[test]
fn test_batch_save_to_named_files() {
    let campus = Campus::new();
    campus.write(
        "script.txt",
        "edge update Gate Canteen 4\nsave n.csv e.csv\n",
    );

    campus
        .cmd()
        .current_dir(std::env::temp_dir())
        .args(["--quiet", "batch", "script.txt"])
        .assert()
        .success()
        .stdout("");

    // save targets are relative to the root
    assert!(campus.read("e.csv").ends_with("Gate,Canteen,4\n"));
    assert_eq!(campus.read("n.csv"), NODES);
}

#[test]
fn test_batch_missing_file() {
    Campus::new()
        .cmd()
        .args(["batch", "missing.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read"));
}
