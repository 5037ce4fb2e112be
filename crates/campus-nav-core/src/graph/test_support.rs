//! Graph fixtures shared by the unit tests

use super::{CampusGraph, LocationInfo, Weight};

/// Build a graph from vertex names and `(from, to, weight)` triples
pub fn graph_from(names: &[&str], edges: &[(&str, &str, Weight)]) -> CampusGraph {
    let mut graph = CampusGraph::new();
    for name in names {
        graph
            .insert_vertex(LocationInfo::new(*name, "spot", 10))
            .unwrap();
    }
    for (u, v, w) in edges {
        graph.insert_edge(u, v, *w).unwrap();
    }
    graph
}

/// A-B(1), B-C(2), C-D(1), D-A(1), A-C(5): connected, A and C odd
pub fn diamond() -> CampusGraph {
    graph_from(
        &["A", "B", "C", "D"],
        &[
            ("A", "B", 1),
            ("B", "C", 2),
            ("C", "D", 1),
            ("D", "A", 1),
            ("A", "C", 5),
        ],
    )
}
