//! Whole-graph analysis: connectivity, Eulerian tours and spanning trees

use campus_nav_core::error::{NavError, Result};
use campus_nav_core::format::OutputFormat;
use campus_nav_core::graph::{
    euler_circuit, euler_path, exist_euler_circuit, exist_euler_path, is_connected,
    minimum_spanning_tree, SpanningTree,
};
use serde_json::json;

use super::session::Session;
use super::{format_walk, print_json};

pub fn connected(session: &Session) -> Result<()> {
    let graph = &session.graph;
    let connected = is_connected(graph);
    match session.format {
        OutputFormat::Human => {
            if connected {
                println!("Graph is connected");
            } else {
                println!("Graph is not connected");
            }
        }
        OutputFormat::Json => print_json(&json!({
            "connected": connected,
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
        }))?,
        OutputFormat::Records => println!("connected,{}", connected),
    }
    Ok(())
}

/// Report Eulerian circuit/path existence, with the circuit from `start`
/// and optionally an open trail.
pub fn euler(session: &Session, start: Option<&str>, with_path: bool) -> Result<()> {
    let graph = &session.graph;
    let start_id = match start {
        Some(name) => graph
            .vertex_id(name)
            .ok_or_else(|| NavError::vertex_not_found(name))?,
        None => 0,
    };

    let circuit_exists = exist_euler_circuit(graph);
    let path_exists = exist_euler_path(graph);
    let circuit = if circuit_exists {
        euler_circuit(graph, start_id)?
    } else {
        Vec::new()
    };
    let trail = if with_path { euler_path(graph) } else { Vec::new() };

    let circuit_names = session.names(&circuit);
    let trail_names = session.names(&trail);

    match session.format {
        OutputFormat::Human => {
            println!(
                "Euler circuit: {}",
                if circuit_exists { "exists" } else { "none" }
            );
            println!("Euler path: {}", if path_exists { "exists" } else { "none" });
            if !circuit_names.is_empty() {
                println!("Circuit: {}", format_walk(&circuit_names));
            }
            if !trail_names.is_empty() {
                println!("Path: {}", format_walk(&trail_names));
            }
        }
        OutputFormat::Json => print_json(&json!({
            "circuit_exists": circuit_exists,
            "path_exists": path_exists,
            "circuit": circuit_names,
            "path": if with_path { json!(trail_names) } else { json!(null) },
        }))?,
        OutputFormat::Records => {
            println!("circuit_exists,{}", circuit_exists);
            println!("path_exists,{}", path_exists);
            if !circuit_names.is_empty() {
                println!("circuit,{}", circuit_names.join(","));
            }
            if !trail_names.is_empty() {
                println!("path,{}", trail_names.join(","));
            }
        }
    }
    Ok(())
}

pub fn mst(session: &Session) -> Result<()> {
    let graph = &session.graph;
    let tree = SpanningTree::from_edges(minimum_spanning_tree(graph));
    let spanning = !tree.edges.is_empty();

    match session.format {
        OutputFormat::Human => {
            if !spanning {
                if graph.vertex_count() < 2 {
                    println!("No spanning tree: fewer than two locations");
                } else {
                    println!("No spanning tree: graph is not connected");
                }
                return Ok(());
            }
            for edge in &tree.edges {
                println!(
                    "{} - {} : {}",
                    session.name(edge.from),
                    session.name(edge.to),
                    edge.weight
                );
            }
            println!("Total weight: {}", tree.total_weight);
        }
        OutputFormat::Json => {
            let edges: Vec<_> = tree
                .edges
                .iter()
                .map(|edge| {
                    json!({
                        "from": session.name(edge.from),
                        "to": session.name(edge.to),
                        "weight": edge.weight,
                    })
                })
                .collect();
            print_json(&json!({
                "spanning": spanning,
                "edges": edges,
                "total_weight": tree.total_weight,
            }))?;
        }
        OutputFormat::Records => {
            for edge in &tree.edges {
                println!(
                    "{},{},{}",
                    session.name(edge.from),
                    session.name(edge.to),
                    edge.weight
                );
            }
        }
    }
    Ok(())
}
