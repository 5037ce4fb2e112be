//! Connection (edge) commands

use std::path::Path;

use campus_nav_core::error::Result;
use campus_nav_core::format::OutputFormat;
use campus_nav_core::graph::Weight;
use campus_nav_core::records;
use serde_json::json;

use super::print_json;
use super::session::Session;

pub fn show(session: &Session, from: &str, to: &str) -> Result<()> {
    let weight = session.graph.get_edge(from, to)?;
    match session.format {
        OutputFormat::Human => println!("{} <-> {}: {}", from, to, weight),
        OutputFormat::Json => print_json(&json!({ "from": from, "to": to, "weight": weight }))?,
        OutputFormat::Records => println!("{},{},{}", from, to, weight),
    }
    Ok(())
}

pub fn list(session: &Session) -> Result<()> {
    let graph = &session.graph;
    let edges = graph.sorted_edges();
    match session.format {
        OutputFormat::Human => {
            if edges.is_empty() {
                if !session.quiet {
                    println!("No connections");
                }
                return Ok(());
            }
            for edge in &edges {
                println!(
                    "{} <-> {}: {}",
                    session.name(edge.from),
                    session.name(edge.to),
                    edge.weight
                );
            }
        }
        OutputFormat::Json => {
            let items: Vec<_> = edges
                .iter()
                .map(|edge| {
                    json!({
                        "from": session.name(edge.from),
                        "to": session.name(edge.to),
                        "weight": edge.weight,
                    })
                })
                .collect();
            print_json(&json!(items))?;
        }
        OutputFormat::Records => print!("{}", records::format_edges(graph)),
    }
    Ok(())
}

pub fn add(session: &mut Session, from: &str, to: &str, weight: Weight) -> Result<()> {
    session.graph.insert_edge(from, to, weight)?;
    session.report(
        &format!("Connected {} and {} ({})", from, to, weight),
        json!({ "action": "edge_added", "from": from, "to": to, "weight": weight }),
    )
}

pub fn remove(session: &mut Session, from: &str, to: &str) -> Result<()> {
    session.graph.delete_edge(from, to)?;
    session.report(
        &format!("Disconnected {} and {}", from, to),
        json!({ "action": "edge_removed", "from": from, "to": to }),
    )
}

pub fn update(session: &mut Session, from: &str, to: &str, weight: Weight) -> Result<()> {
    session.graph.update_edge(from, to, weight)?;
    session.report(
        &format!("Set {} <-> {} to {}", from, to, weight),
        json!({ "action": "edge_updated", "from": from, "to": to, "weight": weight }),
    )
}

pub fn export(session: &Session, path: &Path) -> Result<()> {
    records::write_edges(path, &session.graph)?;
    session.report(
        &format!(
            "Wrote {} connection(s) to {}",
            session.graph.edge_count(),
            path.display()
        ),
        json!({
            "action": "edges_exported",
            "path": path.display().to_string(),
            "count": session.graph.edge_count(),
        }),
    )
}
