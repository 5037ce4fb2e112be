//! Location (vertex) commands

use std::path::Path;

use campus_nav_core::error::Result;
use campus_nav_core::format::OutputFormat;
use campus_nav_core::graph::LocationInfo;
use campus_nav_core::records;
use serde::Serialize;
use serde_json::json;

use super::print_json;
use super::session::Session;

/// One row of `vertex list --format json`
#[derive(Serialize)]
struct VertexSummary<'a> {
    id: usize,
    name: &'a str,
    category: &'a str,
    visit_minutes: u32,
    degree: usize,
}

pub fn show(session: &Session, name: &str) -> Result<()> {
    let info = session.graph.get_vertex(name)?;
    let degree = session
        .graph
        .vertex_id(name)
        .map(|id| session.graph.degree(id))
        .unwrap_or(0);

    match session.format {
        OutputFormat::Human => {
            println!("Name: {}", info.name);
            println!("Category: {}", info.category);
            println!("Visit time: {} minutes", info.visit_minutes);
            println!("Connections: {}", degree);
        }
        OutputFormat::Json => print_json(&json!({
            "name": info.name,
            "category": info.category,
            "visit_minutes": info.visit_minutes,
            "degree": degree,
        }))?,
        OutputFormat::Records => {
            println!("{},{},{}", info.name, info.category, info.visit_minutes);
        }
    }
    Ok(())
}

pub fn list(session: &Session) -> Result<()> {
    let graph = &session.graph;
    match session.format {
        OutputFormat::Human => {
            if graph.is_empty() {
                if !session.quiet {
                    println!("No locations");
                }
                return Ok(());
            }
            for node in graph.vertices() {
                println!(
                    "{} ({}, {} min, {} connections)",
                    node.info.name,
                    node.info.category,
                    node.info.visit_minutes,
                    node.degree()
                );
            }
        }
        OutputFormat::Json => {
            let items: Vec<_> = graph
                .vertices()
                .iter()
                .enumerate()
                .map(|(id, node)| VertexSummary {
                    id,
                    name: &node.info.name,
                    category: &node.info.category,
                    visit_minutes: node.info.visit_minutes,
                    degree: node.degree(),
                })
                .collect();
            print_json(&serde_json::to_value(items)?)?;
        }
        OutputFormat::Records => print!("{}", records::format_nodes(graph)),
    }
    Ok(())
}

pub fn add(session: &mut Session, info: LocationInfo) -> Result<()> {
    let id = session.graph.insert_vertex(info.clone())?;
    session.report(
        &format!("Added location {}", info.name),
        json!({ "action": "vertex_added", "id": id, "name": info.name }),
    )
}

pub fn remove(session: &mut Session, name: &str) -> Result<()> {
    let before = session.graph.edge_count();
    let info = session.graph.delete_vertex(name)?;
    let dropped = before - session.graph.edge_count();
    session.report(
        &format!(
            "Removed location {} and {} connection(s)",
            info.name, dropped
        ),
        json!({ "action": "vertex_removed", "name": info.name, "edges_removed": dropped }),
    )
}

/// Change category and visit time; the name is kept
pub fn update(session: &mut Session, name: &str, category: &str, minutes: u32) -> Result<()> {
    session
        .graph
        .update_vertex(name, LocationInfo::new(name, category, minutes))?;
    session.report(
        &format!("Updated location {}", name),
        json!({
            "action": "vertex_updated",
            "name": name,
            "category": category,
            "visit_minutes": minutes,
        }),
    )
}

pub fn export(session: &Session, path: &Path) -> Result<()> {
    records::write_nodes(path, &session.graph)?;
    session.report(
        &format!(
            "Wrote {} location(s) to {}",
            session.graph.vertex_count(),
            path.display()
        ),
        json!({
            "action": "vertices_exported",
            "path": path.display().to_string(),
            "count": session.graph.vertex_count(),
        }),
    )
}
