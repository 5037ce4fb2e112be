//! Delimited record ingestion and persistence
//!
//! Nodes are `name,category,minutes`; edges are `from,to,weight`.
//! Blank lines are skipped, and so are malformed lines (with a warning).

use std::fs;
use std::path::Path;
use std::time::Instant;

use tracing::warn;

use crate::error::{NavError, Result};
use crate::graph::{CampusGraph, LocationInfo, Weight};

/// An edge record, addressed by vertex names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRecord {
    pub from: String,
    pub to: String,
    pub weight: Weight,
}

/// Split a line into exactly three trimmed fields
fn split_fields(line: &str) -> Option<[&str; 3]> {
    let mut parts = line.splitn(3, ',').map(str::trim);
    let fields = [parts.next()?, parts.next()?, parts.next()?];
    if fields[0].is_empty() || fields[1].is_empty() {
        return None;
    }
    Some(fields)
}

fn parse_lines<T>(text: &str, source: &str, parse: impl Fn(&str) -> Option<T>) -> Vec<T> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(idx, line)| {
            let parsed = parse(line);
            if parsed.is_none() {
                warn!(source, line = idx + 1, content = line, "skipping malformed record");
            }
            parsed
        })
        .collect()
}

pub fn parse_node_line(line: &str) -> Option<LocationInfo> {
    let [name, category, minutes] = split_fields(line)?;
    let minutes = minutes.parse().ok()?;
    Some(LocationInfo::new(name, category, minutes))
}

pub fn parse_edge_line(line: &str) -> Option<EdgeRecord> {
    let [from, to, weight] = split_fields(line)?;
    let weight = weight.parse().ok()?;
    Some(EdgeRecord {
        from: from.to_string(),
        to: to.to_string(),
        weight,
    })
}

pub fn parse_nodes(text: &str) -> Vec<LocationInfo> {
    parse_lines(text, "nodes", parse_node_line)
}

pub fn parse_edges(text: &str) -> Vec<EdgeRecord> {
    parse_lines(text, "edges", parse_edge_line)
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| NavError::io_operation("read", path.display(), e))
}

pub fn read_nodes(path: &Path) -> Result<Vec<LocationInfo>> {
    Ok(parse_nodes(&read_file(path)?))
}

pub fn read_edges(path: &Path) -> Result<Vec<EdgeRecord>> {
    Ok(parse_edges(&read_file(path)?))
}

/// Build a graph from records, vertices first
pub fn build_graph(nodes: Vec<LocationInfo>, edges: &[EdgeRecord]) -> Result<CampusGraph> {
    let mut graph = CampusGraph::new();
    for info in nodes {
        graph.insert_vertex(info)?;
    }
    for edge in edges {
        graph.insert_edge(&edge.from, &edge.to, edge.weight)?;
    }
    Ok(graph)
}

/// Read both record files and build a fresh graph
#[tracing::instrument]
pub fn load_graph(nodes_path: &Path, edges_path: &Path) -> Result<CampusGraph> {
    let start = Instant::now();
    let nodes = read_nodes(nodes_path)?;
    let edges = read_edges(edges_path)?;
    let graph = build_graph(nodes, &edges)?;
    crate::trace_time!(
        start,
        "load_graph",
        vertices = graph.vertex_count(),
        edges = graph.edge_count()
    );
    Ok(graph)
}

/// Node records in identifier order
pub fn format_nodes(graph: &CampusGraph) -> String {
    graph
        .vertices()
        .iter()
        .map(|node| {
            let info = &node.info;
            format!("{},{},{}\n", info.name, info.category, info.visit_minutes)
        })
        .collect()
}

/// Edge records by vertex name, ascending by weight
pub fn format_edges(graph: &CampusGraph) -> String {
    let vertices = graph.vertices();
    graph
        .sorted_edges()
        .iter()
        .map(|e| {
            format!(
                "{},{},{}\n",
                vertices[e.from].info.name, vertices[e.to].info.name, e.weight
            )
        })
        .collect()
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| NavError::io_operation("create directory", parent.display(), e))?;
    }
    fs::write(path, content).map_err(|e| NavError::io_operation("write", path.display(), e))
}

pub fn write_nodes(path: &Path, graph: &CampusGraph) -> Result<()> {
    write_file(path, &format_nodes(graph))
}

pub fn write_edges(path: &Path, graph: &CampusGraph) -> Result<()> {
    write_file(path, &format_edges(graph))
}
