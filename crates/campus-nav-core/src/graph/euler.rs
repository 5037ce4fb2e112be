//! Connectivity and Eulerian circuit/path analysis

use crate::error::{NavError, Result};
use crate::graph::dsu::DisjointSet;
use crate::graph::store::CampusGraph;
use crate::graph::types::VertexId;

/// Whether every vertex lies in one component and none is isolated.
///
/// A graph with no vertices is connected.
#[tracing::instrument(
    skip(graph),
    fields(vertices = graph.vertex_count(), edges = graph.edge_count())
)]
pub fn is_connected(graph: &CampusGraph) -> bool {
    let n = graph.vertex_count();
    if n == 0 {
        return true;
    }

    let mut dsu = DisjointSet::new(n);
    for (u, node) in graph.vertices().iter().enumerate() {
        for edge in node.adj.iter().filter(|e| u < e.to) {
            dsu.union(u, edge.to);
        }
    }

    let root = dsu.find(0);
    (0..n).all(|v| graph.degree(v) > 0 && dsu.find(v) == root)
}

/// Vertices with an odd number of incident edges, in id order
pub fn odd_degree_vertices(graph: &CampusGraph) -> Vec<VertexId> {
    (0..graph.vertex_count())
        .filter(|&v| graph.degree(v) % 2 == 1)
        .collect()
}

/// Connected and every degree even
pub fn exist_euler_circuit(graph: &CampusGraph) -> bool {
    is_connected(graph) && odd_degree_vertices(graph).is_empty()
}

/// Connected with zero (closed) or exactly two (open) odd-degree vertices
pub fn exist_euler_path(graph: &CampusGraph) -> bool {
    is_connected(graph) && matches!(odd_degree_vertices(graph).len(), 0 | 2)
}

/// Vertex order of an Eulerian circuit that starts and ends at `start`.
///
/// Returns an empty sequence when the graph has no circuit.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn euler_circuit(graph: &CampusGraph, start: VertexId) -> Result<Vec<VertexId>> {
    if graph.is_empty() {
        return Ok(Vec::new());
    }
    if start >= graph.vertex_count() {
        return Err(NavError::InvalidVertex { id: start });
    }
    if !exist_euler_circuit(graph) {
        return Ok(Vec::new());
    }
    Ok(hierholzer(graph, start))
}

/// Vertex order of an Eulerian path.
///
/// With two odd vertices the walk runs from the lower-id one to the other;
/// with none it is the circuit from vertex 0. Otherwise the result is empty.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn euler_path(graph: &CampusGraph) -> Vec<VertexId> {
    if graph.is_empty() || !is_connected(graph) {
        return Vec::new();
    }
    match odd_degree_vertices(graph).as_slice() {
        [] => hierholzer(graph, 0),
        [first, _] => hierholzer(graph, *first),
        _ => Vec::new(),
    }
}

/// Slot of the directed token for walking `u -> v` along edge `eid`
fn token(u: VertexId, v: VertexId, eid: usize) -> usize {
    2 * eid + usize::from(v < u)
}

/// Iterative Hierholzer walk. The caller guarantees a tour exists from `start`.
fn hierholzer(graph: &CampusGraph, start: VertexId) -> Vec<VertexId> {
    let n = graph.vertex_count();

    // each undirected edge gets one id shared by its two directed tokens
    let mut adj: Vec<Vec<(VertexId, usize)>> = vec![Vec::new(); n];
    let mut edge_total = 0;
    for (u, node) in graph.vertices().iter().enumerate() {
        for edge in node.adj.iter().filter(|e| u < e.to) {
            adj[u].push((edge.to, edge_total));
            adj[edge.to].push((u, edge_total));
            edge_total += 1;
        }
    }

    let mut used = vec![false; 2 * edge_total];
    let mut cursor = vec![0usize; n];
    let mut stack = vec![start];
    let mut tour = Vec::with_capacity(edge_total + 1);

    while let Some(&u) = stack.last() {
        let next = &mut cursor[u];
        while let Some(&(v, eid)) = adj[u].get(*next) {
            if !used[token(u, v, eid)] {
                break;
            }
            *next += 1;
        }

        match adj[u].get(*next) {
            None => {
                stack.pop();
                tour.push(u);
            }
            Some(&(v, eid)) => {
                used[2 * eid] = true;
                used[2 * eid + 1] = true;
                stack.push(v);
            }
        }
    }

    tour.reverse();
    tour
}
