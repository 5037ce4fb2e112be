//! Kruskal minimum spanning tree

use serde::Serialize;

use crate::graph::dsu::DisjointSet;
use crate::graph::store::CampusGraph;
use crate::graph::types::{Distance, Edge};

/// Edges of a spanning tree with their summed weight
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpanningTree {
    pub edges: Vec<Edge>,
    pub total_weight: Distance,
}

impl SpanningTree {
    pub fn from_edges(edges: Vec<Edge>) -> Self {
        let total_weight = edges.iter().map(|e| Distance::from(e.weight)).sum();
        Self {
            edges,
            total_weight,
        }
    }
}

/// Minimum spanning tree by Kruskal's algorithm.
///
/// Returns exactly `n - 1` edges, or nothing at all when the graph is
/// disconnected or has fewer than two vertices.
#[tracing::instrument(
    skip(graph),
    fields(vertices = graph.vertex_count(), edges = graph.edge_count())
)]
pub fn minimum_spanning_tree(graph: &CampusGraph) -> Vec<Edge> {
    let n = graph.vertex_count();
    if n < 2 {
        return Vec::new();
    }

    let mut dsu = DisjointSet::new(n);
    let mut tree = Vec::with_capacity(n - 1);
    for edge in graph.sorted_edges() {
        if dsu.union(edge.from, edge.to) {
            tree.push(edge);
            if tree.len() == n - 1 {
                break;
            }
        }
    }

    if tree.len() != n - 1 {
        tracing::debug!(accepted = tree.len(), "graph has no spanning tree");
        return Vec::new();
    }
    tree
}
