use serde::{Deserialize, Serialize};

/// Dense, 0-based vertex identifier. Contiguous after any deletion.
pub type VertexId = usize;

/// Travel cost of a single edge. Unsigned, so weights are never negative.
pub type Weight = u32;

/// Accumulated cost along a path
pub type Distance = u64;

/// Payload attached to every vertex
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationInfo {
    /// Unique key used by every name-addressed operation
    pub name: String,
    /// Free-form category ("library", "canteen", ...)
    pub category: String,
    /// Suggested visit duration in minutes
    pub visit_minutes: u32,
}

impl LocationInfo {
    pub fn new(name: impl Into<String>, category: impl Into<String>, visit_minutes: u32) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            visit_minutes,
        }
    }
}

/// One directed adjacency entry, or a canonical undirected edge when
/// returned from `sorted_edges` (then `from < to`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: Weight,
}

impl Edge {
    pub fn new(from: VertexId, to: VertexId, weight: Weight) -> Self {
        Self { from, to, weight }
    }

    /// The same edge seen from the other endpoint
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            weight: self.weight,
        }
    }
}

/// A vertex record: its payload plus its adjacency list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexNode {
    pub info: LocationInfo,
    pub adj: Vec<Edge>,
}

impl VertexNode {
    pub fn new(info: LocationInfo) -> Self {
        Self {
            info,
            adj: Vec::new(),
        }
    }

    pub fn degree(&self) -> usize {
        self.adj.len()
    }
}
