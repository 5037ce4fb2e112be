//! Disjoint-set union with path compression and union by size

use crate::graph::types::VertexId;

/// Tracks which vertices share a connected component
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<VertexId>,
    size: Vec<usize>,
}

impl DisjointSet {
    /// `n` singleton components `0..n`
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Representative of `x`'s component.
    ///
    /// Every node on the walk is re-pointed straight at the root.
    pub fn find(&mut self, x: VertexId) -> VertexId {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merge the components of `x` and `y`.
    ///
    /// Returns `false` when they were already joined.
    pub fn union(&mut self, x: VertexId, y: VertexId) -> bool {
        let (mut rx, mut ry) = (self.find(x), self.find(y));
        if rx == ry {
            return false;
        }
        if self.size[rx] < self.size[ry] {
            std::mem::swap(&mut rx, &mut ry);
        }
        self.parent[ry] = rx;
        self.size[rx] += self.size[ry];
        true
    }

    pub fn connected(&mut self, x: VertexId, y: VertexId) -> bool {
        self.find(x) == self.find(y)
    }
}
