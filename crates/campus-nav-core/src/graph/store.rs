//! In-memory location graph
//!
//! Every undirected edge is stored as two mirrored adjacency entries, one per
//! endpoint, carrying the same weight. Vertex identifiers are dense: deleting
//! a vertex shifts every larger identifier down by one.
//!
//! The store has no internal locking. Callers serialize access: a single
//! writer, and no readers while a mutation is in progress.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{NavError, Result};
use crate::graph::types::{Edge, LocationInfo, VertexId, VertexNode, Weight};

/// Undirected, weighted graph of named locations
#[derive(Debug, Clone, Default)]
pub struct CampusGraph {
    vertices: Vec<VertexNode>,
    names: BTreeMap<String, VertexId>,
    /// Counted once per undirected edge
    edge_count: usize,
}

impl CampusGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Discard every vertex and edge
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.names.clear();
        self.edge_count = 0;
    }

    /// Vertex records in identifier order
    pub fn vertices(&self) -> &[VertexNode] {
        &self.vertices
    }

    /// Name to identifier map, ordered by name
    pub fn names(&self) -> &BTreeMap<String, VertexId> {
        &self.names
    }

    pub fn vertex_id(&self, name: &str) -> Option<VertexId> {
        self.names.get(name).copied()
    }

    fn require_id(&self, name: &str) -> Result<VertexId> {
        self.vertex_id(name).ok_or_else(|| NavError::vertex_not_found(name))
    }

    fn require_pair(&self, u: &str, v: &str) -> Result<(VertexId, VertexId)> {
        Ok((self.require_id(u)?, self.require_id(v)?))
    }

    /// Adjacency entries of `id`; empty for an unknown identifier
    pub fn neighbors(&self, id: VertexId) -> &[Edge] {
        self.vertices
            .get(id)
            .map(|node| node.adj.as_slice())
            .unwrap_or(&[])
    }

    pub fn degree(&self, id: VertexId) -> usize {
        self.neighbors(id).len()
    }

    fn position(&self, from: VertexId, to: VertexId) -> Option<usize> {
        self.vertices[from].adj.iter().position(|e| e.to == to)
    }

    pub fn exist_vertex(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    pub fn exist_edge(&self, u: &str, v: &str) -> bool {
        match (self.vertex_id(u), self.vertex_id(v)) {
            (Some(uid), Some(vid)) => self.position(uid, vid).is_some(),
            _ => false,
        }
    }

    /// Append a vertex and return its identifier
    pub fn insert_vertex(&mut self, info: LocationInfo) -> Result<VertexId> {
        check_field("name", &info.name)?;
        check_field("category", &info.category)?;
        if self.exist_vertex(&info.name) {
            return Err(NavError::DuplicateVertex { name: info.name });
        }

        let id = self.vertices.len();
        debug!(name = %info.name, id, "insert_vertex");
        self.names.insert(info.name.clone(), id);
        self.vertices.push(VertexNode::new(info));
        Ok(id)
    }

    /// Remove a vertex with all incident edges and compact the id space.
    ///
    /// Returns the payload of the removed vertex.
    pub fn delete_vertex(&mut self, name: &str) -> Result<LocationInfo> {
        let id = self.require_id(name)?;

        let incident: Vec<VertexId> = self.vertices[id].adj.iter().map(|e| e.to).collect();
        for &other in &incident {
            self.vertices[other].adj.retain(|e| e.to != id);
        }
        self.edge_count -= incident.len();

        let removed = self.vertices.remove(id);
        self.names.remove(name);

        for slot in self.names.values_mut() {
            if *slot > id {
                *slot -= 1;
            }
        }
        for node in &mut self.vertices {
            for edge in &mut node.adj {
                if edge.from > id {
                    edge.from -= 1;
                }
                if edge.to > id {
                    edge.to -= 1;
                }
            }
        }

        debug!(name, id, removed_edges = incident.len(), "delete_vertex");
        Ok(removed.info)
    }

    /// Replace the category and visit duration of a vertex.
    ///
    /// The stored name and identifier never change; `info.name` is ignored.
    pub fn update_vertex(&mut self, old_name: &str, info: LocationInfo) -> Result<()> {
        let id = self.require_id(old_name)?;
        check_field("category", &info.category)?;
        let slot = &mut self.vertices[id].info;
        slot.category = info.category;
        slot.visit_minutes = info.visit_minutes;
        debug!(name = old_name, id, "update_vertex");
        Ok(())
    }

    pub fn get_vertex(&self, name: &str) -> Result<&LocationInfo> {
        let id = self.require_id(name)?;
        Ok(&self.vertices[id].info)
    }

    pub fn get_vertex_by_id(&self, id: VertexId) -> Result<&LocationInfo> {
        self.vertices
            .get(id)
            .map(|node| &node.info)
            .ok_or(NavError::IdOutOfRange { id })
    }

    /// Connect two vertices with an undirected edge
    pub fn insert_edge(&mut self, u: &str, v: &str, weight: Weight) -> Result<()> {
        let (uid, vid) = self.require_pair(u, v)?;
        if uid == vid {
            return Err(NavError::SelfLoop {
                name: u.to_string(),
            });
        }
        if self.position(uid, vid).is_some() {
            return Err(NavError::DuplicateEdge {
                from: u.to_string(),
                to: v.to_string(),
            });
        }

        let edge = Edge::new(uid, vid, weight);
        self.vertices[uid].adj.push(edge);
        self.vertices[vid].adj.push(edge.reversed());
        self.edge_count += 1;
        debug!(from = u, to = v, weight, "insert_edge");
        Ok(())
    }

    pub fn delete_edge(&mut self, u: &str, v: &str) -> Result<()> {
        let (uid, vid) = self.require_pair(u, v)?;
        if self.position(uid, vid).is_none() {
            return Err(NavError::edge_not_found(u, v));
        }
        self.remove_pair(uid, vid);
        debug!(from = u, to = v, "delete_edge");
        Ok(())
    }

    /// Identifier-addressed variant of [`CampusGraph::delete_edge`]
    pub fn delete_edge_by_id(&mut self, u: VertexId, v: VertexId) -> Result<()> {
        let from = self.get_vertex_by_id(u)?.name.clone();
        let to = self.get_vertex_by_id(v)?.name.clone();
        if self.position(u, v).is_none() {
            return Err(NavError::edge_not_found(from, to));
        }
        self.remove_pair(u, v);
        debug!(from = %from, to = %to, "delete_edge");
        Ok(())
    }

    fn remove_pair(&mut self, uid: VertexId, vid: VertexId) {
        self.vertices[uid].adj.retain(|e| e.to != vid);
        self.vertices[vid].adj.retain(|e| e.to != uid);
        self.edge_count -= 1;
    }

    /// Change the weight of an edge on both of its adjacency entries
    pub fn update_edge(&mut self, u: &str, v: &str, weight: Weight) -> Result<()> {
        let (uid, vid) = self.require_pair(u, v)?;
        let (Some(forward), Some(backward)) = (self.position(uid, vid), self.position(vid, uid))
        else {
            return Err(NavError::edge_not_found(u, v));
        };

        self.vertices[uid].adj[forward].weight = weight;
        self.vertices[vid].adj[backward].weight = weight;
        debug!(from = u, to = v, weight, "update_edge");
        Ok(())
    }

    pub fn get_edge(&self, u: &str, v: &str) -> Result<Weight> {
        let (uid, vid) = self.require_pair(u, v)?;
        self.position(uid, vid)
            .map(|pos| self.vertices[uid].adj[pos].weight)
            .ok_or_else(|| NavError::edge_not_found(u, v))
    }

    /// Each undirected edge once, `from < to`, ascending by weight
    pub fn sorted_edges(&self) -> Vec<Edge> {
        self.sorted_edges_by(|a, b| a.cmp(b))
    }

    /// Each undirected edge once, `from < to`, ordered by `cmp` on the weight.
    ///
    /// Equal weights fall back to `(from, to)` order.
    pub fn sorted_edges_by<F>(&self, cmp: F) -> Vec<Edge>
    where
        F: Fn(&Weight, &Weight) -> Ordering,
    {
        let mut edges: Vec<Edge> = self
            .vertices
            .iter()
            .enumerate()
            .flat_map(|(u, node)| node.adj.iter().filter(move |e| u < e.to))
            .copied()
            .collect();
        edges.sort_by(|a, b| {
            cmp(&a.weight, &b.weight).then_with(|| (a.from, a.to).cmp(&(b.from, b.to)))
        });
        edges
    }
}

/// Names and categories are written as comma-separated record fields and
/// must read back unchanged: non-empty, untrimmed, no comma or line break.
fn check_field(context: &str, value: &str) -> Result<()> {
    if value.is_empty() || value.trim() != value || value.contains([',', '\n', '\r']) {
        crate::bail_invalid!(context, format!("{value:?}"));
    }
    Ok(())
}
