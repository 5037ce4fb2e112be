//! Dijkstra shortest paths over the campus graph
//!
//! Weights are unsigned, so the non-negative precondition holds by type.
//! Every name-addressed query fails with `VertexNotFound` for an unknown
//! name; `None` always means "unreachable".

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use serde::Serialize;

use crate::error::{NavError, Result};
use crate::graph::store::CampusGraph;
use crate::graph::types::{Distance, VertexId};

/// Frontier entry, ordered by tentative distance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapEntry {
    pub vertex: VertexId,
    pub distance: Distance,
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// A traced shortest path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub distance: Distance,
    /// Visited vertices from source to target, both included
    pub vertices: Vec<VertexId>,
}

/// State tracked during one Dijkstra run
struct DijkstraState {
    dist: Vec<Option<Distance>>,
    pred: Vec<Option<VertexId>>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
}

impl DijkstraState {
    fn new(n: usize, trace: bool) -> Self {
        Self {
            dist: vec![None; n],
            pred: if trace { vec![None; n] } else { Vec::new() },
            heap: BinaryHeap::new(),
        }
    }

    fn relax(&mut self, from: VertexId, to: VertexId, candidate: Distance) {
        if self.dist[to].is_some_and(|best| best <= candidate) {
            return;
        }
        self.dist[to] = Some(candidate);
        if let Some(slot) = self.pred.get_mut(to) {
            *slot = Some(from);
        }
        self.heap.push(Reverse(HeapEntry {
            vertex: to,
            distance: candidate,
        }));
    }

    /// Walk predecessors back from `target` and return the path source-first
    fn reconstruct(&self, source: VertexId, target: VertexId) -> Vec<VertexId> {
        let mut path = vec![target];
        let mut current = target;
        while current != source {
            match self.pred[current] {
                Some(prev) => {
                    path.push(prev);
                    current = prev;
                }
                None => break,
            }
        }
        path.reverse();
        path
    }
}

/// Run Dijkstra from `source`, stopping once `target` is finalized
fn run(graph: &CampusGraph, source: VertexId, target: VertexId, trace: bool) -> DijkstraState {
    let mut state = DijkstraState::new(graph.vertex_count(), trace);
    state.dist[source] = Some(0);
    state.heap.push(Reverse(HeapEntry {
        vertex: source,
        distance: 0,
    }));

    while let Some(Reverse(HeapEntry { vertex, distance })) = state.heap.pop() {
        if state.dist[vertex].is_some_and(|best| distance > best) {
            continue;
        }
        if vertex == target {
            break;
        }
        for edge in graph.neighbors(vertex) {
            state.relax(vertex, edge.to, distance + Distance::from(edge.weight));
        }
    }

    state
}

fn resolve(graph: &CampusGraph, name: &str) -> Result<VertexId> {
    graph
        .vertex_id(name)
        .ok_or_else(|| NavError::vertex_not_found(name))
}

/// Shortest distance between two named vertices, `None` if unreachable
#[tracing::instrument(skip(graph))]
pub fn shortest_distance(graph: &CampusGraph, from: &str, to: &str) -> Result<Option<Distance>> {
    let source = resolve(graph, from)?;
    let target = resolve(graph, to)?;
    Ok(run(graph, source, target, false).dist[target])
}

/// Shortest distance plus the vertices walked, `None` if unreachable
#[tracing::instrument(skip(graph))]
pub fn shortest_path_with_trace(
    graph: &CampusGraph,
    from: &str,
    to: &str,
) -> Result<Option<Route>> {
    let source = resolve(graph, from)?;
    let target = resolve(graph, to)?;
    let state = run(graph, source, target, true);

    Ok(state.dist[target].map(|distance| Route {
        distance,
        vertices: state.reconstruct(source, target),
    }))
}

fn resolve_stops<S: AsRef<str>>(graph: &CampusGraph, stops: &[S]) -> Result<Vec<VertexId>> {
    stops
        .iter()
        .map(|stop| resolve(graph, stop.as_ref()))
        .collect()
}

/// Total distance visiting `stops` in the given order.
///
/// Every stop is validated before any search runs. An empty or single-stop
/// list costs 0; any unreachable leg makes the whole route `None`.
#[tracing::instrument(skip(graph, stops), fields(stops = stops.len()))]
pub fn topological_shortest_path<S: AsRef<str>>(
    graph: &CampusGraph,
    stops: &[S],
) -> Result<Option<Distance>> {
    let ids = resolve_stops(graph, stops)?;
    let mut total: Distance = 0;
    for leg in ids.windows(2) {
        match run(graph, leg[0], leg[1], false).dist[leg[1]] {
            Some(distance) => total += distance,
            None => return Ok(None),
        }
    }
    Ok(Some(total))
}

/// Like [`topological_shortest_path`], also returning the full walk.
///
/// Consecutive legs share their joining stop once in `vertices`.
#[tracing::instrument(skip(graph, stops), fields(stops = stops.len()))]
pub fn topological_route<S: AsRef<str>>(graph: &CampusGraph, stops: &[S]) -> Result<Option<Route>> {
    let ids = resolve_stops(graph, stops)?;
    let mut route = Route {
        distance: 0,
        vertices: ids.first().copied().into_iter().collect(),
    };

    for leg in ids.windows(2) {
        let state = run(graph, leg[0], leg[1], true);
        let Some(distance) = state.dist[leg[1]] else {
            return Ok(None);
        };
        route.distance += distance;
        route
            .vertices
            .extend(state.reconstruct(leg[0], leg[1]).into_iter().skip(1));
    }
    Ok(Some(route))
}
