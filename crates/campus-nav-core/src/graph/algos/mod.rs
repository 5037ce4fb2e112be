//! Graph algorithm implementations
//!
//! Contains the query algorithms that run against a read-only graph:
//! - `dijkstra`: single-pair shortest distance, traced paths, multi-stop routes
//! - `mst`: Kruskal minimum spanning tree

pub mod dijkstra;
pub mod mst;

pub use dijkstra::{
    shortest_distance, shortest_path_with_trace, topological_route, topological_shortest_path,
    Route,
};
pub use mst::{minimum_spanning_tree, SpanningTree};
