//! Location graph store and algorithms
//!
//! Provides the undirected, weighted campus graph and the queries run on it:
//! - `store`: vertex/edge CRUD over a dense adjacency list
//! - `dsu`: union-find used by connectivity checks and Kruskal
//! - `euler`: connectivity and Eulerian circuit/path analysis
//! - `algos`: Dijkstra shortest paths and the minimum spanning tree

pub mod algos;
pub mod dsu;
pub mod euler;
pub mod store;
pub mod types;

pub use algos::{
    minimum_spanning_tree, shortest_distance, shortest_path_with_trace,
    topological_route, topological_shortest_path, Route, SpanningTree,
};
pub use dsu::DisjointSet;
pub use euler::{
    euler_circuit, euler_path, exist_euler_circuit, exist_euler_path, is_connected,
    odd_degree_vertices,
};
pub use store::CampusGraph;
pub use types::{Distance, Edge, LocationInfo, VertexId, VertexNode, Weight};

#[cfg(test)]
pub(crate) mod test_support;
