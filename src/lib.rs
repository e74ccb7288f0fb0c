//! Smart-city graph engine
//!
//! This library implements the algorithmic core of a smart-city infrastructure
//! planner: minimum-cost wiring across disconnected building clusters (lazy
//! Prim minimum spanning forest), shortest travel distance on a weighted road
//! network (Dijkstra), and circular-route detection with a linear ordering
//! when none exists (three-color DFS cycle detection + topological sort).
//!
//! Nodes are opaque labels and connections are entered undirected, stored as a
//! pair of directed arcs. Each computation owns its own graph; no state is
//! shared between invocations.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::Dijkstra, prim::LazyPrim, toposort::TopoSort, ForestEdge, ShortestPaths,
    SpanningForest, TopoResult,
};
/// Re-export main types for convenient use
pub use graph::adjacency::{AdjacencyGraph, Edge};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Source node not found in graph")]
    SourceNotFound,
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
