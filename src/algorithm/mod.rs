pub mod dijkstra;
pub mod prim;
pub mod toposort;

pub use dijkstra::{Dijkstra, ShortestPaths};
pub use prim::{ForestEdge, LazyPrim, SpanningForest};
pub use toposort::{TopoResult, TopoSort};
