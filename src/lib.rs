//! weighted-graph — an in-memory directed, weighted graph with classic algorithms.
//!
//! Nodes are created by name and wired with weighted edges; the graph then
//! answers breadth-first and depth-first traversals, single-source shortest
//! paths (Dijkstra) and minimum spanning trees (Prim–Jarnik).

pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{Graph, GraphBuilder, NodeVisitor, ShortestPaths, SpanningTree};
pub use types::{Cost, Edge, GraphError, GraphResult, Node, NodeId, Path, Weight};
