//! In-memory graph operations — the core data structure and its algorithms.

pub mod builder;
pub mod shortest_path;
pub mod spanning_tree;
pub mod traversal;
pub mod weighted_graph;

pub use builder::GraphBuilder;
pub use shortest_path::ShortestPaths;
pub use spanning_tree::SpanningTree;
pub use traversal::NodeVisitor;
pub use weighted_graph::Graph;
