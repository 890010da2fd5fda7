//! Error types for the weighted-graph library.

use thiserror::Error;

use super::NodeId;

/// All errors that can occur in the weighted-graph library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Node handle does not belong to this graph.
    #[error("Node {0} does not belong to this graph")]
    InvalidNode(NodeId),

    /// Weight requested for a node that is not adjacent.
    #[error("No edge from node {from} to node {to}")]
    EdgeNotFound { from: NodeId, to: NodeId },

    /// Some nodes could not be reached from the start node.
    #[error("{} node(s) unreachable from '{start}': {}", .missing.len(), .missing.join(", "))]
    Unreachable { start: String, missing: Vec<String> },

    /// Edge argument could not be parsed.
    #[error("Invalid edge spec: {0}")]
    InvalidEdgeSpec(String),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
