//! All data types for the weighted-graph library.

pub mod edge;
pub mod error;
pub mod node;
pub mod path;

use serde::Serialize;

pub use edge::Edge;
pub use error::{GraphError, GraphResult};
pub use node::Node;
pub use path::Path;

/// Weight stored on a single directed adjacency entry.
pub type Weight = u32;

/// Accumulated cost along a path (sum of weights).
pub type Cost = u64;

/// Handle to a node inside the graph that created it.
///
/// A handle pairs the issuing graph's identity with a dense index into its
/// node arena, assigned in creation order. Graphs reject handles they did not
/// issue, even when the index is in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct NodeId {
    #[serde(skip)]
    pub(crate) graph: u64,
    pub(crate) index: usize,
}

impl NodeId {
    pub(crate) fn new(graph: u64, index: usize) -> Self {
        Self { graph, index }
    }

    /// The arena index behind this handle.
    pub fn index(self) -> usize {
        self.index
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.index)
    }
}
