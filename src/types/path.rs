//! Frontier entries for shortest-path search.

use std::cmp::Ordering;

use super::{Cost, NodeId};

/// A destination reached at some accumulated cost, ordered by ascending cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Path {
    /// Node at the end of the path.
    pub destination: NodeId,
    /// Total weight from the start node.
    pub cost: Cost,
}

impl Path {
    /// Create a new path entry.
    pub fn new(destination: NodeId, cost: Cost) -> Self {
        Self { destination, cost }
    }
}

impl Ord for Path {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .cmp(&other.cost)
            .then(self.destination.cmp(&other.destination))
    }
}

impl PartialOrd for Path {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
