//! Candidate edges on the spanning-tree frontier.

use std::cmp::Ordering;

use serde::Serialize;

use super::{NodeId, Weight};

/// A directed edge candidate, ordered by ascending cost.
///
/// Ties are broken by `start` then `end` so heap order is reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    /// Endpoint already inside the tree when the edge was discovered.
    pub start: NodeId,
    /// Endpoint on the far side.
    pub end: NodeId,
    /// Weight of the edge.
    pub cost: Weight,
}

impl Edge {
    /// Create a new edge candidate.
    pub fn new(start: NodeId, end: NodeId, cost: Weight) -> Self {
        Self { start, end, cost }
    }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .cmp(&other.cost)
            .then(self.start.cmp(&other.start))
            .then(self.end.cmp(&other.end))
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
