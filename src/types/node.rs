//! Named vertex with weighted outgoing adjacency.

use std::collections::HashMap;

use super::{GraphError, GraphResult, NodeId, Weight};

/// A named vertex in a [`Graph`](crate::graph::Graph).
///
/// Adjacency is kept in insertion order so traversals are reproducible: the
/// first time an edge to a neighbor is added fixes its position, and later
/// re-insertions only overwrite the weight.
#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    name: String,
    /// Outgoing entries in insertion order.
    adjacency: Vec<(NodeId, Weight)>,
    /// Neighbor -> position in `adjacency`.
    positions: HashMap<NodeId, usize>,
}

impl Node {
    pub(crate) fn new(id: NodeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            adjacency: Vec::new(),
            positions: HashMap::new(),
        }
    }

    /// Handle of this node within its graph.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The node's unique name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Neighbors reachable over one outgoing edge, in insertion order.
    pub fn neighbors(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.iter().map(|&(id, _)| id)
    }

    /// Outgoing `(neighbor, weight)` entries, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, Weight)> + '_ {
        self.adjacency.iter().copied()
    }

    /// Weight of the edge to `other`.
    ///
    /// Fails with [`GraphError::EdgeNotFound`] when there is no such edge.
    pub fn weight(&self, other: NodeId) -> GraphResult<Weight> {
        self.positions
            .get(&other)
            .map(|&pos| self.adjacency[pos].1)
            .ok_or(GraphError::EdgeNotFound {
                from: self.id,
                to: other,
            })
    }

    /// Whether an outgoing edge to `other` exists.
    pub fn has_edge_to(&self, other: NodeId) -> bool {
        self.positions.contains_key(&other)
    }

    /// Number of outgoing edges.
    pub fn degree(&self) -> usize {
        self.adjacency.len()
    }

    /// Move this node and its adjacency into another graph's handle space.
    pub(crate) fn rebind(&mut self, graph: u64) {
        self.id.graph = graph;
        for (neighbor, _) in &mut self.adjacency {
            neighbor.graph = graph;
        }
        self.positions = self
            .adjacency
            .iter()
            .enumerate()
            .map(|(pos, &(neighbor, _))| (neighbor, pos))
            .collect();
    }

    /// Insert or overwrite the edge to `other`.
    pub(crate) fn set_edge(&mut self, other: NodeId, weight: Weight) {
        match self.positions.get(&other) {
            Some(&pos) => self.adjacency[pos].1 = weight,
            None => {
                self.positions.insert(other, self.adjacency.len());
                self.adjacency.push((other, weight));
            }
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.name == other.name
    }
}

impl Eq for Node {}
