//! Core graph structure — a name-keyed arena of nodes.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::types::{GraphError, GraphResult, Node, NodeId, Weight};

/// Source of graph identities; every graph, including clones, takes a fresh one.
static NEXT_GRAPH_ID: AtomicU64 = AtomicU64::new(1);

fn next_graph_id() -> u64 {
    NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed)
}

/// An in-memory directed, weighted graph.
///
/// Nodes live in an arena and are addressed by [`NodeId`]. Each name maps to
/// exactly one node for the lifetime of the graph; nodes are never removed.
/// Handles issued by one graph are rejected by every other graph, clones
/// included.
#[derive(Debug)]
pub struct Graph {
    /// Identity stamped into every handle this graph issues.
    id: u64,
    /// All nodes, indexed by `NodeId`.
    nodes: Vec<Node>,
    /// Name -> handle.
    by_name: HashMap<String, NodeId>,
}

impl Default for Graph {
    fn default() -> Self {
        Self {
            id: next_graph_id(),
            nodes: Vec::new(),
            by_name: HashMap::new(),
        }
    }
}

impl Clone for Graph {
    fn clone(&self) -> Self {
        let id = next_graph_id();
        let mut nodes = self.nodes.clone();
        for node in &mut nodes {
            node.rebind(id);
        }
        let by_name = nodes
            .iter()
            .map(|n| (n.name().to_string(), n.id()))
            .collect();
        Self { id, nodes, by_name }
    }
}

impl Graph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the node named `name`, creating it first if it does not exist.
    ///
    /// Repeated calls with the same name return the same handle.
    pub fn get_or_create_node(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }
        let id = NodeId::new(self.id, self.nodes.len());
        self.nodes.push(Node::new(id, name));
        self.by_name.insert(name.to_string(), id);
        id
    }

    /// Whether a node with this name exists.
    pub fn contains_node(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Handle of the node with this name, if any.
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.by_name.get(name).copied()
    }

    /// Node with this name, if any.
    pub fn get_node(&self, name: &str) -> Option<&Node> {
        self.node_id(name).map(|id| &self.nodes[id.index])
    }

    /// Node behind a handle. Handles from any other graph are rejected.
    pub fn node(&self, id: NodeId) -> GraphResult<&Node> {
        if id.graph != self.id {
            return Err(GraphError::InvalidNode(id));
        }
        self.nodes.get(id.index).ok_or(GraphError::InvalidNode(id))
    }

    /// Node behind a handle already known to be valid.
    pub(crate) fn node_unchecked(&self, id: NodeId) -> &Node {
        &self.nodes[id.index]
    }

    fn node_mut(&mut self, id: NodeId) -> GraphResult<&mut Node> {
        if id.graph != self.id {
            return Err(GraphError::InvalidNode(id));
        }
        self.nodes.get_mut(id.index).ok_or(GraphError::InvalidNode(id))
    }

    /// All nodes. Callers should not depend on the order.
    pub fn all_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of directed adjacency entries. An undirected edge counts twice.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(Node::degree).sum()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Insert or overwrite the directed edge `from -> to`.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: Weight) -> GraphResult<()> {
        self.node(to)?;
        self.node_mut(from)?.set_edge(to, weight);
        Ok(())
    }

    /// Insert or overwrite the edge between `a` and `b` in both directions.
    ///
    /// Both handles are validated before either side is touched.
    pub fn add_undirected_edge(&mut self, a: NodeId, b: NodeId, weight: Weight) -> GraphResult<()> {
        self.node(a)?;
        self.node(b)?;
        self.link_unchecked(a, b, weight);
        Ok(())
    }

    /// Mirror an edge between two handles already known to be valid.
    pub(crate) fn link_unchecked(&mut self, a: NodeId, b: NodeId, weight: Weight) {
        self.nodes[a.index].set_edge(b, weight);
        self.nodes[b.index].set_edge(a, weight);
    }

    /// Neighbors of `id`, in insertion order.
    pub fn neighbors(&self, id: NodeId) -> GraphResult<impl Iterator<Item = NodeId> + '_> {
        Ok(self.node(id)?.neighbors())
    }

    /// Weight of the directed edge `from -> to`.
    pub fn weight(&self, from: NodeId, to: NodeId) -> GraphResult<Weight> {
        self.node(to)?;
        self.node(from)?.weight(to)
    }

    /// Name of the node behind a handle.
    pub fn name_of(&self, id: NodeId) -> GraphResult<&str> {
        Ok(self.node(id)?.name())
    }
}
