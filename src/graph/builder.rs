//! Fluent API for building Graph instances by node name.

use crate::types::{GraphResult, Weight};

use super::Graph;

#[derive(Debug, Clone)]
struct PendingEdge {
    from: String,
    to: String,
    weight: Weight,
    undirected: bool,
}

/// Fluent builder for constructing a [`Graph`].
///
/// Nodes are created in the order their names first appear, whether through
/// [`node`](Self::node) or as an edge endpoint.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    nodes: Vec<String>,
    edges: Vec<PendingEdge>,
}

impl GraphBuilder {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a node, possibly isolated.
    pub fn node(&mut self, name: &str) -> &mut Self {
        self.nodes.push(name.to_string());
        self
    }

    /// Add an undirected edge between two named nodes.
    pub fn link(&mut self, a: &str, b: &str, weight: Weight) -> &mut Self {
        self.push_edge(a, b, weight, true)
    }

    /// Add a directed edge `from -> to`.
    pub fn arc(&mut self, from: &str, to: &str, weight: Weight) -> &mut Self {
        self.push_edge(from, to, weight, false)
    }

    fn push_edge(&mut self, from: &str, to: &str, weight: Weight, undirected: bool) -> &mut Self {
        self.nodes.push(from.to_string());
        self.nodes.push(to.to_string());
        self.edges.push(PendingEdge {
            from: from.to_string(),
            to: to.to_string(),
            weight,
            undirected,
        });
        self
    }

    /// Build the final Graph.
    pub fn build(self) -> GraphResult<Graph> {
        let mut graph = Graph::new();
        for name in &self.nodes {
            graph.get_or_create_node(name);
        }
        for edge in self.edges {
            let from = graph.get_or_create_node(&edge.from);
            let to = graph.get_or_create_node(&edge.to);
            if edge.undirected {
                graph.add_undirected_edge(from, to, edge.weight)?;
            } else {
                graph.add_edge(from, to, edge.weight)?;
            }
        }
        Ok(graph)
    }
}
