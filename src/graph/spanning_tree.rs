//! Minimum spanning tree construction (Prim–Jarnik).

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::types::{Cost, Edge, GraphError, GraphResult, NodeId};

use super::Graph;

/// Result of Prim–Jarnik: the tree as its own graph plus the chosen edges.
#[derive(Debug, Clone)]
pub struct SpanningTree {
    root: Option<String>,
    graph: Graph,
    /// Chosen edges, with handles from the source graph, in selection order.
    edges: Vec<Edge>,
    total_weight: Cost,
    unreachable: Vec<String>,
}

impl SpanningTree {
    /// The tree. Its nodes are copies (by name) of the source graph's nodes,
    /// joined by undirected edges.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Take ownership of the tree graph.
    pub fn into_graph(self) -> Graph {
        self.graph
    }

    /// Name of the node the tree was grown from.
    pub fn root(&self) -> Option<&str> {
        self.root.as_deref()
    }

    /// Chosen edges, with handles into the source graph.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Sum of the chosen edge weights.
    pub fn total_weight(&self) -> Cost {
        self.total_weight
    }

    /// Names of source nodes the tree could not reach.
    pub fn unreachable(&self) -> &[String] {
        &self.unreachable
    }

    /// Whether the tree spans every node of the source graph.
    pub fn is_complete(&self) -> bool {
        self.unreachable.is_empty()
    }

    /// The tree graph, or [`GraphError::Unreachable`] if it does not span.
    pub fn into_complete(self) -> GraphResult<Graph> {
        if self.unreachable.is_empty() {
            return Ok(self.graph);
        }
        Err(GraphError::Unreachable {
            start: self.root.unwrap_or_default(),
            missing: self.unreachable,
        })
    }
}

impl Graph {
    /// Minimum spanning tree grown from the first node created in this graph.
    ///
    /// The graph is expected to be undirected (every edge mirrored). An empty
    /// graph yields an empty tree.
    pub fn prim_jarnik(&self) -> SpanningTree {
        match self.all_nodes().next() {
            Some(first) => self.grow_tree(first.id()),
            None => SpanningTree {
                root: None,
                graph: Graph::new(),
                edges: Vec::new(),
                total_weight: 0,
                unreachable: Vec::new(),
            },
        }
    }

    /// Minimum spanning tree grown from a chosen node.
    pub fn prim_jarnik_from(&self, start: NodeId) -> GraphResult<SpanningTree> {
        self.node(start)?;
        Ok(self.grow_tree(start))
    }

    fn grow_tree(&self, start: NodeId) -> SpanningTree {
        let total = self.node_count();
        let root = self.node_unchecked(start);
        let mut tree = Graph::new();
        let mut chosen: Vec<Edge> = Vec::new();
        let mut total_weight: Cost = 0;
        let mut frontier: BinaryHeap<Reverse<Edge>> = BinaryHeap::new();

        log::debug!("prim-jarnik from {} over {} node(s)", root.name(), total);

        tree.get_or_create_node(root.name());
        for (neighbor, weight) in root.edges() {
            frontier.push(Reverse(Edge::new(start, neighbor, weight)));
        }

        while tree.node_count() < total {
            let Some(Reverse(edge)) = frontier.pop() else {
                break;
            };
            let near = self.node_unchecked(edge.start);
            let far = self.node_unchecked(edge.end);

            let near_in_tree = tree.contains_node(near.name());
            if near_in_tree && tree.contains_node(far.name()) {
                continue;
            }

            let a = tree.get_or_create_node(near.name());
            let b = tree.get_or_create_node(far.name());
            tree.link_unchecked(a, b, edge.cost);
            chosen.push(edge);
            total_weight = total_weight.saturating_add(Cost::from(edge.cost));
            log::trace!("tree edge {} - {} ({})", near.name(), far.name(), edge.cost);

            let (added, from) = if near_in_tree { (far, near) } else { (near, far) };
            for (neighbor, weight) in added.edges() {
                if neighbor != from.id() {
                    frontier.push(Reverse(Edge::new(added.id(), neighbor, weight)));
                }
            }
        }

        let unreachable: Vec<String> = self
            .all_nodes()
            .filter(|n| !tree.contains_node(n.name()))
            .map(|n| n.name().to_string())
            .collect();

        if !unreachable.is_empty() {
            log::warn!(
                "prim-jarnik from {}: {} node(s) not spanned",
                root.name(),
                unreachable.len()
            );
        }

        SpanningTree {
            root: Some(root.name().to_string()),
            graph: tree,
            edges: chosen,
            total_weight,
            unreachable,
        }
    }
}
