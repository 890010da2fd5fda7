//! Graph traversal algorithms (BFS and DFS) with visitor callbacks.

use std::collections::{HashSet, VecDeque};

use crate::types::{GraphResult, Node, NodeId};

use super::Graph;

/// Callback invoked once per node, the first time a traversal reaches it.
///
/// Any `FnMut(&Node)` closure is a visitor.
pub trait NodeVisitor {
    /// Called with each newly visited node, in traversal order.
    fn visit(&mut self, node: &Node);
}

impl<F> NodeVisitor for F
where
    F: FnMut(&Node) + ?Sized,
{
    fn visit(&mut self, node: &Node) {
        self(node)
    }
}

/// Frontier discipline shared by BFS and DFS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Order {
    Fifo,
    Lifo,
}

impl Order {
    fn pop(self, frontier: &mut VecDeque<NodeId>) -> Option<NodeId> {
        match self {
            Self::Fifo => frontier.pop_front(),
            Self::Lifo => frontier.pop_back(),
        }
    }
}

impl Graph {
    /// Breadth-first search from the node named `start_name`.
    ///
    /// An unknown name creates an isolated node, which is then the only node
    /// visited.
    pub fn breadth_first_search<V>(&mut self, start_name: &str, visitor: &mut V)
    where
        V: NodeVisitor + ?Sized,
    {
        let start = self.get_or_create_node(start_name);
        self.walk(start, visitor, Order::Fifo);
    }

    /// Depth-first search from the node named `start_name`.
    ///
    /// Siblings are visited in reverse insertion order. An unknown name
    /// creates an isolated node, which is then the only node visited.
    pub fn depth_first_search<V>(&mut self, start_name: &str, visitor: &mut V)
    where
        V: NodeVisitor + ?Sized,
    {
        let start = self.get_or_create_node(start_name);
        self.walk(start, visitor, Order::Lifo);
    }

    /// Breadth-first search from an existing node.
    pub fn bfs_from<V>(&self, start: NodeId, visitor: &mut V) -> GraphResult<()>
    where
        V: NodeVisitor + ?Sized,
    {
        self.node(start)?;
        self.walk(start, visitor, Order::Fifo);
        Ok(())
    }

    /// Depth-first search from an existing node.
    pub fn dfs_from<V>(&self, start: NodeId, visitor: &mut V) -> GraphResult<()>
    where
        V: NodeVisitor + ?Sized,
    {
        self.node(start)?;
        self.walk(start, visitor, Order::Lifo);
        Ok(())
    }

    /// Nodes are marked visited when taken off the frontier, not when pushed,
    /// so a node may sit on the frontier several times; later copies are skipped.
    /// `start` must be a valid handle.
    fn walk<V>(&self, start: NodeId, visitor: &mut V, order: Order)
    where
        V: NodeVisitor + ?Sized,
    {
        let mut visited: HashSet<NodeId> = HashSet::new();
        let mut frontier: VecDeque<NodeId> = VecDeque::new();
        frontier.push_back(start);

        log::debug!("{:?} traversal from {}", order, self.node_unchecked(start).name());

        while let Some(current) = order.pop(&mut frontier) {
            if !visited.insert(current) {
                continue;
            }

            let node = self.node_unchecked(current);
            visitor.visit(node);

            for neighbor in node.neighbors() {
                if !visited.contains(&neighbor) {
                    frontier.push_back(neighbor);
                }
            }
        }

        log::debug!("{:?} traversal visited {} node(s)", order, visited.len());
    }
}
