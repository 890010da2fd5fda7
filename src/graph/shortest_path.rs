//! Single-source shortest paths (Dijkstra, lazy deletion).

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::types::{Cost, GraphError, GraphResult, NodeId, Path};

use super::Graph;

/// Result of a shortest-path search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    start: NodeId,
    start_name: String,
    /// Minimum cost of every finalized node.
    costs: HashMap<NodeId, Cost>,
    /// Finalized nodes, in the order they were settled.
    settled: Vec<NodeId>,
    /// Nodes the search never reached, by handle order.
    unreachable: Vec<NodeId>,
    unreachable_names: Vec<String>,
}

impl ShortestPaths {
    /// The start node.
    pub fn start(&self) -> NodeId {
        self.start
    }

    /// Minimum cost to reach `id`, or `None` if it was not reached.
    pub fn cost(&self, id: NodeId) -> Option<Cost> {
        self.costs.get(&id).copied()
    }

    /// All finalized costs.
    pub fn costs(&self) -> &HashMap<NodeId, Cost> {
        &self.costs
    }

    /// Finalized nodes in settle order. Costs along this order never decrease.
    pub fn settled(&self) -> &[NodeId] {
        &self.settled
    }

    /// Nodes that could not be reached from the start.
    pub fn unreachable(&self) -> &[NodeId] {
        &self.unreachable
    }

    /// Whether every node in the graph was reached.
    pub fn is_complete(&self) -> bool {
        self.unreachable.is_empty()
    }

    /// Costs keyed by node name, resolved against the graph that was searched.
    pub fn costs_by_name(&self, graph: &Graph) -> GraphResult<HashMap<String, Cost>> {
        self.costs
            .iter()
            .map(|(&id, &cost)| Ok((graph.name_of(id)?.to_string(), cost)))
            .collect()
    }

    /// The full cost map, or [`GraphError::Unreachable`] if any node was missed.
    pub fn into_complete(self) -> GraphResult<HashMap<NodeId, Cost>> {
        if self.unreachable.is_empty() {
            Ok(self.costs)
        } else {
            Err(GraphError::Unreachable {
                start: self.start_name,
                missing: self.unreachable_names,
            })
        }
    }
}

impl Graph {
    /// Shortest-path costs from the node named `start_name` to every node.
    ///
    /// An unknown name creates an isolated node first; every other node is
    /// then reported unreachable.
    pub fn dijkstra(&mut self, start_name: &str) -> ShortestPaths {
        let start = self.get_or_create_node(start_name);
        self.shortest_paths(start)
    }

    /// Shortest-path costs from an existing node.
    pub fn dijkstra_from(&self, start: NodeId) -> GraphResult<ShortestPaths> {
        self.node(start)?;
        Ok(self.shortest_paths(start))
    }

    /// A node may be on the frontier several times with different costs; only
    /// its first pop is kept, which is minimal because weights are non-negative.
    fn shortest_paths(&self, start: NodeId) -> ShortestPaths {
        let total = self.node_count();
        let mut costs: HashMap<NodeId, Cost> = HashMap::with_capacity(total);
        let mut settled: Vec<NodeId> = Vec::with_capacity(total);
        let mut frontier: BinaryHeap<Reverse<Path>> = BinaryHeap::new();
        frontier.push(Reverse(Path::new(start, 0)));

        let start_name = self.node_unchecked(start).name().to_string();
        log::debug!("dijkstra from {} over {} node(s)", start_name, total);

        while costs.len() < total {
            let Some(Reverse(path)) = frontier.pop() else {
                break;
            };
            if costs.contains_key(&path.destination) {
                continue;
            }

            costs.insert(path.destination, path.cost);
            settled.push(path.destination);

            let node = self.node_unchecked(path.destination);
            log::trace!("settled {} at {}", node.name(), path.cost);

            for (neighbor, weight) in node.edges() {
                let cost = path.cost.saturating_add(Cost::from(weight));
                frontier.push(Reverse(Path::new(neighbor, cost)));
            }
        }

        let unreachable: Vec<NodeId> = self
            .all_nodes()
            .map(|n| n.id())
            .filter(|id| !costs.contains_key(id))
            .collect();
        let unreachable_names: Vec<String> = unreachable
            .iter()
            .map(|&id| self.node_unchecked(id).name().to_string())
            .collect();

        if !unreachable.is_empty() {
            log::warn!(
                "dijkstra from {}: {} node(s) unreachable",
                start_name,
                unreachable.len()
            );
        }

        ShortestPaths {
            start,
            start_name,
            costs,
            settled,
            unreachable,
            unreachable_names,
        }
    }
}
