//! Dijkstra and Prim–Jarnik tests.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use weighted_graph::{Cost, Graph, GraphBuilder, GraphError, NodeId, Weight};

// ==================== Helpers ====================

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A -- B (1), B -- C (2), A -- C (10).
fn triangle() -> Graph {
    let mut builder = GraphBuilder::new();
    builder.link("A", "B", 1).link("B", "C", 2).link("A", "C", 10);
    builder.build().unwrap()
}

/// Two components: {A -- B} and {C -- D}.
fn two_islands() -> Graph {
    let mut builder = GraphBuilder::new();
    builder.link("A", "B", 1).link("C", "D", 1);
    builder.build().unwrap()
}

/// Connected random undirected graph: a random spanning chain plus extra edges.
fn random_connected(rng: &mut StdRng, nodes: usize, extra_edges: usize) -> Graph {
    let mut graph = Graph::new();
    let ids: Vec<NodeId> = (0..nodes)
        .map(|i| graph.get_or_create_node(&format!("v{i}")))
        .collect();
    for i in 1..nodes {
        let parent = ids[rng.gen_range(0..i)];
        graph
            .add_undirected_edge(ids[i], parent, rng.gen_range(0..50))
            .unwrap();
    }
    for _ in 0..extra_edges {
        let a = ids[rng.gen_range(0..nodes)];
        let b = ids[rng.gen_range(0..nodes)];
        if a != b {
            graph.add_undirected_edge(a, b, rng.gen_range(0..50)).unwrap();
        }
    }
    graph
}

/// Reference shortest paths by repeated relaxation.
fn relaxation_costs(graph: &Graph, start: NodeId) -> HashMap<NodeId, Cost> {
    let mut best: HashMap<NodeId, Cost> = HashMap::new();
    best.insert(start, 0);
    for _ in 0..graph.node_count() {
        for node in graph.all_nodes() {
            let Some(&from) = best.get(&node.id()) else {
                continue;
            };
            for (to, weight) in node.edges() {
                let candidate = from + Cost::from(weight);
                let entry = best.entry(to).or_insert(Cost::MAX);
                if candidate < *entry {
                    *entry = candidate;
                }
            }
        }
    }
    best
}

/// Reference MST weight by Kruskal with union-find.
fn kruskal_weight(graph: &Graph) -> Cost {
    let mut edges: Vec<(Weight, usize, usize)> = Vec::new();
    for node in graph.all_nodes() {
        for (to, weight) in node.edges() {
            if node.id() < to {
                edges.push((weight, node.id().index(), to.index()));
            }
        }
    }
    edges.sort_unstable();

    let mut parent: Vec<usize> = (0..graph.node_count()).collect();
    fn find(parent: &mut Vec<usize>, x: usize) -> usize {
        let mut root = x;
        while parent[root] != root {
            root = parent[root];
        }
        parent[x] = root;
        root
    }

    let mut total = 0;
    for (weight, a, b) in edges {
        let (ra, rb) = (find(&mut parent, a), find(&mut parent, b));
        if ra != rb {
            parent[ra] = rb;
            total += Cost::from(weight);
        }
    }
    total
}

// ==================== Dijkstra ====================

#[test]
fn test_dijkstra_triangle() {
    init_logging();
    let mut graph = triangle();
    let paths = graph.dijkstra("A");

    assert!(paths.is_complete());
    let costs = paths.costs_by_name(&graph).unwrap();
    let expected: HashMap<String, Cost> =
        [("A".to_string(), 0), ("B".to_string(), 1), ("C".to_string(), 3)]
            .into_iter()
            .collect();
    assert_eq!(costs, expected);
}

#[test]
fn test_dijkstra_settles_in_cost_order() {
    let mut graph = triangle();
    let paths = graph.dijkstra("C");

    let settled: Vec<Cost> = paths
        .settled()
        .iter()
        .map(|&id| paths.cost(id).unwrap())
        .collect();
    assert_eq!(settled, vec![0, 2, 3]);
    assert_eq!(paths.start(), graph.node_id("C").unwrap());
}

#[test]
fn test_dijkstra_respects_direction() {
    let mut builder = GraphBuilder::new();
    builder.arc("A", "B", 5).arc("B", "C", 5).arc("C", "A", 1);
    let graph = builder.build().unwrap();
    let a = graph.node_id("A").unwrap();
    let c = graph.node_id("C").unwrap();

    let paths = graph.dijkstra_from(a).unwrap();
    assert_eq!(paths.cost(c), Some(10));

    let back = graph.dijkstra_from(c).unwrap();
    assert_eq!(back.cost(a), Some(1));
}

#[test]
fn test_dijkstra_zero_weight_edges() {
    let mut builder = GraphBuilder::new();
    builder.link("A", "B", 0).link("B", "C", 0).link("A", "C", 3);
    let mut graph = builder.build().unwrap();
    let paths = graph.dijkstra("A");
    let c = graph.node_id("C").unwrap();
    assert_eq!(paths.cost(c), Some(0));
}

#[test]
fn test_dijkstra_reports_unreachable_instead_of_hanging() {
    init_logging();
    let mut graph = two_islands();
    let paths = graph.dijkstra("A");

    assert!(!paths.is_complete());
    assert_eq!(paths.costs().len(), 2);
    let unreachable: Vec<&str> = paths
        .unreachable()
        .iter()
        .map(|&id| graph.name_of(id).unwrap())
        .collect();
    assert_eq!(unreachable, vec!["C", "D"]);

    assert_eq!(
        paths.into_complete(),
        Err(GraphError::Unreachable {
            start: "A".into(),
            missing: vec!["C".into(), "D".into()],
        })
    );
}

#[test]
fn test_dijkstra_unknown_start_creates_isolated_node() {
    let mut graph = triangle();
    let paths = graph.dijkstra("Z");

    let z = graph.node_id("Z").unwrap();
    assert_eq!(paths.cost(z), Some(0));
    assert_eq!(paths.costs().len(), 1);
    assert_eq!(paths.unreachable().len(), 3);
}

#[test]
fn test_dijkstra_into_complete_on_connected_graph() {
    let mut graph = triangle();
    let costs = graph.dijkstra("B").into_complete().unwrap();
    let a = graph.node_id("A").unwrap();
    let c = graph.node_id("C").unwrap();
    assert_eq!(costs[&a], 1);
    assert_eq!(costs[&c], 2);
}

#[test]
fn test_dijkstra_costs_respect_every_edge() {
    let mut rng = StdRng::seed_from_u64(11);
    let graph = random_connected(&mut rng, 60, 150);
    let start = graph.node_id("v0").unwrap();
    let paths = graph.dijkstra_from(start).unwrap();
    assert!(paths.is_complete());

    for node in graph.all_nodes() {
        let from = paths.cost(node.id()).unwrap();
        for (to, weight) in node.edges() {
            assert!(paths.cost(to).unwrap() <= from + Cost::from(weight));
        }
    }
}

#[test]
fn test_dijkstra_matches_relaxation() {
    let mut rng = StdRng::seed_from_u64(42);
    for round in 0..10 {
        let graph = random_connected(&mut rng, 25 + round, 40);
        let start = graph.node_id("v0").unwrap();
        let paths = graph.dijkstra_from(start).unwrap();
        assert_eq!(paths.costs(), &relaxation_costs(&graph, start), "round {round}");
    }
}

// ==================== Prim–Jarnik ====================

#[test]
fn test_prim_triangle() {
    init_logging();
    let graph = triangle();
    let tree = graph.prim_jarnik();

    assert!(tree.is_complete());
    assert_eq!(tree.root(), Some("A"));
    assert_eq!(tree.edges().len(), 2);
    assert_eq!(tree.total_weight(), 3);

    let mst = tree.graph();
    assert_eq!(mst.node_count(), 3);
    assert_eq!(mst.edge_count(), 4);
    let a = mst.node_id("A").unwrap();
    let b = mst.node_id("B").unwrap();
    let c = mst.node_id("C").unwrap();
    assert_eq!(mst.weight(a, b), Ok(1));
    assert_eq!(mst.weight(c, b), Ok(2));
    assert!(mst.weight(a, c).is_err());
}

#[test]
fn test_prim_result_is_a_separate_graph() {
    let graph = triangle();
    let mut mst = graph.prim_jarnik().into_graph();
    mst.get_or_create_node("extra");

    assert!(!graph.contains_node("extra"));
    assert_eq!(graph.edge_count(), 6);
}

#[test]
fn test_prim_from_any_root_has_same_weight() {
    let graph = triangle();
    for name in ["A", "B", "C"] {
        let root = graph.node_id(name).unwrap();
        let tree = graph.prim_jarnik_from(root).unwrap();
        assert_eq!(tree.root(), Some(name));
        assert_eq!(tree.total_weight(), 3);
        assert_eq!(tree.graph().node_count(), 3);
    }
}

#[test]
fn test_prim_single_node() {
    let mut graph = Graph::new();
    graph.get_or_create_node("only");
    let tree = graph.prim_jarnik();

    assert!(tree.is_complete());
    assert!(tree.edges().is_empty());
    assert_eq!(tree.graph().node_count(), 1);
    assert!(tree.graph().contains_node("only"));
}

#[test]
fn test_prim_empty_graph() {
    let graph = Graph::new();
    let tree = graph.prim_jarnik();

    assert!(tree.is_complete());
    assert_eq!(tree.root(), None);
    assert!(tree.graph().is_empty());
    assert_eq!(tree.total_weight(), 0);
}

#[test]
fn test_prim_reports_unreachable_instead_of_hanging() {
    let graph = two_islands();
    let tree = graph.prim_jarnik();

    assert!(!tree.is_complete());
    assert_eq!(tree.unreachable(), ["C".to_string(), "D".to_string()]);
    assert_eq!(tree.graph().node_count(), 2);
    assert_eq!(tree.total_weight(), 1);

    match tree.into_complete() {
        Err(GraphError::Unreachable { start, missing }) => {
            assert_eq!(start, "A");
            assert_eq!(missing, vec!["C", "D"]);
        }
        other => panic!("Expected Unreachable error, got {:?}", other.map(|g| g.node_count())),
    }
}

#[test]
fn test_prim_skips_edges_inside_the_tree() {
    // Square with one heavy diagonal; the diagonal must never be chosen.
    let mut builder = GraphBuilder::new();
    builder
        .link("A", "B", 1)
        .link("B", "C", 1)
        .link("C", "D", 1)
        .link("D", "A", 5)
        .link("A", "C", 100);
    let graph = builder.build().unwrap();
    let tree = graph.prim_jarnik();

    assert_eq!(tree.total_weight(), 3);
    assert_eq!(tree.edges().len(), 3);
    assert!(tree.edges().iter().all(|e| e.cost < 5));
}

#[test]
fn test_prim_matches_kruskal() {
    let mut rng = StdRng::seed_from_u64(7);
    for round in 0..10 {
        let graph = random_connected(&mut rng, 30 + round, 60);
        let tree = graph.prim_jarnik();

        assert!(tree.is_complete(), "round {round}");
        assert_eq!(tree.graph().node_count(), graph.node_count());
        assert_eq!(tree.edges().len(), graph.node_count() - 1);
        assert_eq!(tree.total_weight(), kruskal_weight(&graph), "round {round}");
    }
}
