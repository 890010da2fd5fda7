//! 100K node performance demo.

use std::time::Instant;

use weighted_graph::*;

fn main() -> GraphResult<()> {
    let node_count = 100_000;
    let edges_per_node = 3;

    println!("Creating graph with {} nodes...", node_count);
    let start = Instant::now();

    let mut graph = Graph::new();
    let ids: Vec<NodeId> = (0..node_count)
        .map(|i| graph.get_or_create_node(&format!("n{}", i)))
        .collect();
    println!("  Nodes created in {:?}", start.elapsed());

    let start = Instant::now();
    for i in 0..node_count {
        for j in 1..=edges_per_node {
            let target = (i + j * 7) % node_count;
            let weight = ((i * 31 + j * 17) % 100) as Weight + 1;
            graph.add_undirected_edge(ids[i], ids[target], weight)?;
        }
    }
    println!(
        "  {} directed edges created in {:?}",
        graph.edge_count(),
        start.elapsed()
    );

    let start = Instant::now();
    let mut visited = 0usize;
    graph.bfs_from(ids[0], &mut |_: &Node| visited += 1)?;
    println!("BFS visited {} nodes in {:?}", visited, start.elapsed());

    let start = Instant::now();
    let paths = graph.dijkstra_from(ids[0])?;
    println!(
        "Dijkstra settled {} nodes in {:?}",
        paths.settled().len(),
        start.elapsed()
    );

    let start = Instant::now();
    let tree = graph.prim_jarnik();
    println!(
        "Prim-Jarnik chose {} edges (weight {}) in {:?}",
        tree.edges().len(),
        tree.total_weight(),
        start.elapsed()
    );

    Ok(())
}
