//! Basic build -> traverse -> optimize flow.

use weighted_graph::*;

fn main() -> GraphResult<()> {
    // Build a small road map
    let mut builder = GraphBuilder::new();
    builder
        .link("Avon", "Bree", 1)
        .link("Bree", "Crick", 2)
        .link("Avon", "Crick", 10)
        .link("Crick", "Dale", 4);
    let mut graph = builder.build()?;

    println!(
        "Graph created with {} nodes and {} directed edges",
        graph.node_count(),
        graph.edge_count()
    );

    // Traversals
    let mut order = Vec::new();
    graph.breadth_first_search("Avon", &mut |node: &Node| order.push(node.name().to_string()));
    println!("BFS from Avon: {}", order.join(" -> "));

    // Shortest paths
    let paths = graph.dijkstra("Avon");
    for &id in paths.settled() {
        println!(
            "  {} at cost {}",
            graph.name_of(id)?,
            paths.cost(id).unwrap_or_default()
        );
    }

    // Minimum spanning tree
    let tree = graph.prim_jarnik();
    println!(
        "MST: {} edges, total weight {}",
        tree.edges().len(),
        tree.total_weight()
    );

    Ok(())
}
