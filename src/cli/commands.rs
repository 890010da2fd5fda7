//! CLI command implementations.

use clap::Args;

use crate::graph::{Graph, GraphBuilder, ShortestPaths, SpanningTree};
use crate::types::{GraphError, GraphResult, Node, Weight};

/// Weight used when an edge argument omits `:W`.
pub const DEFAULT_WEIGHT: Weight = 1;

/// Graph description shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct GraphArgs {
    /// Undirected edge, as A-B:W (weight defaults to 1; names may not contain '-')
    #[arg(long = "edge", value_name = "A-B:W", global = true)]
    pub edges: Vec<String>,

    /// Directed edge, as A>B:W (weight defaults to 1; names may not contain '>')
    #[arg(long = "arc", value_name = "A>B:W", global = true)]
    pub arcs: Vec<String>,

    /// Isolated node
    #[arg(long = "node", value_name = "NAME", global = true)]
    pub nodes: Vec<String>,
}

/// A parsed edge argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub weight: Weight,
}

/// Parse `A-B:W` (or `A>B:W` when `directed`). The weight suffix is optional.
///
/// Exactly one separator is allowed, so names cannot contain it.
pub fn parse_edge_spec(spec: &str, directed: bool) -> GraphResult<EdgeSpec> {
    let invalid = || GraphError::InvalidEdgeSpec(spec.to_string());
    let separator = if directed { '>' } else { '-' };

    let (endpoints, weight) = match spec.rsplit_once(':') {
        Some((endpoints, weight)) => {
            let weight = weight.trim().parse::<Weight>().map_err(|_| invalid())?;
            (endpoints, weight)
        }
        None => (spec, DEFAULT_WEIGHT),
    };

    let (from, to) = endpoints.split_once(separator).ok_or_else(invalid)?;
    let (from, to) = (from.trim(), to.trim());
    if from.is_empty() || to.is_empty() || to.contains(separator) {
        return Err(invalid());
    }

    Ok(EdgeSpec {
        from: from.to_string(),
        to: to.to_string(),
        weight,
    })
}

/// Build a graph from command-line arguments.
pub fn build_graph(args: &GraphArgs) -> GraphResult<Graph> {
    let mut builder = GraphBuilder::new();
    for raw in &args.nodes {
        let name = raw.trim();
        if name.is_empty() {
            return Err(GraphError::InvalidEdgeSpec(format!("--node {:?}", raw)));
        }
        builder.node(name);
    }
    for spec in &args.edges {
        let edge = parse_edge_spec(spec, false)?;
        builder.link(&edge.from, &edge.to, edge.weight);
    }
    for spec in &args.arcs {
        let edge = parse_edge_spec(spec, true)?;
        builder.arc(&edge.from, &edge.to, edge.weight);
    }
    builder.build()
}

/// Render a traversal order.
pub fn render_visit_order(label: &str, order: &[String], json: bool) -> String {
    if json {
        serde_json::json!({ "algorithm": label, "order": order }).to_string()
    } else {
        format!("{}: {}", label, order.join(" -> "))
    }
}

fn collect_names<F>(run: F) -> Vec<String>
where
    F: FnOnce(&mut dyn FnMut(&Node)),
{
    let mut order = Vec::new();
    run(&mut |node: &Node| order.push(node.name().to_string()));
    order
}

/// Breadth-first visit order from `start`.
pub fn cmd_bfs(graph: &mut Graph, start: &str, json: bool) -> GraphResult<()> {
    let order = collect_names(|visit| graph.breadth_first_search(start, visit));
    println!("{}", render_visit_order("bfs", &order, json));
    Ok(())
}

/// Depth-first visit order from `start`.
pub fn cmd_dfs(graph: &mut Graph, start: &str, json: bool) -> GraphResult<()> {
    let order = collect_names(|visit| graph.depth_first_search(start, visit));
    println!("{}", render_visit_order("dfs", &order, json));
    Ok(())
}

/// Render Dijkstra costs in settle order, followed by unreachable nodes.
pub fn render_shortest_paths(graph: &Graph, paths: &ShortestPaths, json: bool) -> GraphResult<String> {
    let mut settled = Vec::with_capacity(paths.settled().len());
    for &id in paths.settled() {
        let cost = paths.cost(id).unwrap_or_default();
        settled.push((graph.name_of(id)?.to_string(), cost));
    }
    let unreachable = paths
        .unreachable()
        .iter()
        .map(|&id| graph.name_of(id).map(str::to_string))
        .collect::<GraphResult<Vec<String>>>()?;

    if json {
        let costs: serde_json::Map<String, serde_json::Value> = settled
            .iter()
            .map(|(name, cost)| (name.clone(), serde_json::json!(cost)))
            .collect();
        return Ok(serde_json::json!({
            "start": graph.name_of(paths.start())?,
            "costs": costs,
            "unreachable": unreachable,
        })
        .to_string());
    }

    let mut lines: Vec<String> = settled
        .iter()
        .map(|(name, cost)| format!("{}\t{}", name, cost))
        .collect();
    for name in &unreachable {
        lines.push(format!("{}\tunreachable", name));
    }
    Ok(lines.join("\n"))
}

/// Shortest-path costs from `start`.
pub fn cmd_dijkstra(graph: &mut Graph, start: &str, strict: bool, json: bool) -> GraphResult<()> {
    let paths = graph.dijkstra(start);
    println!("{}", render_shortest_paths(graph, &paths, json)?);
    if strict {
        paths.into_complete()?;
    }
    Ok(())
}

/// Render the chosen tree edges and total weight.
pub fn render_spanning_tree(source: &Graph, tree: &SpanningTree, json: bool) -> GraphResult<String> {
    let mut edges = Vec::with_capacity(tree.edges().len());
    for edge in tree.edges() {
        edges.push((
            source.name_of(edge.start)?.to_string(),
            source.name_of(edge.end)?.to_string(),
            edge.cost,
        ));
    }

    if json {
        let edges: Vec<serde_json::Value> = edges
            .iter()
            .map(|(a, b, w)| serde_json::json!({ "from": a, "to": b, "weight": w }))
            .collect();
        return Ok(serde_json::json!({
            "root": tree.root(),
            "edges": edges,
            "total_weight": tree.total_weight(),
            "unreachable": tree.unreachable(),
        })
        .to_string());
    }

    let mut lines: Vec<String> = edges
        .iter()
        .map(|(a, b, w)| format!("{} - {}\t{}", a, b, w))
        .collect();
    lines.push(format!("total\t{}", tree.total_weight()));
    for name in tree.unreachable() {
        lines.push(format!("{}\tunreachable", name));
    }
    Ok(lines.join("\n"))
}

/// Minimum spanning tree of the graph.
pub fn cmd_mst(graph: &Graph, strict: bool, json: bool) -> GraphResult<()> {
    let tree = graph.prim_jarnik();
    println!("{}", render_spanning_tree(graph, &tree, json)?);
    if strict {
        tree.into_complete()?;
    }
    Ok(())
}

/// Node and edge counts.
pub fn cmd_info(graph: &Graph, json: bool) {
    if json {
        let nodes: Vec<&str> = graph.all_nodes().map(Node::name).collect();
        println!(
            "{}",
            serde_json::json!({
                "nodes": graph.node_count(),
                "edges": graph.edge_count(),
                "names": nodes,
            })
        );
    } else {
        println!("Nodes: {}", graph.node_count());
        println!("Edges: {}", graph.edge_count());
    }
}
