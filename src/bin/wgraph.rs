//! CLI entry point for the `wgraph` command-line tool.

use std::process;

use clap::{Parser, Subcommand};

use weighted_graph::cli::commands;
use weighted_graph::cli::GraphArgs;
use weighted_graph::GraphError;

#[derive(Parser)]
#[command(
    name = "wgraph",
    about = "Run BFS, DFS, Dijkstra or Prim-Jarnik over a graph given on the command line"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text", global = true)]
    format: String,

    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    #[command(flatten)]
    graph: GraphArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Breadth-first visit order
    Bfs {
        /// Start node name
        start: String,
    },
    /// Depth-first visit order
    Dfs {
        /// Start node name
        start: String,
    },
    /// Shortest-path cost to every node
    Dijkstra {
        /// Start node name
        start: String,
        /// Fail if any node is unreachable
        #[arg(long)]
        strict: bool,
    },
    /// Minimum spanning tree
    Mst {
        /// Fail if the graph is not connected
        #[arg(long)]
        strict: bool,
    },
    /// Node and edge counts
    Info,
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let result = commands::build_graph(&cli.graph).and_then(|mut graph| match cli.command {
        Commands::Bfs { start } => commands::cmd_bfs(&mut graph, &start, json),
        Commands::Dfs { start } => commands::cmd_dfs(&mut graph, &start, json),
        Commands::Dijkstra { start, strict } => {
            commands::cmd_dijkstra(&mut graph, &start, strict, json)
        }
        Commands::Mst { strict } => commands::cmd_mst(&graph, strict, json),
        Commands::Info => {
            commands::cmd_info(&graph, json);
            Ok(())
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::InvalidEdgeSpec(_) => 3,
            GraphError::Unreachable { .. } => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
