//! `wayfind path` - shortest path over a graph built from edge flags

use std::time::Instant;

use crate::cli::Cli;
use wayfind_core::error::Result;
use wayfind_core::format::OutputFormat;
use wayfind_core::graph::{shortest_path, Graph, PathResult};

pub(super) fn run(
    cli: &Cli,
    edges: &[(String, String)],
    directed: bool,
    from: &str,
    to: &str,
    start: Instant,
) -> Result<()> {
    let mut graph = Graph::new();
    for (a, b) in edges {
        for key in [a, b] {
            if !graph.contains(key) {
                graph.add_vertex(key.clone(), None)?;
            }
        }
        if directed {
            graph.add_directed_edge(a, b)?;
        } else {
            graph.add_undirected_edge(a, b)?;
        }
    }

    let path = shortest_path(&graph, from, to)?;
    tracing::debug!(elapsed = ?start.elapsed(), vertices = graph.len(), "path_search");

    let result = PathResult::new(from, to, path);
    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Human => {
            if result.found {
                println!("{}", result.path.join(", "));
            } else if !cli.quiet {
                println!("no path from {} to {}", from, to);
            }
        }
    }

    Ok(())
}
