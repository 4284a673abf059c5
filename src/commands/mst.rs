//! `senda mst` - minimum spanning tree

use senda_core::error::Result;
use senda_core::graph::{mst, MstMethod, WeightedGraph};

use crate::cli::{Cli, OutputFormat};

pub fn run(cli: &Cli, graph: &WeightedGraph, method: MstMethod) -> Result<()> {
    let result = mst(graph, method)?;

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Human => {
            for edge in &result.edges {
                println!("{} - {} ({})", edge.from, edge.to, edge.weight);
            }
            println!("cost: {}", result.cost);
            if !result.spanning {
                println!("warning: graph is disconnected; edges form a partial forest");
            }
        }
    }

    Ok(())
}
