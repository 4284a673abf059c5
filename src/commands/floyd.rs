//! `senda floyd` - all-pairs shortest path matrix

use senda_core::error::Result;
use senda_core::graph::{floyd_warshall, CostMatrix, WeightedGraph};

use crate::cli::{Cli, OutputFormat};

pub fn run(cli: &Cli, graph: &WeightedGraph) -> Result<()> {
    let matrix = CostMatrix::from_graph(graph);
    let distances = floyd_warshall(&matrix);

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&distances)?),
        OutputFormat::Human => print_table(&distances),
    }

    Ok(())
}

fn print_table(distances: &CostMatrix) {
    let labels = distances.labels();
    let width = labels
        .iter()
        .map(|l| l.len())
        .max()
        .unwrap_or(1)
        .max(3);

    print!("{:width$}", "");
    for label in labels {
        print!(" {label:>width$}");
    }
    println!();

    for (i, from) in labels.iter().enumerate() {
        print!("{from:width$}");
        for j in 0..labels.len() {
            let d = distances.get(i, j);
            if d.is_infinite() {
                print!(" {:>width$}", "inf");
            } else {
                print!(" {d:>width$}");
            }
        }
        println!();
    }
}
