//! `senda search` - frontier path search

use senda_core::control::RunControl;
use senda_core::error::Result;
use senda_core::graph::{search, Discipline, WeightedGraph};

use crate::cli::{Cli, OutputFormat};

pub fn run(
    cli: &Cli,
    graph: &WeightedGraph,
    start: &str,
    goal: &str,
    discipline: Discipline,
    control: &RunControl,
) -> Result<()> {
    let result = search(graph, start, goal, discipline, control)?;

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Human => {
            if result.found {
                println!("path: {}", result.path.join(" -> "));
                println!("cost: {}", result.cost);
            } else {
                println!("no path from {} to {}", result.start, result.goal);
            }
            if !cli.quiet {
                println!("expanded: {}", result.expanded);
            }
        }
    }

    Ok(())
}
