//! `senda tsp` - exact travelling-salesman tour

use senda_core::control::RunControl;
use senda_core::error::Result;
use senda_core::graph::{tsp_branch_bound, tsp_ucs, WeightedGraph};

use crate::cli::{Cli, OutputFormat, TspSolver};

pub fn run(
    cli: &Cli,
    graph: &WeightedGraph,
    start: &str,
    solver: TspSolver,
    control: &RunControl,
) -> Result<()> {
    let tour = match solver {
        TspSolver::Ucs => tsp_ucs(graph, start, control)?,
        TspSolver::Bnb => tsp_branch_bound(graph, start, control)?,
    };

    match (cli.format, tour) {
        (OutputFormat::Json, Some(tour)) => {
            println!("{}", serde_json::to_string_pretty(&tour)?);
        }
        (OutputFormat::Json, None) => {
            let value = serde_json::json!({ "start": start, "found": false });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        (OutputFormat::Human, Some(tour)) => {
            println!("tour: {}", tour.tour.join(" -> "));
            println!("cost: {}", tour.cost);
            if !cli.quiet {
                println!("expanded: {}", tour.expanded);
            }
        }
        (OutputFormat::Human, None) => {
            println!("no tour from {start} visits every vertex and returns");
        }
    }

    Ok(())
}
