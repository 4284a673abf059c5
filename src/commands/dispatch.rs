//! Command dispatch

use std::time::{Duration, Instant};

use senda_core::control::{CancellationToken, RunControl};
use senda_core::error::Result;

use crate::cli::{Cli, Command};
use crate::commands::{dijkstra, floyd, graph_file, maxflow, mst, search, tsp};

/// Load the graph, build the run control, and execute the subcommand
pub fn run(cli: &Cli, cancel: CancellationToken) -> Result<()> {
    let graph = graph_file::load(&cli.graph)?;
    let control = build_control(cli, cancel);

    match &cli.command {
        Command::Search {
            start,
            goal,
            discipline,
        } => search::run(cli, &graph, start, goal, (*discipline).into(), &control),
        Command::Dijkstra { source, to } => {
            dijkstra::run(cli, &graph, source, to.as_deref())
        }
        Command::Floyd => floyd::run(cli, &graph),
        Command::Mst { method } => mst::run(cli, &graph, (*method).into()),
        Command::Tsp { start, solver } => tsp::run(cli, &graph, start, *solver, &control),
        Command::Maxflow {
            source,
            sink,
            min_cut,
        } => maxflow::run(cli, &graph, source, sink, *min_cut),
    }
}

fn build_control(cli: &Cli, cancel: CancellationToken) -> RunControl {
    let mut control = RunControl::unbounded().with_cancel(cancel);
    if let Some(secs) = cli.timeout {
        control = control.with_deadline(Instant::now() + Duration::from_secs(secs));
    }
    if let Some(limit) = cli.max_expansions {
        control = control.with_max_expansions(limit as usize);
    }
    control
}
