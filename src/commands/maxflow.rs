//! `senda maxflow` - maximum flow and minimum cut

use senda_core::error::Result;
use senda_core::graph::{FlowNetwork, WeightedGraph};

use crate::cli::{Cli, OutputFormat};

pub fn run(
    cli: &Cli,
    graph: &WeightedGraph,
    source: &str,
    sink: &str,
    want_min_cut: bool,
) -> Result<()> {
    let mut network = FlowNetwork::from_graph(graph);
    let flow = network.max_flow(source, sink)?;

    let cut = if want_min_cut && source != sink {
        Some(network.min_cut(source)?)
    } else {
        None
    };

    match cli.format {
        OutputFormat::Json => {
            let mut value = serde_json::json!({
                "source": source,
                "sink": sink,
                "flow": flow,
            });
            if let Some(cut) = &cut {
                value["min_cut"] = serde_json::to_value(cut)?;
            }
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Human => {
            println!("flow: {flow}");
            if let Some(cut) = &cut {
                for (from, to, capacity) in &cut.edges {
                    println!("cut: {from} -> {to} ({capacity})");
                }
            }
        }
    }

    Ok(())
}
