//! `senda dijkstra` - single-source shortest paths

use senda_core::error::{Result, SendaError};
use senda_core::graph::{dijkstra, WeightedGraph};

use crate::cli::{Cli, OutputFormat};

pub fn run(cli: &Cli, graph: &WeightedGraph, source: &str, to: Option<&str>) -> Result<()> {
    let paths = dijkstra(graph, source)?;

    if let Some(goal) = to {
        if !graph.contains_vertex(goal) {
            return Err(SendaError::VertexNotFound {
                vertex: goal.to_string(),
            });
        }

        return match paths.path_to(goal) {
            Some((path, cost)) => {
                match cli.format {
                    OutputFormat::Json => {
                        let value = serde_json::json!({
                            "source": source,
                            "goal": goal,
                            "found": true,
                            "path": path,
                            "cost": cost,
                        });
                        println!("{}", serde_json::to_string_pretty(&value)?);
                    }
                    OutputFormat::Human => {
                        println!("path: {}", path.join(" -> "));
                        println!("cost: {cost}");
                    }
                }
                Ok(())
            }
            None => {
                match cli.format {
                    OutputFormat::Json => {
                        let value = serde_json::json!({
                            "source": source,
                            "goal": goal,
                            "found": false,
                        });
                        println!("{}", serde_json::to_string_pretty(&value)?);
                    }
                    OutputFormat::Human => println!("no path from {source} to {goal}"),
                }
                Ok(())
            }
        };
    }

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&paths)?),
        OutputFormat::Human => {
            // Stable output order follows graph insertion order
            for vertex in graph.vertices() {
                let distance = paths.distances[vertex];
                if distance.is_infinite() {
                    println!("{vertex}: unreachable");
                } else {
                    println!("{vertex}: {distance}");
                }
            }
        }
    }

    Ok(())
}
