//! JSON graph file loading
//!
//! A graph file is a single JSON object:
//!
//! ```json
//! {
//!   "directed": false,
//!   "vertices": ["A", "B", "C"],
//!   "edges": [["A", "B", 1.0], ["B", "C", 2.5]]
//! }
//! ```
//!
//! `vertices` may list isolated vertices; endpoints named only in
//! `edges` are added implicitly, in file order.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use senda_core::error::{Result, SendaError};
use senda_core::graph::WeightedGraph;

#[derive(Debug, Deserialize)]
pub struct GraphFile {
    #[serde(default)]
    pub directed: bool,
    #[serde(default)]
    pub vertices: Vec<String>,
    #[serde(default)]
    pub edges: Vec<(String, String, f64)>,
}

/// Load and validate a graph from a JSON file
#[tracing::instrument]
pub fn load(path: &Path) -> Result<WeightedGraph> {
    let contents = fs::read_to_string(path).map_err(|e| SendaError::InvalidGraphFile {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let file: GraphFile =
        serde_json::from_str(&contents).map_err(|e| SendaError::InvalidGraphFile {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

    // Every structural complaint about the file's contents carries the
    // file path, like the read and parse failures above
    build(&file).map_err(|e| SendaError::InvalidGraphFile {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

fn build(file: &GraphFile) -> Result<WeightedGraph> {
    let mut graph = WeightedGraph::new(file.directed);

    for vertex in &file.vertices {
        graph.add_vertex(vertex.clone())?;
    }

    for (from, to, weight) in &file.edges {
        if !graph.contains_vertex(from) {
            graph.add_vertex(from.clone())?;
        }
        if !graph.contains_vertex(to) {
            graph.add_vertex(to.clone())?;
        }
        graph.add_edge(from, to, *weight)?;
    }

    tracing::debug!(
        vertices = graph.vertex_count(),
        edges = file.edges.len(),
        directed = file.directed,
        "graph_loaded"
    );

    Ok(graph)
}
