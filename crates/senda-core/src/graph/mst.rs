//! Minimum spanning tree builders (Prim, Kruskal)
//!
//! Both consume an undirected graph and report the selected edges plus
//! their total weight. On a connected graph the two methods yield equal
//! total weight (the edge sets may differ). On a disconnected graph the
//! result is a partial forest, flagged `spanning: false` and logged as
//! a warning rather than treated as an error.

use serde::Serialize;

use crate::error::{Result, SendaError};
use crate::graph::index::VertexIndex;
use crate::graph::store::WeightedGraph;
use crate::graph::union_find::UnionFind;

/// MST construction method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MstMethod {
    Prim,
    Kruskal,
}

#[derive(Debug, Clone, Serialize)]
pub struct MstEdge {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MstResult {
    pub method: MstMethod,
    pub edges: Vec<MstEdge>,
    pub cost: f64,
    /// False when the graph is disconnected and the edges form a
    /// partial forest instead of a spanning tree
    pub spanning: bool,
}

/// Build a minimum spanning tree of an undirected graph
#[tracing::instrument(skip(graph), fields(method = ?method))]
pub fn mst(graph: &WeightedGraph, method: MstMethod) -> Result<MstResult> {
    if graph.is_directed() {
        return Err(SendaError::DirectedUnsupported {
            operation: "minimum spanning tree".to_string(),
        });
    }

    let index = VertexIndex::from_graph(graph);
    let edges = match method {
        MstMethod::Prim => prim(graph, &index),
        MstMethod::Kruskal => kruskal(graph, &index),
    };

    let cost = edges.iter().map(|e| e.weight).sum();
    let spanning = edges.len() == index.len().saturating_sub(1);
    if !spanning {
        tracing::warn!(
            vertices = index.len(),
            edges = edges.len(),
            "graph is disconnected; returning a partial forest"
        );
    }

    Ok(MstResult {
        method,
        edges,
        cost,
        spanning,
    })
}

/// Greedy frontier growth from the first vertex: repeatedly take the
/// globally cheapest edge leaving the selected set. O(V^2) scan, no
/// decrease-key heap.
fn prim(graph: &WeightedGraph, index: &VertexIndex) -> Vec<MstEdge> {
    let n = index.len();
    if n == 0 {
        return Vec::new();
    }

    let adjacency = index.indexed_adjacency(graph);
    let mut selected = vec![false; n];
    selected[0] = true;
    let mut remaining = n - 1;
    let mut edges = Vec::new();

    while remaining > 0 {
        let mut best: Option<(usize, usize, f64)> = None;

        for u in 0..n {
            if !selected[u] {
                continue;
            }
            for &(v, w) in &adjacency[u] {
                if selected[v] {
                    continue;
                }
                // Strict improvement keeps the first-found edge on ties
                if best.is_none_or(|(_, _, bw)| w < bw) {
                    best = Some((u, v, w));
                }
            }
        }

        // No edge leaves the selected set: remaining vertices are
        // unreachable, stop with a partial tree
        let Some((u, v, w)) = best else {
            break;
        };

        selected[v] = true;
        remaining -= 1;
        edges.push(MstEdge {
            from: index.label(u).to_string(),
            to: index.label(v).to_string(),
            weight: w,
        });
    }

    edges
}

/// Global edge sort plus disjoint-set union: an edge joins the tree
/// only when its endpoints were in different components.
fn kruskal(graph: &WeightedGraph, index: &VertexIndex) -> Vec<MstEdge> {
    let mut all_edges = graph.edges();
    all_edges.sort_by(|a, b| {
        a.2.total_cmp(&b.2)
            .then_with(|| a.0.cmp(&b.0))
            .then_with(|| a.1.cmp(&b.1))
    });

    let mut dsu = UnionFind::new(index.len());
    let mut edges = Vec::new();

    for (from, to, weight) in all_edges {
        let u = index.get(&from).expect("edge endpoint is a vertex");
        let v = index.get(&to).expect("edge endpoint is a vertex");
        if dsu.union(u, v) {
            edges.push(MstEdge { from, to, weight });
        }
    }

    edges
}
