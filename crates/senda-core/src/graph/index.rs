//! Vertex indexing shared by the solvers
//!
//! Solvers work on dense vertex indices instead of string labels; this
//! keeps frontier entries, distance tables, and matrices compact. The
//! index order is the graph's vertex insertion order, so index-based
//! iteration preserves the reproducibility guarantees of the store.

use std::collections::HashMap;

use crate::error::{Result, SendaError};
use crate::graph::store::WeightedGraph;

/// Bidirectional mapping between vertex labels and dense indices
#[derive(Debug, Clone)]
pub struct VertexIndex {
    labels: Vec<String>,
    by_label: HashMap<String, usize>,
}

impl VertexIndex {
    pub fn from_graph(graph: &WeightedGraph) -> Self {
        let labels: Vec<String> = graph.vertices().to_vec();
        let by_label = labels
            .iter()
            .enumerate()
            .map(|(i, v)| (v.clone(), i))
            .collect();
        Self { labels, by_label }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn label(&self, index: usize) -> &str {
        &self.labels[index]
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn get(&self, label: &str) -> Option<usize> {
        self.by_label.get(label).copied()
    }

    /// Resolve a label, failing with `VertexNotFound` when absent
    pub fn require(&self, label: &str) -> Result<usize> {
        self.get(label).ok_or_else(|| SendaError::VertexNotFound {
            vertex: label.to_string(),
        })
    }

    /// Adjacency lists re-expressed over indices, entry order preserved
    pub fn indexed_adjacency(&self, graph: &WeightedGraph) -> Vec<Vec<(usize, f64)>> {
        self.labels
            .iter()
            .map(|v| {
                graph
                    .adjacent_vertices(v)
                    .map(|entries| {
                        entries
                            .iter()
                            .map(|(to, w)| (self.by_label[to], *w))
                            .collect()
                    })
                    .unwrap_or_default()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_follows_insertion_order() {
        let mut g = WeightedGraph::undirected();
        for v in ["C", "A", "B"] {
            g.add_vertex(v).unwrap();
        }
        g.add_edge("C", "B", 2.0).unwrap();

        let index = VertexIndex::from_graph(&g);
        assert_eq!(index.labels(), &["C", "A", "B"]);
        assert_eq!(index.get("B"), Some(2));
        assert!(index.require("Z").is_err());

        let adj = index.indexed_adjacency(&g);
        assert_eq!(adj[0], vec![(2, 2.0)]);
        assert_eq!(adj[1], vec![]);
        assert_eq!(adj[2], vec![(0, 2.0)]);
    }
}
