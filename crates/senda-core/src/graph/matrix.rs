//! Dense cost matrix for the all-pairs solver and TSP bounding
//!
//! `f64::INFINITY` is the "no edge" sentinel, so a genuine zero-weight
//! edge is representable and distinct from non-adjacency. The diagonal
//! is always zero.

use serde::Serialize;

use crate::error::{Result, SendaError};
use crate::graph::index::VertexIndex;
use crate::graph::store::WeightedGraph;

/// Square matrix of edge costs with vertex labels attached
#[derive(Debug, Clone, Serialize)]
pub struct CostMatrix {
    labels: Vec<String>,
    /// Row-major n*n values
    values: Vec<f64>,
}

impl CostMatrix {
    /// Matrix with a zero diagonal and no edges
    pub fn no_edges(labels: Vec<String>) -> Self {
        let n = labels.len();
        let mut matrix = Self {
            labels,
            values: vec![f64::INFINITY; n * n],
        };
        for i in 0..n {
            matrix.set(i, i, 0.0);
        }
        matrix
    }

    /// Dense view of a graph's adjacency. Parallel edges collapse to
    /// their cheapest weight.
    pub fn from_graph(graph: &WeightedGraph) -> Self {
        let index = VertexIndex::from_graph(graph);
        let adjacency = index.indexed_adjacency(graph);
        let mut matrix = Self::no_edges(index.labels().to_vec());

        for (i, entries) in adjacency.iter().enumerate() {
            for &(j, weight) in entries {
                if i != j && weight < matrix.get(i, j) {
                    matrix.set(i, j, weight);
                }
            }
        }
        matrix
    }

    /// Build from explicit rows, validating shape and contents: square,
    /// zero diagonal, and every entry either a non-negative finite
    /// weight or the `f64::INFINITY` no-edge sentinel.
    pub fn from_rows(labels: Vec<String>, rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = labels.len();
        if rows.len() != n {
            return Err(SendaError::InvalidMatrix {
                reason: format!("expected {} rows, got {}", n, rows.len()),
            });
        }

        let mut values = Vec::with_capacity(n * n);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(SendaError::InvalidMatrix {
                    reason: format!("row {} has {} entries, expected {}", i, row.len(), n),
                });
            }
            for (j, &value) in row.iter().enumerate() {
                if i == j && value != 0.0 {
                    return Err(SendaError::InvalidMatrix {
                        reason: format!("diagonal entry ({i}, {i}) must be zero, got {value}"),
                    });
                }
                if value.is_nan() || value < 0.0 {
                    return Err(SendaError::InvalidMatrix {
                        reason: format!("entry ({i}, {j}) is not a non-negative weight: {value}"),
                    });
                }
                values.push(value);
            }
        }

        Ok(Self { labels, values })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.labels.len() + j]
    }

    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        let n = self.labels.len();
        self.values[i * n + j] = value;
    }

    /// Entry looked up by labels; infinite means no connectivity
    pub fn cost_between(&self, from: &str, to: &str) -> Result<f64> {
        let i = self.position(from)?;
        let j = self.position(to)?;
        Ok(self.get(i, j))
    }

    fn position(&self, label: &str) -> Result<usize> {
        self.labels
            .iter()
            .position(|v| v == label)
            .ok_or_else(|| SendaError::VertexNotFound {
                vertex: label.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_from_graph_dense_view() {
        let mut g = WeightedGraph::undirected();
        for v in ["A", "B", "C"] {
            g.add_vertex(v).unwrap();
        }
        g.add_edge("A", "B", 2.0).unwrap();

        let m = CostMatrix::from_graph(&g);
        assert_eq!(m.len(), 3);
        assert_eq!(m.get(0, 0), 0.0);
        assert_eq!(m.cost_between("A", "B").unwrap(), 2.0);
        assert_eq!(m.cost_between("B", "A").unwrap(), 2.0);
        assert!(m.cost_between("A", "C").unwrap().is_infinite());
    }

    #[test]
    fn test_parallel_edges_collapse_to_cheapest() {
        let mut g = WeightedGraph::undirected();
        g.add_vertex("A").unwrap();
        g.add_vertex("B").unwrap();
        g.add_edge("A", "B", 5.0).unwrap();
        g.add_edge("A", "B", 2.0).unwrap();

        let m = CostMatrix::from_graph(&g);
        assert_eq!(m.cost_between("A", "B").unwrap(), 2.0);
    }

    #[test]
    fn test_zero_weight_edge_distinct_from_no_edge() {
        let mut g = WeightedGraph::directed();
        g.add_vertex("A").unwrap();
        g.add_vertex("B").unwrap();
        g.add_edge("A", "B", 0.0).unwrap();

        let m = CostMatrix::from_graph(&g);
        assert_eq!(m.cost_between("A", "B").unwrap(), 0.0);
        assert!(m.cost_between("B", "A").unwrap().is_infinite());
    }

    #[test]
    fn test_from_rows_validation() {
        // Non-square
        assert!(CostMatrix::from_rows(labels(&["A", "B"]), vec![vec![0.0, 1.0]]).is_err());
        // Non-zero diagonal
        assert!(CostMatrix::from_rows(
            labels(&["A", "B"]),
            vec![vec![1.0, 1.0], vec![1.0, 0.0]]
        )
        .is_err());
        // Negative entry
        assert!(CostMatrix::from_rows(
            labels(&["A", "B"]),
            vec![vec![0.0, -1.0], vec![1.0, 0.0]]
        )
        .is_err());
        // Infinity is the legal no-edge sentinel
        let m = CostMatrix::from_rows(
            labels(&["A", "B"]),
            vec![vec![0.0, f64::INFINITY], vec![1.0, 0.0]],
        )
        .unwrap();
        assert!(m.get(0, 1).is_infinite());
    }
}
