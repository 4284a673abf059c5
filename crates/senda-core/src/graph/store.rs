//! Adjacency-list weighted graph
//!
//! The single shared data structure behind every solver. Vertices are
//! opaque string labels; adjacency entries are kept in insertion order,
//! which DFS and the TSP solvers rely on for reproducible expansion
//! order. In an undirected graph every inserted edge is mirrored as two
//! directed adjacency entries with identical weight, and that mirroring
//! holds after every mutation.
//!
//! Parallel edges between the same vertices are allowed as long as
//! their weights differ; the `(neighbor, weight)` pair is the identity
//! of an adjacency entry.

use std::collections::HashMap;

use crate::error::{Result, SendaError};

/// A weighted graph, directed or undirected (fixed at construction)
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph {
    directed: bool,
    /// Vertex labels in insertion order
    order: Vec<String>,
    adjacency: HashMap<String, Vec<(String, f64)>>,
}

impl WeightedGraph {
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            order: Vec::new(),
            adjacency: HashMap::new(),
        }
    }

    pub fn undirected() -> Self {
        Self::new(false)
    }

    pub fn directed() -> Self {
        Self::new(true)
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Remove all vertices and edges, keeping the directedness flag
    pub fn clear(&mut self) {
        self.order.clear();
        self.adjacency.clear();
    }

    pub fn vertex_count(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains_vertex(&self, v: &str) -> bool {
        self.adjacency.contains_key(v)
    }

    /// Vertex labels in insertion order
    pub fn vertices(&self) -> &[String] {
        &self.order
    }

    /// Add a vertex with no edges
    pub fn add_vertex(&mut self, v: impl Into<String>) -> Result<()> {
        let v = v.into();
        if self.adjacency.contains_key(&v) {
            return Err(SendaError::DuplicateVertex { vertex: v });
        }
        self.adjacency.insert(v.clone(), Vec::new());
        self.order.push(v);
        Ok(())
    }

    /// Remove a vertex and every edge referencing it
    pub fn remove_vertex(&mut self, v: &str) -> Result<()> {
        if self.adjacency.remove(v).is_none() {
            return Err(SendaError::VertexNotFound {
                vertex: v.to_string(),
            });
        }
        self.order.retain(|u| u != v);
        for entries in self.adjacency.values_mut() {
            entries.retain(|(to, _)| to != v);
        }
        Ok(())
    }

    /// Add an edge between two existing vertices.
    ///
    /// Undirected graphs mirror the edge in both adjacency lists and
    /// reject self-loops. Duplicate `(to, weight)` entries and negative
    /// weights are rejected for either directedness.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: f64) -> Result<()> {
        self.require_vertex(from)?;
        self.require_vertex(to)?;

        if !self.directed && from == to {
            return Err(SendaError::SelfLoop {
                vertex: from.to_string(),
            });
        }

        if weight < 0.0 || !weight.is_finite() {
            return Err(SendaError::NegativeWeight {
                from: from.to_string(),
                to: to.to_string(),
                weight,
            });
        }

        if self.entry_exists(from, to, weight) {
            return Err(SendaError::DuplicateEdge {
                from: from.to_string(),
                to: to.to_string(),
                weight,
            });
        }

        self.adjacency
            .get_mut(from)
            .expect("checked above")
            .push((to.to_string(), weight));
        if !self.directed {
            self.adjacency
                .get_mut(to)
                .expect("checked above")
                .push((from.to_string(), weight));
        }
        Ok(())
    }

    /// Remove an edge. The weight is part of the edge identity, so only
    /// the exact `(from, to, weight)` entry (and its mirror, for
    /// undirected graphs) is removed. Returns whether anything matched.
    pub fn remove_edge(&mut self, from: &str, to: &str, weight: f64) -> Result<bool> {
        self.require_vertex(from)?;
        self.require_vertex(to)?;

        let removed = Self::retain_entries(self.adjacency.get_mut(from), to, weight);
        if !self.directed {
            Self::retain_entries(self.adjacency.get_mut(to), from, weight);
        }
        Ok(removed)
    }

    /// All edges as `(from, to, weight)`. For undirected graphs each
    /// mirrored pair appears once, oriented by vertex insertion order.
    pub fn edges(&self) -> Vec<(String, String, f64)> {
        let index: HashMap<&str, usize> = self
            .order
            .iter()
            .enumerate()
            .map(|(i, v)| (v.as_str(), i))
            .collect();

        let mut result = Vec::new();
        for from in &self.order {
            for (to, weight) in &self.adjacency[from] {
                if !self.directed && index[from.as_str()] > index[to.as_str()] {
                    continue;
                }
                result.push((from.clone(), to.clone(), *weight));
            }
        }
        result
    }

    /// Adjacency entries of a vertex, in insertion order
    pub fn adjacent_vertices(&self, v: &str) -> Result<&[(String, f64)]> {
        self.adjacency
            .get(v)
            .map(Vec::as_slice)
            .ok_or_else(|| SendaError::VertexNotFound {
                vertex: v.to_string(),
            })
    }

    /// Whether an edge from `from` to `to` exists (any weight)
    pub fn is_adjacent(&self, from: &str, to: &str) -> Result<bool> {
        self.require_vertex(to)?;
        Ok(self
            .adjacent_vertices(from)?
            .iter()
            .any(|(neighbor, _)| neighbor == to))
    }

    fn require_vertex(&self, v: &str) -> Result<()> {
        if self.adjacency.contains_key(v) {
            Ok(())
        } else {
            Err(SendaError::VertexNotFound {
                vertex: v.to_string(),
            })
        }
    }

    fn entry_exists(&self, from: &str, to: &str, weight: f64) -> bool {
        self.adjacency[from]
            .iter()
            .any(|(neighbor, w)| neighbor == to && *w == weight)
    }

    fn retain_entries(entries: Option<&mut Vec<(String, f64)>>, to: &str, weight: f64) -> bool {
        let Some(entries) = entries else {
            return false;
        };
        let before = entries.len();
        entries.retain(|(neighbor, w)| !(neighbor == to && *w == weight));
        entries.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc_graph(directed: bool) -> WeightedGraph {
        let mut g = WeightedGraph::new(directed);
        for v in ["A", "B", "C"] {
            g.add_vertex(v).unwrap();
        }
        g
    }

    #[test]
    fn test_add_vertex_rejects_duplicate() {
        let mut g = WeightedGraph::undirected();
        g.add_vertex("A").unwrap();
        assert!(matches!(
            g.add_vertex("A"),
            Err(SendaError::DuplicateVertex { .. })
        ));
        assert_eq!(g.vertex_count(), 1);
    }

    #[test]
    fn test_undirected_edge_is_mirrored() {
        let mut g = abc_graph(false);
        g.add_edge("A", "B", 2.0).unwrap();

        assert_eq!(g.adjacent_vertices("A").unwrap(), &[("B".to_string(), 2.0)]);
        assert_eq!(g.adjacent_vertices("B").unwrap(), &[("A".to_string(), 2.0)]);
        assert!(g.is_adjacent("A", "B").unwrap());
        assert!(g.is_adjacent("B", "A").unwrap());
    }

    #[test]
    fn test_directed_edge_is_one_way() {
        let mut g = abc_graph(true);
        g.add_edge("A", "B", 2.0).unwrap();

        assert!(g.is_adjacent("A", "B").unwrap());
        assert!(!g.is_adjacent("B", "A").unwrap());
    }

    #[test]
    fn test_edge_to_missing_vertex() {
        let mut g = abc_graph(false);
        assert!(matches!(
            g.add_edge("A", "Z", 1.0),
            Err(SendaError::VertexNotFound { .. })
        ));
    }

    #[test]
    fn test_undirected_self_loop_rejected() {
        let mut g = abc_graph(false);
        assert!(matches!(
            g.add_edge("A", "A", 1.0),
            Err(SendaError::SelfLoop { .. })
        ));

        // Directed graphs may have self-loops
        let mut g = abc_graph(true);
        g.add_edge("A", "A", 1.0).unwrap();
    }

    #[test]
    fn test_duplicate_edge_rejected_but_parallel_weights_allowed() {
        let mut g = abc_graph(false);
        g.add_edge("A", "B", 1.0).unwrap();
        assert!(matches!(
            g.add_edge("A", "B", 1.0),
            Err(SendaError::DuplicateEdge { .. })
        ));
        // Same endpoints, different weight: a distinct edge
        g.add_edge("A", "B", 3.0).unwrap();
        assert_eq!(g.adjacent_vertices("A").unwrap().len(), 2);
    }

    #[test]
    fn test_negative_weight_rejected() {
        let mut g = abc_graph(false);
        assert!(matches!(
            g.add_edge("A", "B", -1.0),
            Err(SendaError::NegativeWeight { .. })
        ));
    }

    #[test]
    fn test_edges_deduplicated_for_undirected() {
        let mut g = abc_graph(false);
        g.add_edge("A", "B", 1.0).unwrap();
        g.add_edge("B", "C", 2.0).unwrap();

        let edges = g.edges();
        assert_eq!(
            edges,
            vec![
                ("A".to_string(), "B".to_string(), 1.0),
                ("B".to_string(), "C".to_string(), 2.0),
            ]
        );
    }

    #[test]
    fn test_edges_directed_lists_both_directions() {
        let mut g = abc_graph(true);
        g.add_edge("A", "B", 1.0).unwrap();
        g.add_edge("B", "A", 4.0).unwrap();
        assert_eq!(g.edges().len(), 2);
    }

    #[test]
    fn test_remove_vertex_purges_edges() {
        let mut g = abc_graph(false);
        g.add_edge("A", "B", 1.0).unwrap();
        g.add_edge("B", "C", 2.0).unwrap();

        g.remove_vertex("B").unwrap();
        assert!(!g.contains_vertex("B"));
        assert_eq!(g.adjacent_vertices("A").unwrap(), &[]);
        assert_eq!(g.adjacent_vertices("C").unwrap(), &[]);
        assert_eq!(g.vertices(), &["A".to_string(), "C".to_string()]);
    }

    #[test]
    fn test_remove_edge_matches_exact_weight() {
        let mut g = abc_graph(false);
        g.add_edge("A", "B", 1.0).unwrap();
        g.add_edge("A", "B", 3.0).unwrap();

        assert!(g.remove_edge("A", "B", 1.0).unwrap());
        assert_eq!(g.adjacent_vertices("A").unwrap(), &[("B".to_string(), 3.0)]);
        // Mirror removed too
        assert_eq!(g.adjacent_vertices("B").unwrap(), &[("A".to_string(), 3.0)]);
        // No matching entry: no-op, reported as false
        assert!(!g.remove_edge("A", "B", 9.0).unwrap());
    }

    #[test]
    fn test_clear_keeps_directedness() {
        let mut g = abc_graph(true);
        g.add_edge("A", "B", 1.0).unwrap();
        g.clear();
        assert!(g.is_empty());
        assert!(g.is_directed());
    }

    #[test]
    fn test_adjacency_preserves_insertion_order() {
        let mut g = WeightedGraph::undirected();
        for v in ["A", "D", "B", "C"] {
            g.add_vertex(v).unwrap();
        }
        g.add_edge("A", "D", 1.0).unwrap();
        g.add_edge("A", "B", 1.0).unwrap();
        g.add_edge("A", "C", 1.0).unwrap();

        let neighbors: Vec<&str> = g
            .adjacent_vertices("A")
            .unwrap()
            .iter()
            .map(|(v, _)| v.as_str())
            .collect();
        assert_eq!(neighbors, vec!["D", "B", "C"]);
    }
}
