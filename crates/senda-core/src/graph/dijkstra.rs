//! Single-source shortest paths (Dijkstra)
//!
//! Label-correcting implementation over an append-only binary heap:
//! instead of decrease-key, improved distances push a fresh entry and
//! stale entries are discarded when popped (their recorded cost exceeds
//! the best known distance). Assumes non-negative weights, which the
//! graph store enforces at construction.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};

use serde::Serialize;

use crate::error::Result;
use crate::graph::index::VertexIndex;
use crate::graph::store::WeightedGraph;

/// Min-heap entry ordered by accumulated cost
#[derive(Debug, Clone, Copy, PartialEq)]
struct HeapEntry {
    cost: f64,
    vertex: usize,
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// Distances and parents for every vertex reachable from the source.
/// Unreachable vertices keep infinite distance and no parent.
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPaths {
    pub source: String,
    pub distances: HashMap<String, f64>,
    pub parents: HashMap<String, Option<String>>,
}

impl ShortestPaths {
    /// Reconstruct the shortest path to `goal` by walking parents back
    /// to the source. `None` when the goal is unreachable or unknown.
    pub fn path_to(&self, goal: &str) -> Option<(Vec<String>, f64)> {
        let distance = *self.distances.get(goal)?;
        if distance.is_infinite() {
            return None;
        }

        let mut path = vec![goal.to_string()];
        let mut current = goal;
        while let Some(Some(parent)) = self.parents.get(current) {
            path.push(parent.clone());
            current = parent;
        }
        path.reverse();
        Some((path, distance))
    }
}

/// Compute shortest distances and parents from `source` to every vertex
#[tracing::instrument(skip(graph))]
pub fn dijkstra(graph: &WeightedGraph, source: &str) -> Result<ShortestPaths> {
    let index = VertexIndex::from_graph(graph);
    let source_idx = index.require(source)?;
    let adjacency = index.indexed_adjacency(graph);

    let mut dist = vec![f64::INFINITY; index.len()];
    let mut parent: Vec<Option<usize>> = vec![None; index.len()];
    let mut heap = BinaryHeap::new();

    dist[source_idx] = 0.0;
    heap.push(Reverse(HeapEntry {
        cost: 0.0,
        vertex: source_idx,
    }));

    while let Some(Reverse(HeapEntry { cost, vertex })) = heap.pop() {
        // Lazy deletion: a better distance was recorded after this
        // entry was pushed
        if cost > dist[vertex] {
            continue;
        }

        for &(neighbor, weight) in &adjacency[vertex] {
            let next_cost = cost + weight;
            if next_cost < dist[neighbor] {
                dist[neighbor] = next_cost;
                parent[neighbor] = Some(vertex);
                heap.push(Reverse(HeapEntry {
                    cost: next_cost,
                    vertex: neighbor,
                }));
            } else if weight > 0.0 && next_cost == dist[neighbor] {
                // Equal-cost relaxation: re-point the parent at the
                // later relaxer so the parent tree follows the
                // last-settled predecessor. The distance is unchanged,
                // so no heap entry is needed. Zero-weight edges are
                // excluded: repointing across them could close a
                // parent cycle between equidistant vertices.
                parent[neighbor] = Some(vertex);
            }
        }
    }

    let distances = index
        .labels()
        .iter()
        .enumerate()
        .map(|(i, v)| (v.clone(), dist[i]))
        .collect();
    let parents = index
        .labels()
        .iter()
        .enumerate()
        .map(|(i, v)| (v.clone(), parent[i].map(|p| index.label(p).to_string())))
        .collect();

    Ok(ShortestPaths {
        source: source.to_string(),
        distances,
        parents,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SendaError;

    fn cycle_with_chord() -> WeightedGraph {
        let mut g = WeightedGraph::undirected();
        for v in ["A", "B", "C", "D"] {
            g.add_vertex(v).unwrap();
        }
        g.add_edge("A", "B", 1.0).unwrap();
        g.add_edge("B", "C", 2.0).unwrap();
        g.add_edge("C", "D", 1.0).unwrap();
        g.add_edge("D", "A", 4.0).unwrap();
        g.add_edge("A", "C", 10.0).unwrap();
        g
    }

    #[test]
    fn test_dijkstra_cycle_with_chord() {
        let result = dijkstra(&cycle_with_chord(), "A").unwrap();

        assert_eq!(result.distances["A"], 0.0);
        assert_eq!(result.distances["B"], 1.0);
        assert_eq!(result.distances["C"], 3.0);
        assert_eq!(result.distances["D"], 4.0);

        assert_eq!(result.parents["A"], None);
        assert_eq!(result.parents["B"], Some("A".to_string()));
        assert_eq!(result.parents["C"], Some("B".to_string()));
        assert_eq!(result.parents["D"], Some("C".to_string()));
    }

    #[test]
    fn test_path_reconstruction() {
        let result = dijkstra(&cycle_with_chord(), "A").unwrap();
        let (path, cost) = result.path_to("D").unwrap();
        assert_eq!(path, vec!["A", "B", "C", "D"]);
        assert_eq!(cost, 4.0);
    }

    #[test]
    fn test_equal_cost_relaxation_follows_later_parent() {
        // D is reachable at cost 4 both directly (A-D) and through C;
        // the parent must follow the path settled through C
        let result = dijkstra(&cycle_with_chord(), "A").unwrap();
        assert_eq!(result.parents["D"], Some("C".to_string()));
        let (path, _) = result.path_to("D").unwrap();
        assert_eq!(path, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_zero_weight_edges_keep_parents_acyclic() {
        // Both endpoints of a zero-weight edge sit at distance 0;
        // repointing across it must never loop the parent chain
        let mut g = WeightedGraph::undirected();
        for v in ["A", "B", "C"] {
            g.add_vertex(v).unwrap();
        }
        g.add_edge("A", "B", 0.0).unwrap();
        g.add_edge("B", "C", 0.0).unwrap();

        let result = dijkstra(&g, "A").unwrap();
        assert_eq!(result.parents["A"], None);
        assert_eq!(result.parents["B"], Some("A".to_string()));
        assert_eq!(result.path_to("C").unwrap().0, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_unreachable_vertex_keeps_infinity() {
        let mut g = WeightedGraph::directed();
        for v in ["A", "B", "C"] {
            g.add_vertex(v).unwrap();
        }
        g.add_edge("A", "B", 1.0).unwrap();
        g.add_edge("C", "A", 1.0).unwrap(); // C reaches A, not vice versa

        let result = dijkstra(&g, "A").unwrap();
        assert!(result.distances["C"].is_infinite());
        assert_eq!(result.parents["C"], None);
        assert!(result.path_to("C").is_none());
    }

    #[test]
    fn test_single_vertex_graph() {
        let mut g = WeightedGraph::undirected();
        g.add_vertex("A").unwrap();
        let result = dijkstra(&g, "A").unwrap();
        assert_eq!(result.distances["A"], 0.0);
        assert_eq!(result.path_to("A").unwrap(), (vec!["A".to_string()], 0.0));
    }

    #[test]
    fn test_missing_source_is_an_error() {
        let g = cycle_with_chord();
        assert!(matches!(
            dijkstra(&g, "Z").unwrap_err(),
            SendaError::VertexNotFound { .. }
        ));
    }
}
