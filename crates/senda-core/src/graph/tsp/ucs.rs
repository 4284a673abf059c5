//! Exact TSP by uniform-cost search
//!
//! States are partial Hamiltonian paths: (current vertex, visited set,
//! accumulated cost), stored in an arena with parent links for tour
//! reconstruction. From the current vertex one may move to any adjacent
//! unvisited vertex, or close the cycle by returning to the start once
//! every vertex has been visited. Best-first expansion by accumulated
//! cost with the insertion tie counter guarantees the first complete
//! tour popped is globally optimal under non-negative weights.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::control::RunControl;
use crate::error::Result;
use crate::graph::store::WeightedGraph;
use crate::graph::tsp::{prepare, trivial_tour, Tour};

#[derive(Debug, Clone, Copy)]
struct TourNode {
    vertex: usize,
    parent: Option<usize>,
    cost: f64,
    /// Bitmask of visited vertex indices
    visited: u64,
    /// Number of path entries so far; a complete tour has n + 1
    depth: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct FrontierEntry {
    cost: f64,
    tie: u64,
    slot: usize,
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.tie.cmp(&other.tie))
    }
}

/// Find the minimum-cost Hamiltonian cycle from `start`, or `None` when
/// no such cycle exists
#[tracing::instrument(skip(graph, control))]
pub fn tsp_ucs(graph: &WeightedGraph, start: &str, control: &RunControl) -> Result<Option<Tour>> {
    let (index, start_idx) = prepare(graph, start, "tsp (uniform-cost)")?;
    let n = index.len();
    if n == 1 {
        return Ok(Some(trivial_tour(start)));
    }

    let adjacency = index.indexed_adjacency(graph);

    let mut arena = vec![TourNode {
        vertex: start_idx,
        parent: None,
        cost: 0.0,
        visited: 1 << start_idx,
        depth: 1,
    }];
    let mut frontier = BinaryHeap::new();
    let mut tie = 0u64;
    frontier.push(Reverse(FrontierEntry {
        cost: 0.0,
        tie,
        slot: 0,
    }));

    let mut expanded = 0usize;

    while let Some(Reverse(entry)) = frontier.pop() {
        let node = arena[entry.slot];

        if node.depth == n + 1 && node.vertex == start_idx {
            let tour = reconstruct_tour(&arena, &index, entry.slot);
            tracing::debug!(cost = node.cost, expanded, "optimal tour found");
            return Ok(Some(Tour {
                start: start.to_string(),
                tour,
                cost: node.cost,
                expanded,
            }));
        }

        control.check(expanded)?;
        expanded += 1;

        for &(neighbor, weight) in &adjacency[node.vertex] {
            let closes_cycle = neighbor == start_idx && node.depth == n;
            // The start may only reappear as the final closing move;
            // every other vertex at most once
            if !closes_cycle && node.visited & (1 << neighbor) != 0 {
                continue;
            }

            let child = TourNode {
                vertex: neighbor,
                parent: Some(entry.slot),
                cost: node.cost + weight,
                visited: node.visited | (1 << neighbor),
                depth: node.depth + 1,
            };
            arena.push(child);
            tie += 1;
            frontier.push(Reverse(FrontierEntry {
                cost: child.cost,
                tie,
                slot: arena.len() - 1,
            }));
        }
    }

    tracing::debug!(expanded, "no Hamiltonian cycle from start");
    Ok(None)
}

fn reconstruct_tour(
    arena: &[TourNode],
    index: &crate::graph::index::VertexIndex,
    mut slot: usize,
) -> Vec<String> {
    let mut tour = vec![index.label(arena[slot].vertex).to_string()];
    while let Some(parent) = arena[slot].parent {
        slot = parent;
        tour.push(index.label(arena[slot].vertex).to_string());
    }
    tour.reverse();
    tour
}
