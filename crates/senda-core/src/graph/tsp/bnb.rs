//! Exact TSP by branch and bound with reduced-matrix bounds
//!
//! The root bound is the reduction sum of the full cost matrix. Each
//! branch node owns a private copy of the reduced matrix with the rows,
//! columns, and vertex pairs of its partial path masked to infinity;
//! taking an edge adds its reduced cost plus the child matrix's fresh
//! reduction sum, which keeps the bound admissible: it never exceeds
//! the true minimum completion cost reachable through the node. Nodes
//! whose bound is not strictly below the incumbent tour cost are
//! discarded, and because the frontier is ordered by ascending bound
//! the search stops as soon as no improving node remains.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::control::RunControl;
use crate::error::Result;
use crate::graph::matrix::CostMatrix;
use crate::graph::store::WeightedGraph;
use crate::graph::tsp::reduced::ReducedMatrix;
use crate::graph::tsp::{prepare, trivial_tour, Tour};

#[derive(Debug, Clone)]
struct BranchNode {
    vertex: usize,
    /// Real accumulated path cost
    cost: f64,
    /// Admissible lower bound on any tour through this node
    bound: f64,
    /// Bitmask of visited vertex indices
    visited: u64,
    /// Partial path from the start, as vertex indices
    path: Vec<usize>,
    matrix: ReducedMatrix,
}

struct FrontierEntry {
    bound: f64,
    tie: u64,
    node: BranchNode,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.bound == other.bound && self.tie == other.tie
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bound
            .total_cmp(&other.bound)
            .then_with(|| self.tie.cmp(&other.tie))
    }
}

/// Find the minimum-cost Hamiltonian cycle from `start` using
/// reduced-cost-matrix branch and bound, or `None` when no cycle exists
#[tracing::instrument(skip(graph, control))]
pub fn tsp_branch_bound(
    graph: &WeightedGraph,
    start: &str,
    control: &RunControl,
) -> Result<Option<Tour>> {
    let (index, start_idx) = prepare(graph, start, "tsp (branch and bound)")?;
    let n = index.len();
    if n == 1 {
        return Ok(Some(trivial_tour(start)));
    }

    let adjacency = index.indexed_adjacency(graph);

    let mut root_matrix = ReducedMatrix::from_cost_matrix(&CostMatrix::from_graph(graph));
    let root_bound = root_matrix.reduce();

    let mut frontier = BinaryHeap::new();
    let mut tie = 0u64;
    frontier.push(Reverse(FrontierEntry {
        bound: root_bound,
        tie,
        node: BranchNode {
            vertex: start_idx,
            cost: 0.0,
            bound: root_bound,
            visited: 1 << start_idx,
            path: vec![start_idx],
            matrix: root_matrix,
        },
    }));

    // Incumbent best complete tour, threaded explicitly through the loop
    let mut best: Option<(Vec<usize>, f64)> = None;
    let mut expanded = 0usize;

    while let Some(Reverse(entry)) = frontier.pop() {
        // Ascending bound order: once the cheapest bound cannot improve
        // on the incumbent, nothing remaining can
        if let Some((_, best_cost)) = &best {
            if entry.node.bound >= *best_cost {
                break;
            }
        }

        control.check(expanded)?;
        expanded += 1;

        let node = entry.node;
        for &(neighbor, weight) in &adjacency[node.vertex] {
            let closes_cycle = neighbor == start_idx && node.path.len() == n;

            if closes_cycle {
                let tour_cost = node.cost + weight;
                if best.as_ref().is_none_or(|(_, c)| tour_cost < *c) {
                    best = Some((node.path.clone(), tour_cost));
                }
                continue;
            }

            if node.visited & (1 << neighbor) != 0 {
                continue;
            }

            let child = derive_child(&node, neighbor, weight);
            if best.as_ref().is_none_or(|(_, c)| child.bound < *c) {
                tie += 1;
                frontier.push(Reverse(FrontierEntry {
                    bound: child.bound,
                    tie,
                    node: child,
                }));
            }
        }
    }

    let Some((path, cost)) = best else {
        tracing::debug!(expanded, "no Hamiltonian cycle from start");
        return Ok(None);
    };

    let mut tour: Vec<String> = path.iter().map(|&v| index.label(v).to_string()).collect();
    tour.push(start.to_string());
    tracing::debug!(cost, expanded, "optimal tour found");
    Ok(Some(Tour {
        start: start.to_string(),
        tour,
        cost,
        expanded,
    }))
}

/// Derive a child branch: mask the parent row, the child column, and
/// every visited pair, then re-reduce the private matrix copy
fn derive_child(parent: &BranchNode, neighbor: usize, weight: f64) -> BranchNode {
    // Reduced cost of the edge in the parent's matrix; the raw weight
    // only feeds the real path cost
    let reduced_edge = parent.matrix.get(parent.vertex, neighbor);

    let mut matrix = parent.matrix.clone();
    matrix.mask_row(parent.vertex);
    matrix.mask_col(neighbor);

    let mut path = parent.path.clone();
    path.push(neighbor);
    for (i, &a) in path.iter().enumerate() {
        for &b in &path[i + 1..] {
            matrix.mask_pair(a, b);
        }
    }

    let reduction = matrix.reduce();

    BranchNode {
        vertex: neighbor,
        cost: parent.cost + weight,
        bound: parent.bound + reduced_edge + reduction,
        visited: parent.visited | (1 << neighbor),
        path,
        matrix,
    }
}
