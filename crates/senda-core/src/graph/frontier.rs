//! Frontier search engine: BFS, DFS, and uniform-cost search
//!
//! One state machine parameterized by frontier discipline. Search-tree
//! nodes live in an arena; each records its vertex, its parent's arena
//! slot, and the accumulated path cost, and path reconstruction walks
//! the parent chain back to the root. The uniform-cost heap carries a
//! strictly increasing tie counter so expansion order among equal-cost
//! entries is deterministic regardless of the heap's own tie behavior.
//!
//! BFS and DFS ignore cost when choosing what to expand but still
//! accumulate it for reporting. UCS returns a minimum-cost path under
//! non-negative weights; BFS a minimum-edge-count path; DFS any path.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::collections::VecDeque;

use serde::Serialize;

use crate::control::RunControl;
use crate::error::Result;
use crate::graph::index::VertexIndex;
use crate::graph::store::WeightedGraph;

/// Frontier discipline for [`search`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Discipline {
    /// FIFO frontier, minimum-edge-count path
    BreadthFirst,
    /// LIFO frontier, any path
    DepthFirst,
    /// Priority-by-accumulated-cost frontier, minimum-cost path
    UniformCost,
}

/// Outcome of a two-vertex search. `found: false` means the goal is
/// unreachable; that is an ordinary result, not an error.
#[derive(Debug, Clone, Serialize)]
pub struct PathResult {
    pub start: String,
    pub goal: String,
    pub found: bool,
    /// Vertex labels from start to goal, empty when not found
    pub path: Vec<String>,
    /// Accumulated edge-weight cost of `path`
    pub cost: f64,
    /// Number of node expansions performed
    pub expanded: usize,
}

/// One node of the search tree, stored in an arena. Immutable once
/// created; the parent link is an arena slot, not a reference.
#[derive(Debug, Clone, Copy)]
struct SearchNode {
    vertex: usize,
    parent: Option<usize>,
    cost: f64,
}

/// Uniform-cost frontier entry: cost, then insertion tie-breaker
#[derive(Debug, Clone, Copy, PartialEq)]
struct FrontierEntry {
    cost: f64,
    tie: u64,
    node: usize,
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

enum Frontier {
    Fifo(VecDeque<usize>),
    Lifo(Vec<usize>),
    Priority {
        heap: BinaryHeap<Reverse<FrontierEntry>>,
        tie: u64,
    },
}

impl Frontier {
    fn new(discipline: Discipline) -> Self {
        match discipline {
            Discipline::BreadthFirst => Frontier::Fifo(VecDeque::new()),
            Discipline::DepthFirst => Frontier::Lifo(Vec::new()),
            Discipline::UniformCost => Frontier::Priority {
                heap: BinaryHeap::new(),
                tie: 0,
            },
        }
    }

    fn push(&mut self, node: usize, cost: f64) {
        match self {
            Frontier::Fifo(queue) => queue.push_back(node),
            Frontier::Lifo(stack) => stack.push(node),
            Frontier::Priority { heap, tie } => {
                heap.push(Reverse(FrontierEntry {
                    cost,
                    tie: *tie,
                    node,
                }));
                *tie += 1;
            }
        }
    }

    fn pop(&mut self) -> Option<usize> {
        match self {
            Frontier::Fifo(queue) => queue.pop_front(),
            Frontier::Lifo(stack) => stack.pop(),
            Frontier::Priority { heap, .. } => heap.pop().map(|Reverse(entry)| entry.node),
        }
    }
}

fn reconstruct_path(arena: &[SearchNode], index: &VertexIndex, mut slot: usize) -> Vec<String> {
    let mut path = vec![index.label(arena[slot].vertex).to_string()];
    while let Some(parent) = arena[slot].parent {
        slot = parent;
        path.push(index.label(arena[slot].vertex).to_string());
    }
    path.reverse();
    path
}

/// Search for a path from `start` to `goal` under the given discipline.
///
/// Missing vertices are structural errors; an unreachable goal is
/// reported through `found: false`. `control` is checked once per
/// expansion step.
#[tracing::instrument(skip(graph, control), fields(discipline = ?discipline))]
pub fn search(
    graph: &WeightedGraph,
    start: &str,
    goal: &str,
    discipline: Discipline,
    control: &RunControl,
) -> Result<PathResult> {
    let index = VertexIndex::from_graph(graph);
    let start_idx = index.require(start)?;
    let goal_idx = index.require(goal)?;
    let adjacency = index.indexed_adjacency(graph);

    let mut arena: Vec<SearchNode> = vec![SearchNode {
        vertex: start_idx,
        parent: None,
        cost: 0.0,
    }];
    let mut frontier = Frontier::new(discipline);
    frontier.push(0, 0.0);

    let mut explored = vec![false; index.len()];
    let mut expanded = 0usize;

    while let Some(slot) = frontier.pop() {
        let node = arena[slot];

        if node.vertex == goal_idx {
            let path = reconstruct_path(&arena, &index, slot);
            tracing::debug!(cost = node.cost, expanded, "path found");
            return Ok(PathResult {
                start: start.to_string(),
                goal: goal.to_string(),
                found: true,
                path,
                cost: node.cost,
                expanded,
            });
        }

        if explored[node.vertex] {
            continue;
        }
        explored[node.vertex] = true;

        control.check(expanded)?;
        expanded += 1;

        for &(neighbor, weight) in &adjacency[node.vertex] {
            let child = SearchNode {
                vertex: neighbor,
                parent: Some(slot),
                cost: node.cost + weight,
            };
            arena.push(child);
            frontier.push(arena.len() - 1, child.cost);
        }
    }

    tracing::debug!(expanded, "frontier exhausted, no path");
    Ok(PathResult {
        start: start.to_string(),
        goal: goal.to_string(),
        found: false,
        path: Vec::new(),
        cost: f64::INFINITY,
        expanded,
    })
}

#[cfg(test)]
mod tests;
