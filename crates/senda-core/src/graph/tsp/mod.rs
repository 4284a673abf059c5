//! Exact Traveling-Salesman solvers
//!
//! Two exact methods over the same Hamiltonian-cycle state space:
//! best-first uniform-cost search ([`ucs`]) and branch-and-bound with
//! reduced-cost-matrix lower bounds ([`bnb`]). Both are worst-case
//! exponential and intended for small instances (roughly 12 vertices or
//! fewer); both honor a [`RunControl`](crate::control::RunControl) once
//! per expansion. Symmetric (undirected) graphs are the primary
//! contract; directed input is accepted but unverified.

pub mod bnb;
pub mod reduced;
pub mod ucs;

pub use bnb::tsp_branch_bound;
pub use ucs::tsp_ucs;

use serde::Serialize;

use crate::error::{Result, SendaError};
use crate::graph::index::VertexIndex;
use crate::graph::store::WeightedGraph;

/// Visited sets are u64 bitmasks over vertex indices
pub(crate) const MAX_TSP_VERTICES: usize = 64;

/// A Hamiltonian cycle: every vertex once, then back to the start.
/// `tour` begins and ends with `start` (a single-vertex instance is the
/// trivial tour `[start]`).
#[derive(Debug, Clone, Serialize)]
pub struct Tour {
    pub start: String,
    pub tour: Vec<String>,
    pub cost: f64,
    /// Number of node expansions performed by the solver
    pub expanded: usize,
}

/// Validate a TSP instance and resolve the start vertex
pub(crate) fn prepare(
    graph: &WeightedGraph,
    start: &str,
    operation: &str,
) -> Result<(VertexIndex, usize)> {
    let index = VertexIndex::from_graph(graph);
    let start_idx = index.require(start)?;
    if index.len() > MAX_TSP_VERTICES {
        return Err(SendaError::TooManyVertices {
            operation: operation.to_string(),
            count: index.len(),
            max: MAX_TSP_VERTICES,
        });
    }
    Ok((index, start_idx))
}

/// The trivial single-vertex tour
pub(crate) fn trivial_tour(start: &str) -> Tour {
    Tour {
        start: start.to_string(),
        tour: vec![start.to_string()],
        cost: 0.0,
        expanded: 0,
    }
}
