//! Weighted-graph store and the solvers built on it
//!
//! One adjacency-list graph representation feeds five solver families:
//! - frontier-based path search (BFS / DFS / uniform-cost)
//! - shortest paths (Dijkstra single-source, Floyd-Warshall all-pairs)
//! - minimum spanning trees (Prim, Kruskal)
//! - exact TSP (uniform-cost search, branch and bound)
//! - maximum flow (Dinic)

pub mod dijkstra;
pub mod floyd;
pub mod flow;
pub mod frontier;
pub mod index;
pub mod matrix;
pub mod mst;
pub mod store;
pub mod tsp;
pub mod union_find;

pub use dijkstra::{dijkstra, ShortestPaths};
pub use floyd::floyd_warshall;
pub use flow::{max_flow, FlowNetwork, FlowResult, MinCut};
pub use frontier::{search, Discipline, PathResult};
pub use matrix::CostMatrix;
pub use mst::{mst, MstMethod, MstResult};
pub use store::WeightedGraph;
pub use tsp::{tsp_branch_bound, tsp_ucs, Tour};
