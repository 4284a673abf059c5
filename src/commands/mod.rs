//! Command implementations

pub mod dijkstra;
pub mod dispatch;
pub mod floyd;
pub mod graph_file;
pub mod maxflow;
pub mod mst;
pub mod search;
pub mod tsp;
