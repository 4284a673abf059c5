//! Senda Core Library
//!
//! Core weighted-graph algorithms for the senda CLI: a single graph
//! store feeding exact path search, shortest paths, minimum spanning
//! trees, exact TSP, and maximum flow. Everything is single-threaded
//! and synchronous; long-running searches honor a cooperative
//! [`control::RunControl`].

pub mod control;
pub mod error;
pub mod graph;
pub mod logging;
