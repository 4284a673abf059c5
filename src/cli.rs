//! Command-line interface definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use senda_core::graph::{Discipline, MstMethod};

#[derive(Parser, Debug)]
#[command(name = "senda")]
#[command(about = "Exact algorithms over weighted graphs", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the JSON graph file
    #[arg(short, long, global = true, default_value = "graph.json")]
    pub graph: PathBuf,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log level filter (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "SENDA_LOG")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Abort any solver after this many seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Abort any solver after this many node expansions
    #[arg(long, global = true)]
    pub max_expansions: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Find a path between two vertices with a frontier search
    Search {
        /// Start vertex label
        start: String,

        /// Goal vertex label
        goal: String,

        /// Frontier discipline
        #[arg(short, long, value_enum, default_value_t = DisciplineArg::Ucs)]
        discipline: DisciplineArg,
    },

    /// Single-source shortest paths
    Dijkstra {
        /// Source vertex label
        source: String,

        /// Print only the path to this vertex
        #[arg(long)]
        to: Option<String>,
    },

    /// All-pairs shortest path matrix
    Floyd,

    /// Minimum spanning tree (or forest) of an undirected graph
    Mst {
        /// Construction method
        #[arg(short, long, value_enum, default_value_t = MstMethodArg::Prim)]
        method: MstMethodArg,
    },

    /// Exact travelling-salesman tour
    Tsp {
        /// Start vertex label
        start: String,

        /// Solver strategy
        #[arg(short, long, value_enum, default_value_t = TspSolver::Bnb)]
        solver: TspSolver,
    },

    /// Maximum flow from source to sink
    Maxflow {
        /// Source vertex label
        source: String,

        /// Sink vertex label
        sink: String,

        /// Also report a minimum cut
        #[arg(long)]
        min_cut: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum DisciplineArg {
    Bfs,
    Dfs,
    Ucs,
}

impl From<DisciplineArg> for Discipline {
    fn from(arg: DisciplineArg) -> Self {
        match arg {
            DisciplineArg::Bfs => Discipline::BreadthFirst,
            DisciplineArg::Dfs => Discipline::DepthFirst,
            DisciplineArg::Ucs => Discipline::UniformCost,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum MstMethodArg {
    Prim,
    Kruskal,
}

impl From<MstMethodArg> for MstMethod {
    fn from(arg: MstMethodArg) -> Self {
        match arg {
            MstMethodArg::Prim => MstMethod::Prim,
            MstMethodArg::Kruskal => MstMethod::Kruskal,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum TspSolver {
    Ucs,
    Bnb,
}
