//! Maximum flow (Dinic's blocking-flow method)
//!
//! A residual network pairs every capacity edge with a reverse edge of
//! initial capacity zero; augmentation mutates both symmetrically.
//! Phases alternate a BFS that assigns shortest-hop levels from the
//! source with a DFS that pushes blocking flow along level-increasing
//! edges. The DFS is iterative and keeps a resumable per-vertex edge
//! cursor across calls within a phase, so exhausted edges are never
//! rescanned; that cursor is what bounds a phase to O(VE).

use std::collections::{HashMap, VecDeque};

use serde::Serialize;

use crate::error::{Result, SendaError};
use crate::graph::store::WeightedGraph;

#[derive(Debug, Clone, Copy)]
struct FlowEdge {
    to: usize,
    cap: f64,
    /// Index of the paired reverse edge in `adj[to]`
    rev: usize,
}

/// Result of a max-flow computation
#[derive(Debug, Clone, Serialize)]
pub struct FlowResult {
    pub source: String,
    pub sink: String,
    pub flow: f64,
}

/// A source-side minimum cut discovered in the final residual graph
#[derive(Debug, Clone, Serialize)]
pub struct MinCut {
    /// Saturated capacity edges crossing the cut, as (from, to, capacity)
    pub edges: Vec<(String, String, f64)>,
    pub capacity: f64,
}

/// Residual flow network over string-labeled vertices. Owned by a
/// single max-flow run; capacities are consumed by augmentation.
#[derive(Debug, Clone)]
pub struct FlowNetwork {
    labels: Vec<String>,
    by_label: HashMap<String, usize>,
    adj: Vec<Vec<FlowEdge>>,
    /// Forward (capacity) edges as (vertex, edge slot, original capacity)
    forward: Vec<(usize, usize, f64)>,
}

impl FlowNetwork {
    pub fn new(labels: Vec<String>) -> Self {
        let by_label = labels
            .iter()
            .enumerate()
            .map(|(i, v)| (v.clone(), i))
            .collect();
        let adj = vec![Vec::new(); labels.len()];
        Self {
            labels,
            by_label,
            adj,
            forward: Vec::new(),
        }
    }

    /// Interpret every adjacency entry as a directed capacity edge
    pub fn from_graph(graph: &WeightedGraph) -> Self {
        let mut network = Self::new(graph.vertices().to_vec());
        for from in graph.vertices() {
            let u = network.by_label[from];
            if let Ok(entries) = graph.adjacent_vertices(from) {
                for (to, cap) in entries {
                    let v = network.by_label[to];
                    network.push_edge(u, v, *cap);
                }
            }
        }
        network
    }

    /// Add a capacity edge and its zero-capacity reverse pair
    pub fn add_edge(&mut self, from: &str, to: &str, cap: f64) -> Result<()> {
        let u = self.require(from)?;
        let v = self.require(to)?;
        self.push_edge(u, v, cap);
        Ok(())
    }

    fn push_edge(&mut self, u: usize, v: usize, cap: f64) {
        let rev_u = self.adj[v].len();
        let rev_v = self.adj[u].len();
        self.adj[u].push(FlowEdge {
            to: v,
            cap,
            rev: rev_u,
        });
        self.adj[v].push(FlowEdge {
            to: u,
            cap: 0.0,
            rev: rev_v,
        });
        self.forward.push((u, rev_v, cap));
    }

    fn require(&self, label: &str) -> Result<usize> {
        self.by_label
            .get(label)
            .copied()
            .ok_or_else(|| SendaError::VertexNotFound {
                vertex: label.to_string(),
            })
    }

    /// Compute the maximum flow from `source` to `sink`, consuming
    /// residual capacity. An unreachable sink yields flow zero.
    #[tracing::instrument(skip(self))]
    pub fn max_flow(&mut self, source: &str, sink: &str) -> Result<f64> {
        let s = self.require(source)?;
        let t = self.require(sink)?;
        if s == t {
            return Ok(0.0);
        }

        let mut flow = 0.0;
        loop {
            let levels = self.bfs_levels(s);
            if levels[t] < 0 {
                break;
            }

            let mut cursors = vec![0usize; self.adj.len()];
            loop {
                let pushed = self.augment(s, t, &levels, &mut cursors);
                if pushed == 0.0 {
                    break;
                }
                flow += pushed;
            }
        }

        tracing::debug!(flow, "max flow computed");
        Ok(flow)
    }

    /// Shortest-hop level of every vertex over positive-residual edges;
    /// -1 marks unreachable vertices
    fn bfs_levels(&self, s: usize) -> Vec<i32> {
        let mut levels = vec![-1i32; self.adj.len()];
        let mut queue = VecDeque::new();
        levels[s] = 0;
        queue.push_back(s);

        while let Some(v) = queue.pop_front() {
            for edge in &self.adj[v] {
                if edge.cap > 0.0 && levels[edge.to] < 0 {
                    levels[edge.to] = levels[v] + 1;
                    queue.push_back(edge.to);
                }
            }
        }
        levels
    }

    /// Push one augmenting path through the level graph, walking an
    /// explicit stack of (vertex, edge slot) and resuming each vertex's
    /// cursor where the previous call left it
    fn augment(&mut self, s: usize, t: usize, levels: &[i32], cursors: &mut [usize]) -> f64 {
        let mut path: Vec<(usize, usize)> = Vec::new();
        let mut v = s;

        loop {
            if v == t {
                return self.apply_augmentation(&path);
            }

            let mut advanced = false;
            while cursors[v] < self.adj[v].len() {
                let edge = self.adj[v][cursors[v]];
                if edge.cap > 0.0 && levels[v] + 1 == levels[edge.to] {
                    path.push((v, cursors[v]));
                    v = edge.to;
                    advanced = true;
                    break;
                }
                cursors[v] += 1;
            }

            if !advanced {
                let Some((prev, _)) = path.pop() else {
                    // Source itself is exhausted: the blocking flow for
                    // this phase is complete
                    return 0.0;
                };
                // The edge that led here cannot reach the sink anymore
                cursors[prev] += 1;
                v = prev;
            }
        }
    }

    /// Saturate the discovered path by its bottleneck, decrementing
    /// forward and incrementing reverse capacities
    fn apply_augmentation(&mut self, path: &[(usize, usize)]) -> f64 {
        let bottleneck = path
            .iter()
            .map(|&(v, i)| self.adj[v][i].cap)
            .fold(f64::INFINITY, f64::min);

        for &(v, i) in path {
            let FlowEdge { to, rev, .. } = self.adj[v][i];
            self.adj[v][i].cap -= bottleneck;
            self.adj[to][rev].cap += bottleneck;
        }
        bottleneck
    }

    /// The minimum cut exposed by the final residual graph: capacity
    /// edges leading from source-reachable to unreachable vertices.
    /// Meaningful after [`max_flow`](Self::max_flow); its capacity then
    /// equals the computed flow.
    pub fn min_cut(&self, source: &str) -> Result<MinCut> {
        let s = self.require(source)?;
        let levels = self.bfs_levels(s);

        let mut edges = Vec::new();
        let mut capacity = 0.0;
        for &(u, slot, original_cap) in &self.forward {
            let edge = self.adj[u][slot];
            if levels[u] >= 0 && levels[edge.to] < 0 && original_cap > 0.0 {
                edges.push((
                    self.labels[u].clone(),
                    self.labels[edge.to].clone(),
                    original_cap,
                ));
                capacity += original_cap;
            }
        }
        Ok(MinCut { edges, capacity })
    }
}

/// Compute the maximum flow of a graph whose weights are capacities
pub fn max_flow(graph: &WeightedGraph, source: &str, sink: &str) -> Result<FlowResult> {
    let mut network = FlowNetwork::from_graph(graph);
    let flow = network.max_flow(source, sink)?;
    Ok(FlowResult {
        source: source.to_string(),
        sink: sink.to_string(),
        flow,
    })
}
