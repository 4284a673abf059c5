use crate::control::RunControl;
use crate::error::SendaError;
use crate::graph::dijkstra::dijkstra;
use crate::graph::frontier::{search, Discipline};
use crate::graph::store::WeightedGraph;

/// 4-vertex cycle A-B(1)-C(2)-D(1)-A(4) plus chord A-C(10)
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
fn test_ucs_returns_minimum_cost_path() {
    let g = cycle_with_chord();
    let result = search(&g, "A", "C", Discipline::UniformCost, &RunControl::unbounded()).unwrap();

    assert!(result.found);
    assert_eq!(result.path, vec!["A", "B", "C"]);
    assert_eq!(result.cost, 3.0);
}

#[test]
fn test_bfs_returns_minimum_edge_count_path() {
    let g = cycle_with_chord();
    let result = search(&g, "A", "C", Discipline::BreadthFirst, &RunControl::unbounded()).unwrap();

    // One hop over the chord, despite its weight
    assert!(result.found);
    assert_eq!(result.path, vec!["A", "C"]);
    assert_eq!(result.cost, 10.0);
}

#[test]
fn test_dfs_finds_some_path_no_cheaper_than_ucs() {
    let g = cycle_with_chord();
    let dfs = search(&g, "A", "C", Discipline::DepthFirst, &RunControl::unbounded()).unwrap();
    let ucs = search(&g, "A", "C", Discipline::UniformCost, &RunControl::unbounded()).unwrap();

    assert!(dfs.found);
    assert_eq!(dfs.path.first().map(String::as_str), Some("A"));
    assert_eq!(dfs.path.last().map(String::as_str), Some("C"));
    assert!(dfs.cost >= ucs.cost);
}

#[test]
fn test_ucs_cost_matches_dijkstra_distance() {
    let g = cycle_with_chord();
    let shortest = dijkstra(&g, "A").unwrap();

    for goal in ["B", "C", "D"] {
        let ucs = search(&g, "A", goal, Discipline::UniformCost, &RunControl::unbounded()).unwrap();
        assert_eq!(ucs.cost, shortest.distances[goal], "goal {goal}");
    }
}

#[test]
fn test_bfs_hop_count_matches_dijkstra_on_unit_weights() {
    let mut g = WeightedGraph::undirected();
    for v in ["A", "B", "C", "D", "E"] {
        g.add_vertex(v).unwrap();
    }
    g.add_edge("A", "B", 1.0).unwrap();
    g.add_edge("B", "C", 1.0).unwrap();
    g.add_edge("C", "D", 1.0).unwrap();
    g.add_edge("A", "E", 1.0).unwrap();
    g.add_edge("E", "D", 1.0).unwrap();

    let shortest = dijkstra(&g, "A").unwrap();
    for goal in ["B", "C", "D", "E"] {
        let bfs = search(&g, "A", goal, Discipline::BreadthFirst, &RunControl::unbounded()).unwrap();
        assert_eq!(
            (bfs.path.len() - 1) as f64,
            shortest.distances[goal],
            "goal {goal}"
        );
    }
}

#[test]
fn test_equal_cost_ties_break_by_insertion_order() {
    // Two cost-2 routes from A to D; the one through B is inserted first
    let mut g = WeightedGraph::undirected();
    for v in ["A", "B", "C", "D"] {
        g.add_vertex(v).unwrap();
    }
    g.add_edge("A", "B", 1.0).unwrap();
    g.add_edge("A", "C", 1.0).unwrap();
    g.add_edge("B", "D", 1.0).unwrap();
    g.add_edge("C", "D", 1.0).unwrap();

    let result = search(&g, "A", "D", Discipline::UniformCost, &RunControl::unbounded()).unwrap();
    assert_eq!(result.path, vec!["A", "B", "D"]);
}

#[test]
fn test_unreachable_goal_reports_no_path() {
    let mut g = WeightedGraph::undirected();
    for v in ["A", "B", "C"] {
        g.add_vertex(v).unwrap();
    }
    g.add_edge("A", "B", 1.0).unwrap();

    for discipline in [
        Discipline::BreadthFirst,
        Discipline::DepthFirst,
        Discipline::UniformCost,
    ] {
        let result = search(&g, "A", "C", discipline, &RunControl::unbounded()).unwrap();
        assert!(!result.found);
        assert!(result.path.is_empty());
        assert_eq!(result.cost, f64::INFINITY);
    }
}

#[test]
fn test_start_equals_goal() {
    let g = cycle_with_chord();
    let result = search(&g, "A", "A", Discipline::UniformCost, &RunControl::unbounded()).unwrap();
    assert!(result.found);
    assert_eq!(result.path, vec!["A"]);
    assert_eq!(result.cost, 0.0);
    assert_eq!(result.expanded, 0);
}

#[test]
fn test_missing_vertex_is_an_error() {
    let g = cycle_with_chord();
    let err = search(&g, "A", "Z", Discipline::BreadthFirst, &RunControl::unbounded()).unwrap_err();
    assert!(matches!(err, SendaError::VertexNotFound { .. }));
}

#[test]
fn test_expansion_limit_aborts_search() {
    let g = cycle_with_chord();
    let control = RunControl::unbounded().with_max_expansions(0);
    let err = search(&g, "A", "C", Discipline::UniformCost, &control).unwrap_err();
    assert!(matches!(err, SendaError::ExpansionLimitExceeded { .. }));
}
