//! Tests for Dijkstra's algorithm.

use crate::graph::{DirectedGraph, Node, UndirectedGraph};

use super::bfs::bfs_to;
use super::dijkstra::{dijkstra, dijkstra_to};

fn n(key: &'static str) -> Node<&'static str> {
    Node::new(key)
}

/// Builds the weighted triangle u-v (2), v-w (2), u-w (1).
fn build_triangle() -> UndirectedGraph<&'static str> {
    let mut graph = UndirectedGraph::new();
    graph.add_edge(n("u"), n("v"), 2.0);
    graph.add_edge(n("v"), n("w"), 2.0);
    graph.add_edge(n("u"), n("w"), 1.0);
    graph
}

#[test]
fn test_dijkstra_to_prefers_cheapest_edge() {
    let graph = build_triangle();
    let path = dijkstra_to(&graph, &n("u"), &n("w"));

    assert_eq!(path.nodes(), &[n("u"), n("w")]);
    assert_eq!(path.cost(), 1.0);
}

#[test]
fn test_dijkstra_to_takes_cheap_detour() {
    let mut graph = UndirectedGraph::new();
    graph.add_edge(n("a"), n("b"), 1.0);
    graph.add_edge(n("b"), n("c"), 1.0);
    graph.add_edge(n("a"), n("c"), 5.0);

    // BFS stays on the direct edge; Dijkstra goes around.
    assert_eq!(bfs_to(&graph, &n("a"), &n("c")).len(), 2);

    let path = dijkstra_to(&graph, &n("a"), &n("c"));
    assert_eq!(path.nodes(), &[n("a"), n("b"), n("c")]);
    assert_eq!(path.cost(), 2.0);
}

#[test]
fn test_dijkstra_line_accumulates_cost() {
    let mut graph = UndirectedGraph::new();
    let keys = ["a", "b", "c", "d", "e"];
    for pair in keys.windows(2) {
        graph.add_edge(Node::new(pair[0]), Node::new(pair[1]), 1.0);
    }

    let path = dijkstra_to(&graph, &n("a"), &n("e"));
    assert_eq!(path.len(), 5);
    assert_eq!(path.cost(), 4.0);
}

#[test]
fn test_dijkstra_to_self_needs_no_special_case() {
    let graph = build_triangle();
    let path = dijkstra_to(&graph, &n("u"), &n("u"));

    assert_eq!(path.nodes(), &[n("u")]);
    assert_eq!(path.len(), 1);
    assert_eq!(path.cost(), 0.0);
}

#[test]
fn test_dijkstra_self_loop_does_not_shorten() {
    let mut graph = build_triangle();
    graph.add_edge(n("u"), n("u"), 1.0);

    let path = dijkstra_to(&graph, &n("u"), &n("u"));
    assert_eq!(path.nodes(), &[n("u")]);
    assert_eq!(path.cost(), 0.0);
}

#[test]
fn test_dijkstra_to_unreachable() {
    let mut graph = build_triangle();
    graph.add_node(n("island"));

    let path = dijkstra_to(&graph, &n("u"), &n("island"));
    assert!(path.is_empty());
    assert_eq!(path.cost(), f64::INFINITY);
}

#[test]
fn test_dijkstra_respects_edge_direction() {
    let mut graph = DirectedGraph::new();
    graph.add_edge(n("a"), n("b"), 3.0);

    let forward = dijkstra_to(&graph, &n("a"), &n("b"));
    assert_eq!(forward.cost(), 3.0);

    assert!(!dijkstra_to(&graph, &n("b"), &n("a")).found());
}

#[test]
fn test_dijkstra_zero_weight_edges() {
    let mut graph = DirectedGraph::new();
    graph.add_edge(n("a"), n("b"), 0.0);
    graph.add_edge(n("b"), n("c"), 0.0);

    let path = dijkstra_to(&graph, &n("a"), &n("c"));
    assert_eq!(path.len(), 3);
    assert_eq!(path.cost(), 0.0);
}

#[test]
fn test_dijkstra_full_tree_marks_unreached_infinite() {
    let mut graph = build_triangle();
    graph.add_node(n("island"));

    let tree = dijkstra(&graph, &n("u"));
    assert_eq!(tree.distance(&n("v")), Some(2.0));
    assert_eq!(tree.distance(&n("w")), Some(1.0));
    // Unreached nodes keep their infinite init and get no predecessor.
    assert_eq!(tree.distance(&n("island")), Some(f64::INFINITY));
    assert!(!tree.reached(&n("island")));
}

#[test]
fn test_dijkstra_equal_cost_paths_pick_one() {
    let mut graph = UndirectedGraph::new();
    graph.add_edge(n("a"), n("b"), 1.0);
    graph.add_edge(n("b"), n("d"), 1.0);
    graph.add_edge(n("a"), n("c"), 1.0);
    graph.add_edge(n("c"), n("d"), 1.0);

    let path = dijkstra_to(&graph, &n("a"), &n("d"));
    assert_eq!(path.len(), 3);
    assert_eq!(path.cost(), 2.0);
    assert_eq!(path.nodes()[0], n("a"));
    assert_eq!(path.nodes()[2], n("d"));
    // The middle hop is whichever equal-cost branch was settled first.
    assert!(path.nodes()[1] == n("b") || path.nodes()[1] == n("c"));
}

#[test]
fn test_dijkstra_from_node_outside_graph() {
    let graph = build_triangle();

    assert!(!dijkstra_to(&graph, &n("ghost"), &n("u")).found());

    // The sentinel still yields the trivial self-path.
    let path = dijkstra_to(&graph, &n("ghost"), &n("ghost"));
    assert_eq!(path.nodes(), &[n("ghost")]);
    assert_eq!(path.cost(), 0.0);
}
