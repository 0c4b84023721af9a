//! Tests for search-result types and path reconstruction.

use std::collections::HashMap;

use crate::graph::Node;

use super::tree::ShortestPaths;

fn n(key: &'static str) -> Node<&'static str> {
    Node::new(key)
}

/// Hand-builds the search tree of the chain a -> b -> c.
fn build_chain_tree() -> ShortestPaths<&'static str> {
    let mut distances = HashMap::new();
    distances.insert(n("a"), 0.0);
    distances.insert(n("b"), 1.0);
    distances.insert(n("c"), 2.0);

    let mut predecessors = HashMap::new();
    predecessors.insert(n("a"), n("a"));
    predecessors.insert(n("b"), n("a"));
    predecessors.insert(n("c"), n("b"));

    ShortestPaths::new(n("a"), distances, predecessors)
}

#[test]
fn test_path_to_walks_predecessors() {
    let tree = build_chain_tree();
    let path = tree.path_to(&n("c"));

    assert_eq!(path.nodes(), &[n("a"), n("b"), n("c")]);
    assert_eq!(path.len(), 3);
    assert_eq!(path.cost(), 2.0);
    assert!(path.found());
}

#[test]
fn test_path_to_start_is_single_node() {
    let tree = build_chain_tree();
    let path = tree.path_to(&n("a"));

    assert_eq!(path.nodes(), &[n("a")]);
    assert_eq!(path.cost(), 0.0);
}

#[test]
fn test_path_to_unreached_node() {
    let tree = build_chain_tree();
    let path = tree.path_to(&n("z"));

    assert!(path.is_empty());
    assert!(!path.found());
    assert_eq!(path.len(), 0);
    assert_eq!(path.cost(), f64::INFINITY);
}

#[test]
fn test_tree_accessors() {
    let tree = build_chain_tree();

    assert_eq!(*tree.start(), n("a"));
    assert_eq!(tree.distance(&n("b")), Some(1.0));
    assert_eq!(tree.distance(&n("z")), None);
    assert_eq!(tree.predecessor(&n("c")), Some(&n("b")));
    // The start is its own predecessor.
    assert_eq!(tree.predecessor(&n("a")), Some(&n("a")));
    assert!(tree.reached(&n("c")));
    assert!(!tree.reached(&n("z")));
    assert_eq!(tree.distances().len(), 3);
}

#[test]
fn test_into_nodes() {
    let tree = build_chain_tree();
    let nodes = tree.path_to(&n("b")).into_nodes();
    assert_eq!(nodes, vec![n("a"), n("b")]);
}

#[test]
fn test_path_result_serializes_to_json() {
    let tree = build_chain_tree();
    let json = serde_json::to_value(tree.path_to(&n("c"))).unwrap();

    assert_eq!(json["cost"], 2.0);
    assert_eq!(json["nodes"][0], "a");
    assert_eq!(json["nodes"][2], "c");
}

#[test]
fn test_unreachable_serializes_infinite_cost_as_null() {
    let tree = build_chain_tree();
    let json = serde_json::to_value(tree.path_to(&n("z"))).unwrap();

    assert!(json["cost"].is_null());
    assert_eq!(json["nodes"].as_array().unwrap().len(), 0);
}
