//! Property-based tests over graph mutations and searches.
//!
//! Random edge scripts over a small key space keep the graphs dense enough
//! to exercise overwrites, self-loops, and multi-component topologies.

#![allow(clippy::float_cmp)]

use proptest::prelude::*;

use cesta_core::{bfs_to, dijkstra_to, DirectedGraph, Node, UndirectedGraph};

fn weighted_edges() -> impl Strategy<Value = Vec<(u8, u8, f64)>> {
    prop::collection::vec((0u8..12, 0u8..12, 0.5f64..10.0), 0..40)
}

fn unit_edges() -> impl Strategy<Value = Vec<(u8, u8)>> {
    prop::collection::vec((0u8..12, 0u8..12), 0..40)
}

fn build_undirected(edges: &[(u8, u8, f64)]) -> UndirectedGraph<u8> {
    let mut graph = UndirectedGraph::new();
    for &(u, v, w) in edges {
        graph.add_edge(Node::new(u), Node::new(v), w);
    }
    graph
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_undirected_store_stays_symmetric(edges in weighted_edges()) {
        let graph = build_undirected(&edges);

        for edge in graph.edges() {
            prop_assert!(graph.has_edge(edge.target(), edge.source()));
            prop_assert_eq!(
                graph.edge_weight(edge.source(), edge.target()),
                graph.edge_weight(edge.target(), edge.source())
            );
        }
    }

    #[test]
    fn prop_remove_node_leaves_no_dangling_references(
        edges in weighted_edges(),
        victim in 0u8..12,
    ) {
        let mut graph = build_undirected(&edges);
        let victim = Node::new(victim);
        graph.remove_node(&victim);

        prop_assert!(!graph.has_node(&victim));
        for edge in graph.edges() {
            prop_assert!(*edge.source() != victim);
            prop_assert!(*edge.target() != victim);
        }
    }

    #[test]
    fn prop_clone_is_independent(edges in weighted_edges()) {
        let original = build_undirected(&edges);
        let nodes_before = original.number_of_nodes();
        let entries_before = original.number_of_edges();

        let mut copy = original.clone();
        copy.clear();

        prop_assert_eq!(original.number_of_nodes(), nodes_before);
        prop_assert_eq!(original.number_of_edges(), entries_before);
        prop_assert_eq!(copy.number_of_nodes(), 0);
    }

    #[test]
    fn prop_last_write_wins_for_weights(
        edges in weighted_edges(),
        u in 0u8..12,
        v in 0u8..12,
        first in 0.5f64..10.0,
        second in 0.5f64..10.0,
    ) {
        let mut graph = build_undirected(&edges);
        graph.add_edge(Node::new(u), Node::new(v), first);
        let entries_after_first = graph.number_of_edges();

        graph.add_edge(Node::new(u), Node::new(v), second);

        prop_assert_eq!(graph.number_of_edges(), entries_after_first);
        prop_assert_eq!(
            graph.edge_weight(&Node::new(u), &Node::new(v)),
            Some(second)
        );
    }

    #[test]
    fn prop_bfs_and_dijkstra_agree_on_unit_weights(
        edges in unit_edges(),
        start in 0u8..12,
        target in 0u8..12,
    ) {
        let mut graph = UndirectedGraph::new();
        for &(u, v) in &edges {
            graph.add_edge(Node::new(u), Node::new(v), 1.0);
        }
        let start = Node::new(start);
        let target = Node::new(target);

        let hops = bfs_to(&graph, &start, &target);
        let cheap = dijkstra_to(&graph, &start, &target);

        prop_assert_eq!(hops.found(), cheap.found());
        if hops.found() {
            prop_assert_eq!(hops.cost(), cheap.cost());
            prop_assert_eq!(hops.len(), cheap.len());
        }
    }

    #[test]
    fn prop_directed_search_never_walks_backwards(
        edges in unit_edges(),
        start in 0u8..12,
        target in 0u8..12,
    ) {
        let mut graph = DirectedGraph::new();
        for &(u, v) in &edges {
            graph.add_edge(Node::new(u), Node::new(v), 1.0);
        }

        let path = bfs_to(&graph, &Node::new(start), &Node::new(target));
        for pair in path.nodes().windows(2) {
            prop_assert!(graph.has_edge(&pair[0], &pair[1]));
        }
    }
}
