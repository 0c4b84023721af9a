//! Fuzz target for graph construction and path search.
//!
//! This target builds a directed graph from arbitrary edge lists and runs
//! both searches to find:
//! - Panics on self-loops, parallel updates, or absent endpoints
//! - Non-termination in the search loops
//! - Disagreement between BFS and Dijkstra on reachability
//! - Found paths that do not connect the requested endpoints
//!
//! # Running
//!
//! ```bash
//! cd fuzz
//! cargo +nightly fuzz run fuzz_search
//! ```

#![no_main]

use arbitrary::Arbitrary;
use cesta_core::{bfs_to, dijkstra_to, DirectedGraph, Node};
use libfuzzer_sys::fuzz_target;

/// Fuzzing input for graph search.
#[derive(Arbitrary, Debug)]
struct SearchInput {
    /// Edge list over a small key space (will be truncated to 512 edges)
    edges: Vec<(u8, u8, u16)>,
    /// Search origin
    start: u8,
    /// Search destination
    target: u8,
}

fuzz_target!(|input: SearchInput| {
    // Limit edge count to prevent OOM
    let mut graph = DirectedGraph::new();
    for (u, v, weight) in input.edges.into_iter().take(512) {
        graph.add_edge(Node::new(u), Node::new(v), f64::from(weight));
    }

    let start = Node::new(input.start);
    let target = Node::new(input.target);

    // Neither search should panic, whatever the topology
    let by_hops = bfs_to(&graph, &start, &target);
    let by_cost = dijkstra_to(&graph, &start, &target);

    // Both searches agree on whether the target is reachable
    assert_eq!(by_hops.found(), by_cost.found());

    // A found path connects the requested endpoints
    for path in [&by_hops, &by_cost] {
        if path.found() {
            assert_eq!(path.nodes().first(), Some(&start));
            assert_eq!(path.nodes().last(), Some(&target));
        }
    }
});
