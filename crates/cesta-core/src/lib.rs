//! # Cesta Core
//!
//! Adjacency-map graph storage with BFS and Dijkstra shortest-path search.
//!
//! Cesta keeps the whole graph in one nested hash map and layers two thin
//! variants over it, so directed and undirected graphs share every
//! operation that does not depend on edge direction.
//!
//! ## Features
//!
//! - **Generic keys**: nodes wrap any `Eq + Hash + Clone` key type
//! - **Two variants**: directed and undirected views over one store
//! - **Two searches**: BFS by hop count, Dijkstra by edge weight
//! - **Total mutations**: removals of absent nodes/edges are no-ops
//! - **Grid loading**: plain-text mazes become unit-weight graphs
//!
//! ## Quick Start
//!
//! ```rust
//! use cesta_core::{bfs_to, dijkstra_to, Node, UndirectedGraph};
//!
//! let mut graph = UndirectedGraph::new();
//! graph.add_edge(Node::new("a"), Node::new("b"), 1.0);
//! graph.add_edge(Node::new("b"), Node::new("c"), 1.0);
//! graph.add_edge(Node::new("a"), Node::new("c"), 5.0);
//!
//! // Fewest hops takes the direct edge.
//! let hops = bfs_to(&graph, &Node::new("a"), &Node::new("c"));
//! assert_eq!(hops.len(), 2);
//!
//! // Cheapest cost goes around through b.
//! let cheap = dijkstra_to(&graph, &Node::new("a"), &Node::new("c"));
//! assert_eq!(cheap.len(), 3);
//! assert_eq!(cheap.cost(), 2.0);
//! ```

#![warn(missing_docs)]
// Clippy lints configured in workspace Cargo.toml [workspace.lints.clippy]
#![cfg_attr(test, allow(clippy::float_cmp))]

pub mod error;
pub mod export;
pub mod graph;
pub mod grid;
pub mod path;

pub use error::{Error, Result};
pub use graph::{AdjacencyStore, DirectedGraph, Edge, Node, UndirectedGraph};
pub use path::{
    bfs, bfs_to, dijkstra, dijkstra_to, AdjacencyLookup, PathResult, ShortestPaths,
};
