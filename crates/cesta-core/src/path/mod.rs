//! Shortest-path search over any adjacency source.
//!
//! Two algorithms, both free functions generic over [`AdjacencyLookup`]:
//!
//! - [`bfs`] / [`bfs_to`]: hop-count shortest paths, weights ignored.
//! - [`dijkstra`] / [`dijkstra_to`]: weighted shortest paths over
//!   non-negative weights, linear-scan extraction (no priority queue).
//!
//! Full searches return [`ShortestPaths`] (distance and predecessor maps,
//! start node as its own predecessor); point-to-point variants return
//! [`PathResult`], where an unreachable target is the empty path with
//! infinite cost rather than an error.
//!
//! # Example
//!
//! ```rust
//! use cesta_core::{dijkstra, Node, DirectedGraph};
//!
//! let mut graph = DirectedGraph::new();
//! graph.add_edge(Node::new("a"), Node::new("b"), 2.0);
//! graph.add_edge(Node::new("b"), Node::new("c"), 2.0);
//!
//! let tree = dijkstra(&graph, &Node::new("a"));
//! assert_eq!(tree.distance(&Node::new("c")), Some(4.0));
//! assert_eq!(tree.path_to(&Node::new("c")).len(), 3);
//! ```

mod bfs;
mod dijkstra;
mod lookup;
mod tree;

#[cfg(test)]
mod dijkstra_tests;
#[cfg(test)]
mod tree_tests;

pub use bfs::{bfs, bfs_to};
pub use dijkstra::{dijkstra, dijkstra_to};
pub use lookup::AdjacencyLookup;
pub use tree::{PathResult, ShortestPaths};
