//! Adjacency-map graph storage.
//!
//! One [`AdjacencyStore`] holds the canonical state; [`DirectedGraph`] and
//! [`UndirectedGraph`] wrap it and differ only in the operations where
//! edge direction matters (edge mutation, neighbor queries, degrees).
//! Nodes are identity-only wrappers around a hashable key, edges carry an
//! `f64` weight, and a `(u, v)` pair always resolves to a single slot.
//!
//! # Example
//!
//! ```rust
//! use cesta_core::{Node, UndirectedGraph};
//!
//! let mut graph = UndirectedGraph::new();
//! graph.add_edge(Node::new(1), Node::new(2), 1.0);
//! graph.add_edge(Node::new(2), Node::new(3), 0.5);
//!
//! assert_eq!(graph.number_of_nodes(), 3);
//! assert_eq!(graph.neighbors(&Node::new(2)).len(), 2);
//! assert_eq!(graph.edge_weight(&Node::new(3), &Node::new(2)), Some(0.5));
//! ```

mod directed;
mod store;
mod types;
mod undirected;


pub use directed::DirectedGraph;
pub use store::AdjacencyStore;
pub use types::{Edge, Node};
pub use undirected::UndirectedGraph;
