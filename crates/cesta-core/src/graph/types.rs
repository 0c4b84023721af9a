//! Node and edge types for adjacency-map graphs.
//!
//! A node is an identity-only wrapper around an arbitrary hashable key;
//! an edge pairs two nodes with an `f64` weight. Neither carries any
//! further payload.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A graph node identified by its key.
///
/// Two nodes are equal exactly when their keys are equal; the key is the
/// whole identity. `K` is typically a small value type such as an integer
/// id, a short string, or a grid coordinate.
///
/// # Example
///
/// ```rust
/// use cesta_core::Node;
///
/// let a = Node::new("prague");
/// let b = Node::new("prague");
/// assert_eq!(a, b);
/// assert_eq!(*a.key(), "prague");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Node<K> {
    key: K,
}

impl<K> Node<K> {
    /// Wraps a key in a node.
    #[must_use]
    pub fn new(key: K) -> Self {
        Self { key }
    }

    /// Returns a reference to the key.
    #[must_use]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Consumes the node and returns the key.
    #[must_use]
    pub fn into_key(self) -> K {
        self.key
    }
}

impl<K: fmt::Display> fmt::Display for Node<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.key.fmt(f)
    }
}

/// A weighted edge between two nodes.
///
/// For directed graphs the order is source to target; for undirected
/// graphs the order is incidental and the same logical edge is stored in
/// both directions.
///
/// # Example
///
/// ```rust
/// use cesta_core::{Edge, Node};
///
/// let edge = Edge::new(Node::new(1), Node::new(2), 0.5);
/// assert_eq!(*edge.source(), Node::new(1));
/// assert_eq!(*edge.target(), Node::new(2));
/// assert_eq!(edge.weight(), 0.5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge<K> {
    source: Node<K>,
    target: Node<K>,
    weight: f64,
}

impl<K> Edge<K> {
    /// Creates an edge between two nodes with the given weight.
    ///
    /// Weights are not validated; search algorithms document their own
    /// preconditions (Dijkstra requires non-negative weights).
    #[must_use]
    pub fn new(source: Node<K>, target: Node<K>, weight: f64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the source node.
    #[must_use]
    pub fn source(&self) -> &Node<K> {
        &self.source
    }

    /// Returns the target node.
    #[must_use]
    pub fn target(&self) -> &Node<K> {
        &self.target
    }

    /// Returns the edge weight.
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Consumes the edge and returns `(source, target, weight)`.
    #[must_use]
    pub fn into_parts(self) -> (Node<K>, Node<K>, f64) {
        (self.source, self.target, self.weight)
    }
}
