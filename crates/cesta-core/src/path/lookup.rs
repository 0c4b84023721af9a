//! Adjacency access for the search algorithms.
//!
//! [`AdjacencyLookup`] decouples BFS and Dijkstra from storage: anything
//! that can list its nodes and the outgoing entries of a node can be
//! searched. The algorithms simply follow stored entries, so direction
//! semantics stay entirely inside the graph types. An undirected graph
//! exposes its symmetric entries and gets undirected search behavior for
//! free.

use std::hash::Hash;

use crate::graph::{AdjacencyStore, DirectedGraph, Node, UndirectedGraph};

/// Read-only adjacency access implemented by every graph type.
///
/// Both methods materialize owned `Vec`s, which keeps implementations free
/// to synthesize entries rather than borrow from internal maps.
pub trait AdjacencyLookup<K> {
    /// Returns every node currently in the graph.
    fn all_nodes(&self) -> Vec<Node<K>>;

    /// Returns the outgoing entries of `node` as `(target, weight)` pairs.
    ///
    /// Unknown nodes yield an empty list.
    fn outgoing(&self, node: &Node<K>) -> Vec<(Node<K>, f64)>;
}

impl<K: Eq + Hash + Clone> AdjacencyLookup<K> for AdjacencyStore<K> {
    fn all_nodes(&self) -> Vec<Node<K>> {
        self.nodes()
    }

    fn outgoing(&self, node: &Node<K>) -> Vec<(Node<K>, f64)> {
        self.weighted_successors(node)
    }
}

impl<K: Eq + Hash + Clone> AdjacencyLookup<K> for DirectedGraph<K> {
    fn all_nodes(&self) -> Vec<Node<K>> {
        self.nodes()
    }

    fn outgoing(&self, node: &Node<K>) -> Vec<(Node<K>, f64)> {
        self.weighted_successors(node)
    }
}

impl<K: Eq + Hash + Clone> AdjacencyLookup<K> for UndirectedGraph<K> {
    fn all_nodes(&self) -> Vec<Node<K>> {
        self.nodes()
    }

    fn outgoing(&self, node: &Node<K>) -> Vec<(Node<K>, f64)> {
        self.weighted_successors(node)
    }
}
