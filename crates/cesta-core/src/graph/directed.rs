//! Directed graph variant.

use std::hash::Hash;

use super::store::AdjacencyStore;
use super::types::{Edge, Node};

/// A directed weighted graph.
///
/// Wraps an [`AdjacencyStore`] and gives every edge exactly one direction:
/// `add_edge(u, v, w)` writes the single entry `u -> v`. Queries that do
/// not depend on direction pass through to the store unchanged, including
/// its run-to-run unspecified iteration order.
///
/// # Example
///
/// ```rust
/// use cesta_core::{DirectedGraph, Node};
///
/// let mut graph = DirectedGraph::new();
/// graph.add_edge(Node::new("a"), Node::new("b"), 2.0);
///
/// assert!(graph.has_edge(&Node::new("a"), &Node::new("b")));
/// assert!(!graph.has_edge(&Node::new("b"), &Node::new("a")));
/// ```
#[derive(Debug, Clone)]
pub struct DirectedGraph<K> {
    store: AdjacencyStore<K>,
}

impl<K> Default for DirectedGraph<K> {
    fn default() -> Self {
        Self {
            store: AdjacencyStore::default(),
        }
    }
}

impl<K: Eq + Hash + Clone> DirectedGraph<K> {
    /// Creates an empty directed graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ── Edge mutation ──────────────────────────────────────────────────

    /// Adds the edge `u -> v`, creating both endpoints as needed.
    /// Re-adding overwrites the stored weight.
    pub fn add_edge(&mut self, u: Node<K>, v: Node<K>, weight: f64) {
        self.store.insert_entry(u, v, weight);
    }

    /// Adds every edge from an iterator.
    pub fn add_edges_from<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = Edge<K>>,
    {
        for edge in edges {
            let (u, v, weight) = edge.into_parts();
            self.add_edge(u, v, weight);
        }
    }

    /// Removes the edge `u -> v` if present; the reverse entry and both
    /// endpoints stay. Removing an absent edge is a no-op.
    pub fn remove_edge(&mut self, u: &Node<K>, v: &Node<K>) {
        self.store.remove_entry(u, v);
    }

    /// Removes every edge from an iterator.
    pub fn remove_edges_from<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = Edge<K>>,
    {
        for edge in edges {
            self.remove_edge(edge.source(), edge.target());
        }
    }

    // ── Node CRUD ──────────────────────────────────────────────────────

    /// Adds a node. Re-adding an existing node keeps its edges.
    pub fn add_node(&mut self, node: Node<K>) {
        self.store.add_node(node);
    }

    /// Adds every node from an iterator.
    pub fn add_nodes_from<I>(&mut self, nodes: I)
    where
        I: IntoIterator<Item = Node<K>>,
    {
        self.store.add_nodes_from(nodes);
    }

    /// Removes a node and every edge touching it.
    pub fn remove_node(&mut self, node: &Node<K>) {
        self.store.remove_node(node);
    }

    /// Removes every node from an iterator.
    pub fn remove_nodes_from<I>(&mut self, nodes: I)
    where
        I: IntoIterator<Item = Node<K>>,
    {
        self.store.remove_nodes_from(nodes);
    }

    /// Drops all nodes and edges.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    // ── Queries ────────────────────────────────────────────────────────

    /// Returns true if the node is present.
    #[must_use]
    pub fn has_node(&self, node: &Node<K>) -> bool {
        self.store.has_node(node)
    }

    /// Returns true if the edge `u -> v` exists.
    #[must_use]
    pub fn has_edge(&self, u: &Node<K>, v: &Node<K>) -> bool {
        self.store.has_edge(u, v)
    }

    /// Returns the weight of `u -> v`, if the edge exists.
    #[must_use]
    pub fn edge_weight(&self, u: &Node<K>, v: &Node<K>) -> Option<f64> {
        self.store.edge_weight(u, v)
    }

    /// Returns all nodes.
    #[must_use]
    pub fn nodes(&self) -> Vec<Node<K>> {
        self.store.nodes()
    }

    /// Returns one [`Edge`] per directed edge.
    #[must_use]
    pub fn edges(&self) -> Vec<Edge<K>> {
        self.store.edges()
    }

    /// Returns the targets of the node's outgoing edges.
    #[must_use]
    pub fn successors(&self, node: &Node<K>) -> Vec<Node<K>> {
        self.store.successors(node)
    }

    /// Returns the node's outgoing edges as `(target, weight)` pairs.
    #[must_use]
    pub fn weighted_successors(&self, node: &Node<K>) -> Vec<(Node<K>, f64)> {
        self.store.weighted_successors(node)
    }

    /// Returns the sources of the node's incoming edges. Costs a full
    /// adjacency scan; see [`AdjacencyStore::predecessors`].
    #[must_use]
    pub fn predecessors(&self, node: &Node<K>) -> Vec<Node<K>> {
        self.store.predecessors(node)
    }

    /// Returns successors and predecessors, concatenated. A reciprocal
    /// pair lists the other endpoint twice.
    #[must_use]
    pub fn neighbors(&self, node: &Node<K>) -> Vec<Node<K>> {
        self.store.neighbors(node)
    }

    // ── Degrees and counts ─────────────────────────────────────────────

    /// Number of outgoing edges.
    #[must_use]
    pub fn out_degree(&self, node: &Node<K>) -> usize {
        self.store.out_degree(node)
    }

    /// Number of incoming edges.
    #[must_use]
    pub fn in_degree(&self, node: &Node<K>) -> usize {
        self.store.in_degree(node)
    }

    /// In-degree plus out-degree: a directed self-loop contributes two.
    #[must_use]
    pub fn degree(&self, node: &Node<K>) -> usize {
        self.store.degree(node)
    }

    /// Returns the node count.
    #[must_use]
    pub fn number_of_nodes(&self) -> usize {
        self.store.number_of_nodes()
    }

    /// Returns the directed-edge count.
    #[must_use]
    pub fn number_of_edges(&self) -> usize {
        self.store.number_of_edges()
    }

    /// Borrows the underlying store.
    #[must_use]
    pub fn store(&self) -> &AdjacencyStore<K> {
        &self.store
    }
}
