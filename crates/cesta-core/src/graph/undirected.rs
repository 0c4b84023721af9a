//! Undirected graph variant.

use std::hash::Hash;

use super::store::AdjacencyStore;
use super::types::{Edge, Node};

/// An undirected weighted graph.
///
/// Wraps an [`AdjacencyStore`] and keeps it symmetric: `add_edge(u, v, w)`
/// writes both `u -> v` and `v -> u` with the same weight, and
/// `remove_edge` drops both. Neighbor-style queries are overridden so a
/// logical edge is never double counted; counting queries follow the
/// symmetric representation and are documented where that shows.
///
/// # Example
///
/// ```rust
/// use cesta_core::{Node, UndirectedGraph};
///
/// let mut graph = UndirectedGraph::new();
/// graph.add_edge(Node::new("a"), Node::new("b"), 2.0);
///
/// assert!(graph.has_edge(&Node::new("a"), &Node::new("b")));
/// assert!(graph.has_edge(&Node::new("b"), &Node::new("a")));
/// assert_eq!(graph.degree(&Node::new("a")), 1);
/// ```
#[derive(Debug, Clone)]
pub struct UndirectedGraph<K> {
    store: AdjacencyStore<K>,
}

impl<K> Default for UndirectedGraph<K> {
    fn default() -> Self {
        Self {
            store: AdjacencyStore::default(),
        }
    }
}

impl<K: Eq + Hash + Clone> UndirectedGraph<K> {
    /// Creates an empty undirected graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ── Edge mutation ──────────────────────────────────────────────────

    /// Adds the edge between `u` and `v`, storing both directions with the
    /// same weight. Re-adding overwrites the weight; a self-loop occupies
    /// a single slot.
    pub fn add_edge(&mut self, u: Node<K>, v: Node<K>, weight: f64) {
        self.store.insert_entry(u.clone(), v.clone(), weight);
        self.store.insert_entry(v, u, weight);
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

    /// Removes the edge between `u` and `v`, dropping both stored
    /// directions. Endpoints stay; removing an absent edge is a no-op.
    pub fn remove_edge(&mut self, u: &Node<K>, v: &Node<K>) {
        self.store.remove_entry(u, v);
        self.store.remove_entry(v, u);
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

    /// Removes a node and every edge touching it: the scrub drops both
    /// stored directions of each incident edge.
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

    /// Returns true if the edge exists. Symmetric storage makes the
    /// argument order irrelevant.
    #[must_use]
    pub fn has_edge(&self, u: &Node<K>, v: &Node<K>) -> bool {
        self.store.has_edge(u, v)
    }

    /// Returns the edge weight, if the edge exists.
    #[must_use]
    pub fn edge_weight(&self, u: &Node<K>, v: &Node<K>) -> Option<f64> {
        self.store.edge_weight(u, v)
    }

    /// Returns all nodes.
    #[must_use]
    pub fn nodes(&self) -> Vec<Node<K>> {
        self.store.nodes()
    }

    /// Returns one [`Edge`] per stored entry: each logical edge surfaces
    /// twice (once per direction), a self-loop once.
    #[must_use]
    pub fn edges(&self) -> Vec<Edge<K>> {
        self.store.edges()
    }

    /// Returns the nodes sharing an edge with `node`, each listed once.
    #[must_use]
    pub fn neighbors(&self, node: &Node<K>) -> Vec<Node<K>> {
        self.store.successors(node)
    }

    /// Same as [`neighbors`](Self::neighbors): edges have no direction
    /// here.
    #[must_use]
    pub fn successors(&self, node: &Node<K>) -> Vec<Node<K>> {
        self.store.successors(node)
    }

    /// Same as [`neighbors`](Self::neighbors): edges have no direction
    /// here.
    #[must_use]
    pub fn predecessors(&self, node: &Node<K>) -> Vec<Node<K>> {
        self.store.successors(node)
    }

    /// Returns the node's edges as `(neighbor, weight)` pairs.
    #[must_use]
    pub fn weighted_successors(&self, node: &Node<K>) -> Vec<(Node<K>, f64)> {
        self.store.weighted_successors(node)
    }

    // ── Degrees and counts ─────────────────────────────────────────────

    /// Number of distinct neighbors: an undirected self-loop contributes
    /// one, unlike the directed variant where it contributes two.
    #[must_use]
    pub fn degree(&self, node: &Node<K>) -> usize {
        self.store.out_degree(node)
    }

    /// Stored-entry view of the in-degree; equals [`degree`](Self::degree)
    /// by symmetry.
    #[must_use]
    pub fn in_degree(&self, node: &Node<K>) -> usize {
        self.store.in_degree(node)
    }

    /// Stored-entry view of the out-degree; equals
    /// [`degree`](Self::degree) by symmetry.
    #[must_use]
    pub fn out_degree(&self, node: &Node<K>) -> usize {
        self.store.out_degree(node)
    }

    /// Returns the node count.
    #[must_use]
    pub fn number_of_nodes(&self) -> usize {
        self.store.number_of_nodes()
    }

    /// Returns the stored-entry count: each logical edge counts twice, a
    /// self-loop once.
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
