//! Canonical adjacency storage shared by both graph variants.
//!
//! One nested map holds the whole graph: node to (neighbor to weight).
//! Everything that does not depend on edge direction lives here; the
//! directed and undirected wrappers own the edge-mutation semantics and
//! write through the crate-internal entry primitives.

use std::collections::HashMap;
use std::hash::Hash;

use super::types::{Edge, Node};

/// Mutable adjacency-map storage for weighted graphs.
///
/// Each node owns a map of outgoing entries, so a `(u, v)` pair has exactly
/// one slot: re-adding an edge overwrites the stored weight and parallel
/// edges are unrepresentable. Node membership is the outer map, which means
/// every edge endpoint always has a record even when its own adjacency is
/// empty.
///
/// Mutations never fail: removing an absent node or entry is a no-op, and
/// adding a node twice leaves its adjacency untouched. Queries on unknown
/// nodes return empty results rather than errors.
///
/// Sequence-returning queries materialize fresh `Vec`s in unspecified
/// order (`HashMap` iteration order, which varies run to run).
///
/// A [`Clone`] of the store is a deep copy: the nested maps own their keys,
/// so the clone shares no state with the original.
///
/// # Example
///
/// ```rust
/// use cesta_core::{AdjacencyStore, Node};
///
/// let mut store = AdjacencyStore::new();
/// store.add_node(Node::new("a"));
/// store.add_node(Node::new("a"));
///
/// assert!(store.has_node(&Node::new("a")));
/// assert_eq!(store.number_of_nodes(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct AdjacencyStore<K> {
    adjacencies: HashMap<Node<K>, HashMap<Node<K>, f64>>,
}

impl<K> Default for AdjacencyStore<K> {
    fn default() -> Self {
        Self {
            adjacencies: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> AdjacencyStore<K> {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ── Node CRUD ──────────────────────────────────────────────────────

    /// Adds a node. Re-adding an existing node keeps its adjacency.
    pub fn add_node(&mut self, node: Node<K>) {
        self.adjacencies.entry(node).or_default();
    }

    /// Adds every node from an iterator.
    pub fn add_nodes_from<I>(&mut self, nodes: I)
    where
        I: IntoIterator<Item = Node<K>>,
    {
        for node in nodes {
            self.add_node(node);
        }
    }

    /// Removes a node and scrubs every entry pointing at it.
    ///
    /// Walks all adjacencies, so removal costs O(V) on top of dropping the
    /// node's own record. Removing an absent node is a no-op.
    pub fn remove_node(&mut self, node: &Node<K>) {
        for targets in self.adjacencies.values_mut() {
            targets.remove(node);
        }
        self.adjacencies.remove(node);
    }

    /// Removes every node from an iterator.
    pub fn remove_nodes_from<I>(&mut self, nodes: I)
    where
        I: IntoIterator<Item = Node<K>>,
    {
        for node in nodes {
            self.remove_node(&node);
        }
    }

    /// Returns true if the node is present.
    #[must_use]
    pub fn has_node(&self, node: &Node<K>) -> bool {
        self.adjacencies.contains_key(node)
    }

    /// Drops all nodes and entries.
    pub fn clear(&mut self) {
        self.adjacencies.clear();
    }

    // ── Entry primitives (direction semantics live in the variants) ────

    /// Writes the directional entry `u -> v`, creating both endpoints as
    /// needed. Last write wins for an existing entry; a self-loop occupies
    /// the single `u -> u` slot.
    pub(crate) fn insert_entry(&mut self, u: Node<K>, v: Node<K>, weight: f64) {
        self.add_node(v.clone());
        self.adjacencies.entry(u).or_default().insert(v, weight);
    }

    /// Drops the directional entry `u -> v` if present. Endpoints stay.
    pub(crate) fn remove_entry(&mut self, u: &Node<K>, v: &Node<K>) {
        if let Some(targets) = self.adjacencies.get_mut(u) {
            targets.remove(v);
        }
    }

    // ── Queries ────────────────────────────────────────────────────────

    /// Returns true if the entry `u -> v` is stored.
    #[must_use]
    pub fn has_edge(&self, u: &Node<K>, v: &Node<K>) -> bool {
        self.adjacencies
            .get(u)
            .is_some_and(|targets| targets.contains_key(v))
    }

    /// Returns the weight of the stored entry `u -> v`, if any.
    #[must_use]
    pub fn edge_weight(&self, u: &Node<K>, v: &Node<K>) -> Option<f64> {
        self.adjacencies
            .get(u)
            .and_then(|targets| targets.get(v).copied())
    }

    /// Returns all nodes.
    #[must_use]
    pub fn nodes(&self) -> Vec<Node<K>> {
        self.adjacencies.keys().cloned().collect()
    }

    /// Returns one [`Edge`] per stored adjacency entry.
    ///
    /// An undirected graph stores each logical edge in both directions, so
    /// it surfaces here twice (once per direction); a self-loop surfaces
    /// once.
    #[must_use]
    pub fn edges(&self) -> Vec<Edge<K>> {
        self.adjacencies
            .iter()
            .flat_map(|(u, targets)| {
                targets
                    .iter()
                    .map(move |(v, weight)| Edge::new(u.clone(), v.clone(), *weight))
            })
            .collect()
    }

    /// Returns the targets of the node's stored entries.
    #[must_use]
    pub fn successors(&self, node: &Node<K>) -> Vec<Node<K>> {
        self.adjacencies
            .get(node)
            .map(|targets| targets.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Returns the node's stored entries as `(target, weight)` pairs.
    #[must_use]
    pub fn weighted_successors(&self, node: &Node<K>) -> Vec<(Node<K>, f64)> {
        self.adjacencies
            .get(node)
            .map(|targets| {
                targets
                    .iter()
                    .map(|(v, weight)| (v.clone(), *weight))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns every node holding an entry that points at `node`.
    ///
    /// There is no reverse index: this scans the whole adjacency table in
    /// O(V + E), keeping mutation paths index-free.
    #[must_use]
    pub fn predecessors(&self, node: &Node<K>) -> Vec<Node<K>> {
        self.adjacencies
            .iter()
            .filter(|(_, targets)| targets.contains_key(node))
            .map(|(source, _)| source.clone())
            .collect()
    }

    /// Returns successors and predecessors, concatenated.
    ///
    /// A reciprocal pair (`u -> v` and `v -> u`) lists the other endpoint
    /// twice; the undirected wrapper overrides this with its symmetric
    /// view.
    #[must_use]
    pub fn neighbors(&self, node: &Node<K>) -> Vec<Node<K>> {
        let mut all = self.successors(node);
        all.extend(self.predecessors(node));
        all
    }

    // ── Degrees and counts ─────────────────────────────────────────────

    /// Number of stored entries leaving the node.
    #[must_use]
    pub fn out_degree(&self, node: &Node<K>) -> usize {
        self.adjacencies.get(node).map_or(0, HashMap::len)
    }

    /// Number of stored entries pointing at the node. Costs a predecessor
    /// scan.
    #[must_use]
    pub fn in_degree(&self, node: &Node<K>) -> usize {
        self.predecessors(node).len()
    }

    /// In-degree plus out-degree, so a self-loop contributes two.
    ///
    /// The undirected wrapper overrides this with the symmetric count,
    /// where a self-loop contributes one.
    #[must_use]
    pub fn degree(&self, node: &Node<K>) -> usize {
        self.in_degree(node) + self.out_degree(node)
    }

    /// Returns the node count.
    #[must_use]
    pub fn number_of_nodes(&self) -> usize {
        self.adjacencies.len()
    }

    /// Returns the stored-entry count.
    ///
    /// Follows the representation: an undirected logical edge counts twice
    /// and a self-loop once.
    #[must_use]
    pub fn number_of_edges(&self) -> usize {
        self.adjacencies.values().map(HashMap::len).sum()
    }
}
