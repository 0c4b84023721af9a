//! Search results: distance/predecessor maps and reconstructed paths.

use std::collections::HashMap;
use std::hash::Hash;

use serde::Serialize;

use crate::graph::Node;

/// Single-source search output: the distance and predecessor maps produced
/// by [`bfs`](crate::path::bfs) or [`dijkstra`](crate::path::dijkstra).
///
/// The start node is recorded as its own predecessor, the sentinel that
/// means "reached, nothing further back". Any node absent from the
/// predecessor map was never reached. BFS records distances only for
/// reached nodes; Dijkstra records every graph node, with `f64::INFINITY`
/// standing for unreachable.
#[derive(Debug, Clone)]
pub struct ShortestPaths<K> {
    start: Node<K>,
    distances: HashMap<Node<K>, f64>,
    predecessors: HashMap<Node<K>, Node<K>>,
}

impl<K: Eq + Hash + Clone> ShortestPaths<K> {
    pub(crate) fn new(
        start: Node<K>,
        distances: HashMap<Node<K>, f64>,
        predecessors: HashMap<Node<K>, Node<K>>,
    ) -> Self {
        Self {
            start,
            distances,
            predecessors,
        }
    }

    /// Returns the search start node.
    #[must_use]
    pub fn start(&self) -> &Node<K> {
        &self.start
    }

    /// Returns the recorded distance of `node`, if the search assigned
    /// one.
    #[must_use]
    pub fn distance(&self, node: &Node<K>) -> Option<f64> {
        self.distances.get(node).copied()
    }

    /// Borrows the full distance map.
    #[must_use]
    pub fn distances(&self) -> &HashMap<Node<K>, f64> {
        &self.distances
    }

    /// Returns the predecessor of `node` on its shortest path; the start
    /// node is its own predecessor.
    #[must_use]
    pub fn predecessor(&self, node: &Node<K>) -> Option<&Node<K>> {
        self.predecessors.get(node)
    }

    /// Returns true if the search reached `node`.
    #[must_use]
    pub fn reached(&self, node: &Node<K>) -> bool {
        self.predecessors.contains_key(node)
    }

    /// Reconstructs the shortest path from the start to `target` by
    /// walking the predecessor chain backwards.
    ///
    /// An unreached target yields [`PathResult::unreachable`]; the start
    /// itself yields the single-node path with cost 0.
    #[must_use]
    pub fn path_to(&self, target: &Node<K>) -> PathResult<K> {
        if !self.reached(target) {
            return PathResult::unreachable();
        }

        let mut nodes = vec![target.clone()];
        let mut current = target.clone();
        while current != self.start {
            let Some(previous) = self.predecessors.get(&current) else {
                break;
            };
            nodes.push(previous.clone());
            current = previous.clone();
        }
        nodes.reverse();

        let cost = self
            .distances
            .get(target)
            .copied()
            .unwrap_or(f64::INFINITY);
        PathResult::new(nodes, cost)
    }
}

/// A reconstructed path with its total cost.
///
/// An unreachable target is a normal outcome, not an error: it carries an
/// empty node list and an infinite cost. For BFS the cost counts hops; for
/// Dijkstra it sums edge weights.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult<K> {
    nodes: Vec<Node<K>>,
    cost: f64,
}

impl<K> PathResult<K> {
    pub(crate) fn new(nodes: Vec<Node<K>>, cost: f64) -> Self {
        Self { nodes, cost }
    }

    pub(crate) fn unreachable() -> Self {
        Self {
            nodes: Vec::new(),
            cost: f64::INFINITY,
        }
    }

    /// Returns the path nodes from start to target, inclusive.
    #[must_use]
    pub fn nodes(&self) -> &[Node<K>] {
        &self.nodes
    }

    /// Returns the number of nodes on the path (0 when unreachable).
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true for the unreachable result.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns true if a path was found.
    #[must_use]
    pub fn found(&self) -> bool {
        !self.nodes.is_empty()
    }

    /// Returns the total path cost (`f64::INFINITY` when unreachable).
    #[must_use]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Consumes the result and returns the path nodes.
    #[must_use]
    pub fn into_nodes(self) -> Vec<Node<K>> {
        self.nodes
    }
}
