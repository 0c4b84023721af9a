//! Breadth-first search: shortest paths by hop count.

use std::collections::{HashMap, HashSet, VecDeque};
use std::hash::Hash;

use crate::graph::Node;

use super::lookup::AdjacencyLookup;
use super::tree::{PathResult, ShortestPaths};

/// Runs a breadth-first search from `start`, recording hop distances and
/// predecessors for every reachable node.
///
/// Edge weights are ignored; each hop costs 1. Distances are reported as
/// `f64` so BFS and Dijkstra share one result type. The whole reachable
/// component is explored, O(V + E).
pub fn bfs<K, G>(graph: &G, start: &Node<K>) -> ShortestPaths<K>
where
    K: Eq + Hash + Clone,
    G: AdjacencyLookup<K>,
{
    let mut visited = HashSet::new();
    let mut distances = HashMap::new();
    let mut predecessors = HashMap::new();
    let mut queue = VecDeque::new();

    visited.insert(start.clone());
    distances.insert(start.clone(), 0.0);
    predecessors.insert(start.clone(), start.clone());
    queue.push_back((start.clone(), 0.0));

    while let Some((current, distance)) = queue.pop_front() {
        for (neighbor, _weight) in graph.outgoing(&current) {
            if !visited.contains(&neighbor) {
                visited.insert(neighbor.clone());
                let next = distance + 1.0;
                distances.insert(neighbor.clone(), next);
                predecessors.insert(neighbor.clone(), current.clone());
                queue.push_back((neighbor, next));
            }
        }
    }

    tracing::debug!(reached = distances.len(), "bfs explored component");
    ShortestPaths::new(start.clone(), distances, predecessors)
}

/// Finds the shortest path from `start` to `target` by hop count.
///
/// `start == target` short-circuits to the trivial single-node path with
/// cost 0 before any search runs. An unreachable target yields the empty
/// [`PathResult`] with infinite cost.
///
/// # Example
///
/// ```rust
/// use cesta_core::{bfs_to, Node, UndirectedGraph};
///
/// let mut graph = UndirectedGraph::new();
/// graph.add_edge(Node::new(1), Node::new(2), 1.0);
/// graph.add_edge(Node::new(2), Node::new(3), 1.0);
///
/// let path = bfs_to(&graph, &Node::new(1), &Node::new(3));
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.cost(), 2.0);
/// ```
pub fn bfs_to<K, G>(graph: &G, start: &Node<K>, target: &Node<K>) -> PathResult<K>
where
    K: Eq + Hash + Clone,
    G: AdjacencyLookup<K>,
{
    if start == target {
        return PathResult::new(vec![start.clone()], 0.0);
    }
    bfs(graph, start).path_to(target)
}
