//! Dijkstra's algorithm: shortest paths over non-negative edge weights.

use std::collections::HashMap;
use std::hash::Hash;

use crate::graph::Node;

use super::lookup::AdjacencyLookup;
use super::tree::{PathResult, ShortestPaths};

/// Runs Dijkstra's algorithm from `start` over every node in the graph.
///
/// All nodes begin at `f64::INFINITY`, the start at 0. Each round extracts
/// the unvisited node with the smallest tentative distance by scanning the
/// whole remaining worklist: O(V²) overall, with no priority queue or
/// ordered-float wrapper involved. Nodes the search never reaches keep
/// their infinite distance and get no predecessor entry.
///
/// Relaxation uses strict `<`, so among equal-cost paths the first one
/// found wins. Negative weights are an unchecked precondition: the
/// algorithm runs but its answers are meaningless.
pub fn dijkstra<K, G>(graph: &G, start: &Node<K>) -> ShortestPaths<K>
where
    K: Eq + Hash + Clone,
    G: AdjacencyLookup<K>,
{
    let mut worklist = graph.all_nodes();
    let mut distances: HashMap<Node<K>, f64> = worklist
        .iter()
        .map(|node| (node.clone(), f64::INFINITY))
        .collect();
    let mut predecessors = HashMap::new();

    distances.insert(start.clone(), 0.0);
    predecessors.insert(start.clone(), start.clone());

    while !worklist.is_empty() {
        // Linear scan for the closest unvisited node.
        let mut min_index = 0;
        let mut min_distance = f64::INFINITY;
        for (index, node) in worklist.iter().enumerate() {
            let distance = distances.get(node).copied().unwrap_or(f64::INFINITY);
            if distance < min_distance {
                min_index = index;
                min_distance = distance;
            }
        }

        let current = worklist.swap_remove(min_index);
        let current_distance = distances.get(&current).copied().unwrap_or(f64::INFINITY);

        for (neighbor, weight) in graph.outgoing(&current) {
            let alternative = current_distance + weight;
            let known = distances.get(&neighbor).copied().unwrap_or(f64::INFINITY);
            if alternative < known {
                distances.insert(neighbor.clone(), alternative);
                predecessors.insert(neighbor, current.clone());
            }
        }
    }

    tracing::debug!(reached = predecessors.len(), "dijkstra settled all nodes");
    ShortestPaths::new(start.clone(), distances, predecessors)
}

/// Finds the cheapest path from `start` to `target` by edge weight.
///
/// There is no `start == target` special case: the start's self-sentinel
/// predecessor already makes `dijkstra_to(g, s, s)` come out as the
/// single-node path with cost 0. An unreachable target yields the empty
/// [`PathResult`] with infinite cost.
///
/// # Example
///
/// ```rust
/// use cesta_core::{dijkstra_to, Node, UndirectedGraph};
///
/// let mut graph = UndirectedGraph::new();
/// graph.add_edge(Node::new("a"), Node::new("b"), 4.0);
/// graph.add_edge(Node::new("b"), Node::new("c"), 1.0);
/// graph.add_edge(Node::new("a"), Node::new("c"), 9.0);
///
/// let path = dijkstra_to(&graph, &Node::new("a"), &Node::new("c"));
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.cost(), 5.0);
/// ```
pub fn dijkstra_to<K, G>(graph: &G, start: &Node<K>, target: &Node<K>) -> PathResult<K>
where
    K: Eq + Hash + Clone,
    G: AdjacencyLookup<K>,
{
    dijkstra(graph, start).path_to(target)
}
