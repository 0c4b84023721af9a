//! Grid-text parsing into an undirected unit-weight graph.
//!
//! A grid is plain text, one row per line: `.` is a floor tile, `S` and
//! `T` mark the start and target (both standing on floor), and every other
//! character is a wall. Floor tiles become nodes connected to their
//! walkable neighbors with weight 1.0, so hop count and path cost agree.
//!
//! Rows may be ragged: a neighbor outside its own row is simply not floor.
//! Tiles with no walkable neighbor never enter the graph, since nodes are
//! created by edge insertion alone.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::graph::{Node, UndirectedGraph};

const FLOOR: char = '.';
const START: char = 'S';
const TARGET: char = 'T';

/// The four cardinal step offsets: east, west, south, north.
pub const CARDINAL_STEPS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// A position on a rectangular grid: `x` is the column, `y` the row.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct GridPos {
    /// Column index, growing rightwards.
    pub x: i32,
    /// Row index, growing downwards.
    pub y: i32,
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Output of [`parse_grid`]: the graph plus whichever markers were found.
#[derive(Debug, Clone)]
pub struct ParsedGrid {
    /// Floor tiles connected to their walkable neighbors, weight 1.0.
    pub graph: UndirectedGraph<GridPos>,
    /// Position of the `S` marker, if present (the last one wins).
    pub start: Option<Node<GridPos>>,
    /// Position of the `T` marker, if present (the last one wins).
    pub target: Option<Node<GridPos>>,
}

/// A maze ready for path-finding: both markers were present.
#[derive(Debug, Clone)]
pub struct Maze {
    /// The walkable graph.
    pub graph: UndirectedGraph<GridPos>,
    /// The `S` tile.
    pub start: Node<GridPos>,
    /// The `T` tile.
    pub target: Node<GridPos>,
}

/// Parses grid text into an undirected graph.
///
/// `steps` is the neighbor offsets to connect along: pass
/// [`CARDINAL_STEPS`] for four-way movement, or extend with diagonals.
/// Never fails: a text without markers just yields `None` for them, and
/// unknown characters are walls.
#[must_use]
pub fn parse_grid(text: &str, steps: &[(i32, i32)]) -> ParsedGrid {
    let mut floor = HashSet::new();
    let mut start = None;
    let mut target = None;

    let mut y = 0_i32;
    for line in text.lines() {
        let mut x = 0_i32;
        for cell in line.chars() {
            let pos = GridPos { x, y };
            match cell {
                FLOOR => {
                    floor.insert(pos);
                }
                START => {
                    floor.insert(pos);
                    start = Some(Node::new(pos));
                }
                TARGET => {
                    floor.insert(pos);
                    target = Some(Node::new(pos));
                }
                _ => {}
            }
            x += 1;
        }
        y += 1;
    }

    let mut graph = UndirectedGraph::new();
    for pos in &floor {
        for &(dx, dy) in steps {
            let neighbor = GridPos {
                x: pos.x + dx,
                y: pos.y + dy,
            };
            if floor.contains(&neighbor) {
                graph.add_edge(Node::new(*pos), Node::new(neighbor), 1.0);
            }
        }
    }

    ParsedGrid {
        graph,
        start,
        target,
    }
}

/// Reads a grid file and requires both `S` and `T` markers.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read, or
/// [`Error::MissingMarker`] naming the absent marker character.
pub fn load_maze<P: AsRef<Path>>(path: P, steps: &[(i32, i32)]) -> Result<Maze> {
    let text = std::fs::read_to_string(path)?;
    let parsed = parse_grid(&text, steps);
    let start = parsed.start.ok_or(Error::MissingMarker(START))?;
    let target = parsed.target.ok_or(Error::MissingMarker(TARGET))?;

    tracing::debug!(
        nodes = parsed.graph.number_of_nodes(),
        entries = parsed.graph.number_of_edges(),
        "maze loaded"
    );
    Ok(Maze {
        graph: parsed.graph,
        start,
        target,
    })
}
