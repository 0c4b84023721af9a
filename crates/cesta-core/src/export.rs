//! Plain-text edge-list export.
//!
//! Emits one `'<source>' '<target>'` line per stored adjacency entry, the
//! format plain edge-list readers expect. Weights are not exported, and an
//! undirected graph contributes two lines per logical edge (one per stored
//! direction).

use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::graph::Edge;

/// Writes the edge list to `out`, one quoted pair per line.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if a write fails.
///
/// # Example
///
/// ```rust
/// use cesta_core::{export::write_edge_list, DirectedGraph, Node};
///
/// let mut graph = DirectedGraph::new();
/// graph.add_edge(Node::new("a"), Node::new("b"), 1.0);
///
/// let mut out = Vec::new();
/// write_edge_list(&graph.edges(), &mut out)?;
/// assert_eq!(String::from_utf8(out).unwrap(), "'a' 'b'\n");
/// # Ok::<(), cesta_core::Error>(())
/// ```
pub fn write_edge_list<K, W>(edges: &[Edge<K>], mut out: W) -> Result<()>
where
    K: Display,
    W: Write,
{
    for edge in edges {
        writeln!(out, "'{}' '{}'", edge.source(), edge.target())?;
    }
    Ok(())
}

/// Creates `path` and writes the edge list into it through a buffered
/// writer.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if the file cannot be created
/// or a write fails.
pub fn export_edge_list<K, P>(edges: &[Edge<K>], path: P) -> Result<()>
where
    K: Display,
    P: AsRef<Path>,
{
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_edge_list(edges, &mut writer)?;
    writer.flush()?;
    Ok(())
}
