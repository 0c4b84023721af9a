//! `cesta` - solve plain-text mazes with BFS and Dijkstra.
//!
//! Reads a grid file (`.` floor, `S` start, `T` target), runs the selected
//! search, and prints the route as text or JSON. An unreachable target is a
//! reported outcome, not an error.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cesta_core::export::export_edge_list;
use cesta_core::grid::{load_maze, GridPos, Maze, CARDINAL_STEPS};
use cesta_core::{bfs_to, dijkstra_to, PathResult};

/// Cesta - shortest paths through plain-text mazes
#[derive(Parser, Debug)]
#[command(name = "cesta")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the maze file ('.' floor, 'S' start, 'T' target, others wall)
    maze: PathBuf,

    /// Search algorithm to run
    #[arg(long, value_enum, default_value = "both", env = "CESTA_ALGO")]
    algo: Algorithm,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Also write the maze's edge list to this file
    #[arg(long)]
    export_edges: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Algorithm {
    Bfs,
    Dijkstra,
    Both,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing. Results go to stdout, so logs keep to stderr.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let maze = load_maze(&args.maze, &CARDINAL_STEPS)
        .with_context(|| format!("failed to load maze from {}", args.maze.display()))?;
    tracing::info!(
        "Maze loaded: {} tiles, start {}, target {}",
        maze.graph.number_of_nodes(),
        maze.start,
        maze.target
    );

    if matches!(args.algo, Algorithm::Bfs | Algorithm::Both) {
        report("bfs", &bfs_to(&maze.graph, &maze.start, &maze.target), args.format);
    }
    if matches!(args.algo, Algorithm::Dijkstra | Algorithm::Both) {
        report("dijkstra", &dijkstra_to(&maze.graph, &maze.start, &maze.target), args.format);
    }

    if let Some(path) = &args.export_edges {
        export_edges(&maze, path)?;
    }

    Ok(())
}

/// Prints one search outcome in the selected format.
fn report(algorithm: &str, path: &PathResult<GridPos>, format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            if path.found() {
                println!("{}: {} tiles, cost {}", algorithm, path.len(), path.cost());
                println!("  {}", route_line(path));
            } else {
                println!("{}: target unreachable", algorithm);
            }
        }
        OutputFormat::Json => {
            // Infinite cost has no JSON number, so it serializes as null.
            let doc = serde_json::json!({
                "algorithm": algorithm,
                "found": path.found(),
                "tiles": path.len(),
                "cost": path.cost(),
                "path": path.nodes(),
            });
            println!("{doc}");
        }
    }
}

/// Joins the route tiles into a single arrow-separated line.
fn route_line(path: &PathResult<GridPos>) -> String {
    path.nodes()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn export_edges(maze: &Maze, path: &Path) -> anyhow::Result<()> {
    let edges = maze.graph.edges();
    export_edge_list(&edges, path)
        .with_context(|| format!("failed to export edge list to {}", path.display()))?;
    tracing::info!("Edge list exported: {} entries to {}", edges.len(), path.display());
    Ok(())
}
