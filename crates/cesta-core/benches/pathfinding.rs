//! Search benchmarks over generated grids.
//!
//! Dijkstra's linear-scan extraction is O(V²), so the grid sizes here are
//! deliberately modest; BFS on the same grids gives the O(V + E) contrast.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use cesta_core::grid::{parse_grid, GridPos, CARDINAL_STEPS};
use cesta_core::{bfs_to, dijkstra_to, Node, UndirectedGraph};

/// Generates a `side` x `side` grid with a reproducible sprinkle of walls,
/// keeping the border ring open so opposite corners stay connected.
fn grid_text(side: usize, wall_ratio: f64) -> String {
    let mut rng = StdRng::seed_from_u64(42);
    let mut text = String::new();
    for y in 0..side {
        for x in 0..side {
            let on_border = x == 0 || y == 0 || x == side - 1 || y == side - 1;
            if !on_border && rng.gen_bool(wall_ratio) {
                text.push('#');
            } else {
                text.push('.');
            }
        }
        text.push('\n');
    }
    text
}

fn corner_graph(side: usize) -> (UndirectedGraph<GridPos>, Node<GridPos>, Node<GridPos>) {
    let text = grid_text(side, 0.25);
    let parsed = parse_grid(&text, &CARDINAL_STEPS);
    let last = i32::try_from(side - 1).unwrap_or(i32::MAX);
    let start = Node::new(GridPos { x: 0, y: 0 });
    let target = Node::new(GridPos { x: last, y: last });
    (parsed.graph, start, target)
}

fn bench_bfs(c: &mut Criterion) {
    let (graph, start, target) = corner_graph(40);
    c.bench_function("bfs_to_40x40_grid", |bencher| {
        bencher.iter(|| black_box(bfs_to(&graph, &start, &target)));
    });
}

fn bench_dijkstra(c: &mut Criterion) {
    let (graph, start, target) = corner_graph(40);
    c.bench_function("dijkstra_to_40x40_grid", |bencher| {
        bencher.iter(|| black_box(dijkstra_to(&graph, &start, &target)));
    });
}

criterion_group!(benches, bench_bfs, bench_dijkstra);
criterion_main!(benches);
