use criterion::{criterion_group, criterion_main, Criterion};
use grid_routing::{Cell, CellKind, RoutingGrid};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

fn random_grid(rows: usize, cols: usize, rng: &mut StdRng) -> RoutingGrid {
    let mut grid = RoutingGrid::new(rows, cols);
    for row in 0..rows as i32 {
        for col in 0..cols as i32 {
            if rng.gen_bool(0.3) {
                grid.set_kind(Cell::new(row, col), CellKind::Obstacle);
            } else if rng.gen_bool(0.1) {
                grid.set_kind(Cell::new(row, col), CellKind::Risky(3.0));
            }
        }
    }
    grid.generate_components();
    grid
}

fn shortest_path_bench(c: &mut Criterion) {
    const N: usize = 64;
    let mut rng = StdRng::seed_from_u64(0);
    let start = Cell::new(0, 0);
    let end = Cell::new(N as i32 - 1, N as i32 - 1);
    let grids: Vec<RoutingGrid> = (0..10)
        .map(|_| {
            let mut grid = random_grid(N, N, &mut rng);
            grid.set_kind(start, CellKind::Free);
            grid.set_kind(end, CellKind::Free);
            grid
        })
        .collect();

    c.bench_function("shortest_path 64x64", |b| {
        b.iter(|| {
            for grid in &grids {
                black_box(grid.shortest_path(start, end));
            }
        })
    });
}

fn plan_route_bench(c: &mut Criterion) {
    const N: usize = 128;
    let mut rng = StdRng::seed_from_u64(0);
    let mut grid = random_grid(N, N, &mut rng);
    // Waypoints are kept on one component so every leg runs a full search.
    let mut anchor = None;
    let mut placed = 0;
    while placed < 8 {
        let cell = Cell::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        if !grid.is_traversable(cell) || matches!(grid.kind(cell), CellKind::Waypoint(_)) {
            continue;
        }
        if let Some(anchor) = anchor {
            if grid.unreachable(anchor, cell) {
                continue;
            }
        }
        grid.set_kind(cell, CellKind::Waypoint(placed as u32 + 1));
        anchor.get_or_insert(cell);
        placed += 1;
    }

    c.bench_function("plan_route 128x128, 8 waypoints", |b| {
        b.iter(|| {
            black_box(grid.plan_route()).ok();
        })
    });
}

criterion_group!(benches, shortest_path_bench, plan_route_bench);
criterion_main!(benches);
