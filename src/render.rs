//! Console rendering of grids and routes.

use fxhash::FxHashSet;

use crate::cell::Cell;
use crate::routing_grid::{CellKind, RoutingGrid};

fn glyph(kind: CellKind) -> char {
    match kind {
        CellKind::Free => '.',
        CellKind::Obstacle => '#',
        CellKind::Risky(_) => '~',
        CellKind::Waypoint(label) => char::from_digit(label, 10).unwrap_or('+'),
    }
}

/// Renders the grid one character per cell and one line per row: `.` free,
/// `#` obstacle, `~` risky, waypoints as their label digit (`+` beyond 9).
pub fn render_grid(grid: &RoutingGrid) -> String {
    render(grid, &[])
}

/// Renders the grid with a route overlaid as `*`. Waypoint cells keep their
/// label glyph so the visiting order stays readable.
pub fn render_route(grid: &RoutingGrid, route: &[Cell]) -> String {
    render(grid, route)
}

fn render(grid: &RoutingGrid, route: &[Cell]) -> String {
    let on_route: FxHashSet<Cell> = route.iter().copied().collect();
    let mut out = String::with_capacity(grid.rows() * (grid.cols() + 1));
    for row in 0..grid.rows() as i32 {
        for col in 0..grid.cols() as i32 {
            let cell = Cell::new(row, col);
            let kind = grid.kind(cell);
            if on_route.contains(&cell) && !matches!(kind, CellKind::Waypoint(_)) {
                out.push('*');
            } else {
                out.push(glyph(kind));
            }
        }
        out.push('\n');
    }
    out
}
