use grid_routing::{load_grid, render_route, SymbolTable};
use std::process::exit;

// Loads a grid file given on the command line, plans the waypoint tour and
// prints it. Grid files hold whitespace-separated tokens, one row per line:
// O free, X obstacle, P risky, digits for waypoints.
fn main() {
    let path = match std::env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("usage: grid_file <path>");
            exit(2);
        }
    };
    let grid = match load_grid(&path, &SymbolTable::default()) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("{path}: {err}");
            exit(1);
        }
    };
    match grid.plan_route() {
        Ok(route) => {
            println!("Route of {} cells, cost {:.3}:", route.cells.len(), route.cost);
            println!("{}", render_route(&grid, &route.cells));
        }
        Err(err) => {
            eprintln!("no route: {err}");
            exit(1);
        }
    }
}
