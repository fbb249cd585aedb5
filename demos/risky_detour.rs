use grid_routing::{parse_grid, render_route, CellKind, SymbolTable};

// The same crossing is planned twice: with a heavy risk weight the planner
// detours around the risky cell, with a light one it walks straight through.
const CROSSING: &str = "\
1 P 2
O O O
O O O
";

fn main() {
    for weight in [5.0, 1.5] {
        let mut table = SymbolTable::default();
        table.insert('P', CellKind::Risky(weight));
        let grid = parse_grid(CROSSING, &table).expect("grid text is well formed");
        let route = grid.plan_route().expect("both waypoints are reachable");
        println!("risk weight {weight}: cost {:.3}", route.cost);
        println!("{}", render_route(&grid, &route.cells));
    }
}
