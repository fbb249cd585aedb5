use grid_routing::{parse_grid, render_route, SymbolTable};

// Plans one continuous tour over the waypoints 1, 2 and 3 and prints it on
// top of the grid.
const FIELD: &str = "\
1 O O X O
O X O X 2
O X O O O
3 X O P O
";

fn main() {
    let grid = parse_grid(FIELD, &SymbolTable::default()).expect("grid text is well formed");
    match grid.plan_route() {
        Ok(route) => {
            println!("Route of {} cells, cost {:.3}:", route.cells.len(), route.cost);
            println!("{}", render_route(&grid, &route.cells));
        }
        Err(err) => println!("No route: {err}"),
    }
}
