use grid_routing::{Cell, CellKind, RoutingGrid};

// In this example a path is found on a grid with shape
// S . . .
// . # # .
// . # # .
// . . . G
// S marks the start
// G marks the goal
fn main() {
    let mut grid = RoutingGrid::new(4, 4);
    grid.set_kind(Cell::new(1, 1), CellKind::Obstacle);
    grid.set_kind(Cell::new(1, 2), CellKind::Obstacle);
    grid.set_kind(Cell::new(2, 1), CellKind::Obstacle);
    grid.set_kind(Cell::new(2, 2), CellKind::Obstacle);
    grid.generate_components();
    let start = Cell::new(0, 0);
    let goal = Cell::new(3, 3);
    if let Some(path) = grid.shortest_path(start, goal) {
        println!("A path has been found with cost {:.3}:", path.cost);
        for cell in path.cells {
            println!("{}", cell);
        }
    }
}
