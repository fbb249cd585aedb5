//! End-to-end scenarios: parse a grid from text, plan over it and check the
//! resulting routes and renderings.

use grid_routing::{
    parse_grid, render_route, Cell, CellKind, Route, RouteError, RoutingGrid, SymbolTable,
};
use itertools::Itertools;
use std::f64::consts::SQRT_2;

const RISKY_CROSSING: &str = "\
1 P 2
O O O
O O O
";

fn table_with_risk(weight: f64) -> SymbolTable {
    let mut table = SymbolTable::default();
    table.insert('P', CellKind::Risky(weight));
    table
}

/// Every step must join adjacent traversable cells, and the route cost must
/// equal the sum of its edges.
fn assert_well_formed(grid: &RoutingGrid, route: &Route) {
    let mut total = 0.0;
    for (&from, &to) in route.cells.iter().tuple_windows() {
        assert!(from.is_adjacent(&to));
        assert!(grid.is_traversable(to));
        total += grid.edge_cost(from, to);
    }
    assert!((route.cost - total).abs() < 1e-9);
}

#[test]
fn risky_cell_detoured_when_the_weight_is_high() {
    let grid = parse_grid(RISKY_CROSSING, &table_with_risk(5.0)).unwrap();
    let route = grid.plan_route().unwrap();
    assert_eq!(route.cells.first(), Some(&Cell::new(0, 0)));
    assert_eq!(route.cells.last(), Some(&Cell::new(0, 2)));
    assert!(!route.cells.contains(&Cell::new(0, 1)));
    assert!((route.cost - 2.0 * SQRT_2).abs() < 1e-9);
    assert_well_formed(&grid, &route);
}

#[test]
fn risky_cell_crossed_when_the_weight_is_low() {
    let grid = parse_grid(RISKY_CROSSING, &table_with_risk(1.5)).unwrap();
    let route = grid.plan_route().unwrap();
    assert_eq!(
        route.cells,
        vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)]
    );
    assert!((route.cost - 2.5).abs() < 1e-9);
}

#[test]
fn tour_visits_waypoints_in_label_order() {
    let grid = parse_grid(
        "1 O O X 2
         O X O X O
         O X O O O
         3 X O O O
        ",
        &SymbolTable::default(),
    )
    .unwrap();
    let route = grid.plan_route().unwrap();
    assert_eq!(route.cells.first(), Some(&Cell::new(0, 0)));
    assert!(route.cells.contains(&Cell::new(0, 4)));
    assert_eq!(route.cells.last(), Some(&Cell::new(3, 0)));
    assert_well_formed(&grid, &route);
}

#[test]
fn full_wall_fails_the_first_leg() {
    let grid = parse_grid(
        "1 X 2 X 3
         O X O X O
         O X O X O
        ",
        &SymbolTable::default(),
    )
    .unwrap();
    assert_eq!(
        grid.plan_route(),
        Err(RouteError::Unreachable {
            from_label: 1,
            from: Cell::new(0, 0),
            to_label: 2,
            to: Cell::new(0, 2),
        })
    );
}

#[test]
fn start_and_goal_tokens_form_a_two_stop_tour() {
    let grid = parse_grid(
        "2 O O
         O X O
         O O 3
        ",
        &SymbolTable::default(),
    )
    .unwrap();
    let route = grid.plan_route().unwrap();
    let path = grid.shortest_path(Cell::new(0, 0), Cell::new(2, 2)).unwrap();
    assert_eq!(route.cells, path.cells);
    assert!((route.cost - (2.0 + SQRT_2)).abs() < 1e-9);
}

#[test]
fn rendered_routes_show_the_tour() {
    let grid = parse_grid(
        "1 O O
         X X O
         3 O 2
        ",
        &SymbolTable::default(),
    )
    .unwrap();
    let route = grid.plan_route().unwrap();
    assert_eq!(render_route(&grid, &route.cells), "1*.\n##*\n3*2\n");
    assert!((route.cost - (4.0 + SQRT_2)).abs() < 1e-9);
}

#[test]
fn single_waypoint_is_a_trivial_tour() {
    let grid = parse_grid("O 5 O\n", &SymbolTable::default()).unwrap();
    let route = grid.plan_route().unwrap();
    assert_eq!(route.cells, vec![Cell::new(0, 1)]);
    assert_eq!(route.cost, 0.0);
}

#[test]
fn duplicate_labels_from_text_are_rejected_before_searching() {
    let grid = parse_grid("1 O 1\n", &SymbolTable::default()).unwrap();
    assert_eq!(
        grid.plan_route(),
        Err(RouteError::DuplicateLabel {
            label: 1,
            first: Cell::new(0, 0),
            second: Cell::new(0, 2),
        })
    );
}

#[test]
fn grids_without_waypoints_still_answer_point_queries() {
    let grid = parse_grid("O O O\nO X O\n", &SymbolTable::default()).unwrap();
    assert_eq!(grid.plan_route(), Err(RouteError::NoWaypoints));
    let path = grid.shortest_path(Cell::new(1, 0), Cell::new(1, 2)).unwrap();
    assert!(path.cells.len() >= 3);
    assert_well_formed(
        &grid,
        &Route {
            cells: path.cells,
            cost: path.cost,
        },
    );
}
