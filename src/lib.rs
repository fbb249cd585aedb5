//! # grid_routing
//!
//! Risk-weighted pathfinding on 2-D grids. Implements
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) over the
//! eight-connected neighbourhood, with per-cell risk multipliers scaling
//! Euclidean edge costs, and chains searches across labelled waypoints into a
//! single ordered route. Pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! to avoid flood-filling behaviour if no path exists.
//!
//! Grids are built programmatically ([RoutingGrid::new] plus
//! [RoutingGrid::set_kind]) or read from whitespace-separated token text
//! ([parse_grid] and [load_grid]). [RoutingGrid::shortest_path] answers
//! single start/goal queries; [RoutingGrid::plan_route] visits every
//! waypoint of the grid in label order.
mod cell;
mod cost;
mod parse;
mod render;
mod route;
mod routing_grid;
mod search;

pub use cell::Cell;
pub use cost::euclidean;
pub use parse::{load_grid, parse_grid, ParseError, SymbolTable};
pub use render::{render_grid, render_route};
pub use route::{Route, RouteError};
pub use routing_grid::{CellKind, RoutingGrid};
pub use search::Path;
