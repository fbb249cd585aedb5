//! Chaining searches across ordered waypoints into a single route.

use itertools::Itertools;
use log::info;
use thiserror::Error;

use crate::cell::Cell;
use crate::routing_grid::RoutingGrid;

/// A continuous tour visiting every waypoint of a grid in ascending label
/// order.
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    pub cells: Vec<Cell>,
    pub cost: f64,
}

/// Reasons no route can be planned over a grid's waypoints.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum RouteError {
    #[error("the grid defines no waypoints")]
    NoWaypoints,
    #[error("waypoint label {label} is carried by both {first} and {second}")]
    DuplicateLabel { label: u32, first: Cell, second: Cell },
    #[error(
        "no traversable route from waypoint {from_label} at {from} to waypoint {to_label} at {to}"
    )]
    Unreachable {
        from_label: u32,
        from: Cell,
        to_label: u32,
        to: Cell,
    },
}

impl RoutingGrid {
    /// The grid's waypoints sorted by label, validated to be non-empty and
    /// free of duplicate labels. This is the visiting order of
    /// [plan_route](Self::plan_route).
    pub fn ordered_waypoints(&self) -> Result<Vec<(u32, Cell)>, RouteError> {
        let mut waypoints = self.waypoints().to_vec();
        if waypoints.is_empty() {
            return Err(RouteError::NoWaypoints);
        }
        waypoints.sort_by_key(|&(label, _)| label);
        if let Some(((label, first), (_, second))) = waypoints
            .iter()
            .tuple_windows()
            .find(|((a, _), (b, _))| a == b)
        {
            return Err(RouteError::DuplicateLabel {
                label: *label,
                first: *first,
                second: *second,
            });
        }
        Ok(waypoints)
    }

    /// Plans one continuous path visiting every waypoint in ascending label
    /// order by chaining [shortest_path](Self::shortest_path) over
    /// consecutive pairs, keeping the junction cell shared by two legs once.
    /// Planning stops at the first leg without a path: a break in the chain
    /// invalidates the whole route rather than producing a disconnected one.
    /// A single waypoint yields the trivial route of that cell alone at cost
    /// zero.
    pub fn plan_route(&self) -> Result<Route, RouteError> {
        let waypoints = self.ordered_waypoints()?;
        let (_, start) = waypoints[0];
        let mut cells = vec![start];
        let mut cost = 0.0;
        for (&(from_label, from), &(to_label, to)) in waypoints.iter().tuple_windows() {
            info!("Planning leg {} -> {}", from_label, to_label);
            let leg = match self.shortest_path(from, to) {
                Some(leg) => leg,
                None => {
                    return Err(RouteError::Unreachable {
                        from_label,
                        from,
                        to_label,
                        to,
                    })
                }
            };
            cells.extend_from_slice(&leg.cells[1..]);
            cost += leg.cost;
        }
        info!("Planned a route of {} cells with cost {:.3}", cells.len(), cost);
        Ok(Route { cells, cost })
    }
}
