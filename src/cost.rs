//! The cost model: Euclidean distances scaled by the risk of the cell being
//! entered.

use crate::cell::Cell;
use crate::routing_grid::{CellKind, RoutingGrid};

/// Straight-line distance between two cells.
pub fn euclidean(a: Cell, b: Cell) -> f64 {
    let dr = (a.row - b.row) as f64;
    let dc = (a.col - b.col) as f64;
    (dr * dr + dc * dc).sqrt()
}

impl CellKind {
    /// Factor applied to the geometric cost of entering a cell of this kind.
    /// Free and waypoint cells are neutral; risky cells scale the cost by
    /// their weight. Obstacles are excluded from expansion before costs are
    /// computed, and their infinite factor keeps an accidental query from
    /// ever producing an attractive edge.
    pub fn risk_multiplier(&self) -> f64 {
        match self {
            CellKind::Free | CellKind::Waypoint(_) => 1.0,
            CellKind::Risky(weight) => *weight,
            CellKind::Obstacle => f64::INFINITY,
        }
    }
}

impl RoutingGrid {
    /// Cost of stepping between two adjacent cells: the Euclidean distance
    /// (1 for orthogonal steps, √2 for diagonal ones) times the risk
    /// multiplier of the destination. The cost is asymmetric for risky
    /// cells: entering one is expensive, leaving it costs nothing extra.
    pub fn edge_cost(&self, from: Cell, to: Cell) -> f64 {
        debug_assert!(from.is_adjacent(&to));
        euclidean(from, to) * self.kind(to).risk_multiplier()
    }
}
