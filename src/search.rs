//! The A* search engine and its per-search state.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::{info, warn};

use crate::cell::{Cell, NEIGHBOUR_OFFSETS};
use crate::cost::euclidean;
use crate::routing_grid::RoutingGrid;

/// A start-to-goal sequence of pairwise adjacent cells, together with the
/// summed edge cost of walking it.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    pub cells: Vec<Cell>,
    pub cost: f64,
}

const NO_PARENT: u32 = u32::MAX;

/// Frontier entry: a cell keyed by the total cost estimate it was pushed
/// with.
struct FrontierNode {
    estimated_cost: f64,
    cell: Cell,
}

impl Eq for FrontierNode {}

impl PartialEq for FrontierNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for FrontierNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on cost so the max-heap pops the smallest estimate first,
        // then reversed on cell so equal estimates pop in coordinate order.
        other
            .estimated_cost
            .total_cmp(&self.estimated_cost)
            .then_with(|| other.cell.cmp(&self.cell))
    }
}

/// Dense per-search bookkeeping, allocated for one invocation and discarded
/// with it.
struct SearchState {
    g: Vec<f64>,
    parent: Vec<u32>,
    closed: Vec<bool>,
    open: BinaryHeap<FrontierNode>,
}

impl SearchState {
    fn seeded(grid: &RoutingGrid) -> SearchState {
        let size = grid.rows() * grid.cols();
        SearchState {
            g: vec![f64::INFINITY; size],
            parent: vec![NO_PARENT; size],
            // Obstacles start out closed and are never expanded.
            closed: (0..size)
                .map(|ix| !grid.kind_at(ix).is_traversable())
                .collect(),
            open: BinaryHeap::new(),
        }
    }
}

fn reverse_path(grid: &RoutingGrid, parent: &[u32], goal: Cell) -> Vec<Cell> {
    let mut path: Vec<Cell> = itertools::unfold(Some(grid.ix(goal)), |current| {
        let ix = (*current)?;
        *current = match parent[ix] {
            NO_PARENT => None,
            p => Some(p as usize),
        };
        Some(grid.cell_at(ix))
    })
    .collect();
    path.reverse();
    path
}

impl RoutingGrid {
    /// Computes a minimum-cost path from start to goal using
    /// [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) over the
    /// eight-connected grid, with the Euclidean distance as heuristic and
    /// edge costs from [edge_cost](Self::edge_cost). Returns [None] when no
    /// traversable route exists, an ordinary outcome rather than an error.
    /// Equal-cost frontier ties are broken by coordinate order, so repeated
    /// searches return the same path.
    pub fn shortest_path(&self, start: Cell, goal: Cell) -> Option<Path> {
        if !self.in_bounds(start) || !self.in_bounds(goal) {
            return None;
        }
        if !self.kind(start).is_traversable() || !self.kind(goal).is_traversable() {
            return None;
        }
        if self.unreachable(start, goal) {
            info!("{} is not reachable from {}, skipping search", goal, start);
            return None;
        }
        info!("{} is reachable from {}, computing path", goal, start);
        let mut state = SearchState::seeded(self);
        let start_ix = self.ix(start);
        state.g[start_ix] = 0.0;
        state.open.push(FrontierNode {
            estimated_cost: euclidean(start, goal),
            cell: start,
        });
        while let Some(FrontierNode { cell, .. }) = state.open.pop() {
            if cell == goal {
                return Some(Path {
                    cells: reverse_path(self, &state.parent, goal),
                    cost: state.g[self.ix(goal)],
                });
            }
            let ix = self.ix(cell);
            // A cell reinserted with a stale estimate can pop again after its
            // definitive visit; skip it instead of expanding twice.
            if state.closed[ix] {
                continue;
            }
            state.closed[ix] = true;
            for (dr, dc) in NEIGHBOUR_OFFSETS {
                let neighbour = Cell::new(cell.row + dr, cell.col + dc);
                if !self.in_bounds(neighbour) {
                    continue;
                }
                let neighbour_ix = self.ix(neighbour);
                if state.closed[neighbour_ix] {
                    continue;
                }
                let candidate = state.g[ix] + self.edge_cost(cell, neighbour);
                if candidate < state.g[neighbour_ix] {
                    state.g[neighbour_ix] = candidate;
                    state.parent[neighbour_ix] = ix as u32;
                    state.open.push(FrontierNode {
                        estimated_cost: candidate + euclidean(neighbour, goal),
                        cell: neighbour,
                    });
                }
            }
        }
        warn!("Reachable goal could not be pathed to, is the component structure stale?");
        None
    }
}
