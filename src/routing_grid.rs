use core::fmt;

use log::info;
use petgraph::unionfind::UnionFind;

use crate::cell::Cell;
use crate::render::render_grid;

/// Terrain kind of a single cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CellKind {
    /// Traversable at plain geometric cost.
    Free,
    /// Never traversable.
    Obstacle,
    /// Traversable, with entry cost scaled by a weight greater than one.
    Risky(f64),
    /// Traversable checkpoint; labels fix the visiting order of
    /// [plan_route](RoutingGrid::plan_route).
    Waypoint(u32),
}

impl CellKind {
    /// Whether a cell of this kind can be entered at all.
    pub fn is_traversable(&self) -> bool {
        !matches!(self, CellKind::Obstacle)
    }
}

/// [RoutingGrid] maintains connected components of traversable cells using a
/// [UnionFind] structure in addition to the raw row-major [CellKind] values,
/// along with a registry of every waypoint cell. Components let a search
/// conclude that no path exists without flooding the whole grid.
///
/// Programmatic construction mirrors loading: start from [new](Self::new)
/// (all cells [Free](CellKind::Free)), apply [set_kind](Self::set_kind), then
/// call [generate_components](Self::generate_components) once before
/// searching. Searches only take `&self`, so a finished grid can serve
/// several searches at once.
#[derive(Clone, Debug)]
pub struct RoutingGrid {
    kinds: Vec<CellKind>,
    rows: usize,
    cols: usize,
    waypoints: Vec<(u32, Cell)>,
    components: UnionFind<usize>,
    components_dirty: bool,
}

impl RoutingGrid {
    /// An all-[Free](CellKind::Free) grid of the given dimensions.
    pub fn new(rows: usize, cols: usize) -> RoutingGrid {
        RoutingGrid {
            kinds: vec![CellKind::Free; rows * cols],
            rows,
            cols,
            waypoints: Vec::new(),
            components: UnionFind::new(rows * cols),
            components_dirty: false,
        }
    }
    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && (cell.row as usize) < self.rows
            && (cell.col as usize) < self.cols
    }
    /// Row-major offset of an in-bounds cell.
    pub(crate) fn ix(&self, cell: Cell) -> usize {
        debug_assert!(self.in_bounds(cell));
        cell.row as usize * self.cols + cell.col as usize
    }
    pub(crate) fn cell_at(&self, ix: usize) -> Cell {
        Cell::new((ix / self.cols) as i32, (ix % self.cols) as i32)
    }
    pub(crate) fn kind_at(&self, ix: usize) -> CellKind {
        self.kinds[ix]
    }
    /// The kind of an in-bounds cell.
    ///
    /// # Panics
    /// Panics if `cell` lies outside the grid.
    pub fn kind(&self, cell: Cell) -> CellKind {
        assert!(
            self.in_bounds(cell),
            "{} lies outside the {}x{} grid",
            cell,
            self.rows,
            self.cols
        );
        self.kinds[self.ix(cell)]
    }
    /// Whether the cell is inside the grid and not an obstacle.
    pub fn is_traversable(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && self.kinds[self.ix(cell)].is_traversable()
    }
    /// The in-bounds cells of the eight-cell neighbourhood.
    pub fn neighbours(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        cell.neighbourhood()
            .into_iter()
            .filter(|&n| self.in_bounds(n))
    }
    /// Every waypoint cell with its label, in placement order.
    pub fn waypoints(&self) -> &[(u32, Cell)] {
        &self.waypoints
    }
    /// The cell carrying the given waypoint label, if any.
    pub fn waypoint_cell(&self, label: u32) -> Option<Cell> {
        self.waypoints
            .iter()
            .find(|&&(l, _)| l == label)
            .map(|&(_, cell)| cell)
    }
    /// Updates a cell. Joins newly connected components and flags the
    /// components as dirty if they are (potentially) broken apart; the
    /// waypoint registry follows the cell's kind.
    ///
    /// # Panics
    /// Panics if `cell` lies outside the grid or a risky weight is not
    /// greater than one.
    pub fn set_kind(&mut self, cell: Cell, kind: CellKind) {
        assert!(
            self.in_bounds(cell),
            "{} lies outside the {}x{} grid",
            cell,
            self.rows,
            self.cols
        );
        if let CellKind::Risky(weight) = kind {
            assert!(
                weight > 1.0,
                "risky weight must be greater than 1, got {}",
                weight
            );
        }
        let ix = self.ix(cell);
        let old = self.kinds[ix];
        if matches!(old, CellKind::Waypoint(_)) {
            self.waypoints.retain(|&(_, c)| c != cell);
        }
        if let CellKind::Waypoint(label) = kind {
            self.waypoints.push((label, cell));
        }
        self.kinds[ix] = kind;
        if old.is_traversable() && !kind.is_traversable() {
            self.components_dirty = true;
        } else if kind.is_traversable() {
            // Opening a cell only ever merges components, which union-find
            // absorbs without a rebuild.
            let neighbours: Vec<Cell> = self
                .neighbours(cell)
                .filter(|&n| self.is_traversable(n))
                .collect();
            for neighbour in neighbours {
                self.components.union(ix, self.ix(neighbour));
            }
        }
    }
    /// Retrieves the component id a given cell belongs to.
    pub fn component(&self, cell: Cell) -> usize {
        self.components.find(self.ix(cell))
    }
    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: Cell, goal: Cell) -> bool {
        !self.unreachable(start, goal)
    }
    /// Checks if start and goal are on different components, in which case no
    /// path between them can exist. Out-of-bounds cells are unreachable from
    /// everywhere.
    pub fn unreachable(&self, start: Cell, goal: Cell) -> bool {
        if self.in_bounds(start) && self.in_bounds(goal) {
            !self.components.equiv(self.ix(start), self.ix(goal))
        } else {
            true
        }
    }
    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }
    /// Generates a new [UnionFind] structure and links up traversable
    /// neighbours to the same components.
    pub fn generate_components(&mut self) {
        info!("Generating connected components");
        self.components = UnionFind::new(self.rows * self.cols);
        self.components_dirty = false;
        for row in 0..self.rows as i32 {
            for col in 0..self.cols as i32 {
                let cell = Cell::new(row, col);
                if !self.is_traversable(cell) {
                    continue;
                }
                let ix = self.ix(cell);
                // Forward half of the neighbourhood; the scan has already
                // handled the symmetric edges behind it.
                for (dr, dc) in [(0, 1), (1, -1), (1, 0), (1, 1)] {
                    let neighbour = Cell::new(row + dr, col + dc);
                    if self.is_traversable(neighbour) {
                        self.components.union(ix, self.ix(neighbour));
                    }
                }
            }
        }
    }
}

impl fmt::Display for RoutingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&render_grid(self))
    }
}
