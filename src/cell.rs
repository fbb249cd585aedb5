use core::fmt;

/// Offsets of the eight neighbouring cells: the four orthogonal steps
/// followed by the four diagonal ones.
pub(crate) const NEIGHBOUR_OFFSETS: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// A discrete grid coordinate.
///
/// The derived ordering is lexicographic on `(row, col)`. It doubles as the
/// tie-break order of the search frontier, which makes equal-cost searches
/// deterministic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub fn new(row: i32, col: i32) -> Cell {
        Cell { row, col }
    }
    /// The eight surrounding coordinates, without any bounds filtering.
    pub fn neighbourhood(&self) -> [Cell; 8] {
        NEIGHBOUR_OFFSETS.map(|(dr, dc)| Cell::new(self.row + dr, self.col + dc))
    }
    /// Whether `other` is one of the eight cells surrounding `self`.
    pub fn is_adjacent(&self, other: &Cell) -> bool {
        let dr = (self.row - other.row).abs();
        let dc = (self.col - other.col).abs();
        dr <= 1 && dc <= 1 && (dr, dc) != (0, 0)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
