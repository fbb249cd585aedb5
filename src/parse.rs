//! Reading grids from their textual token format.

use std::fs;
use std::io;
use std::path::Path;

use fxhash::FxHashMap;
use itertools::Itertools;
use log::info;
use thiserror::Error;

use crate::cell::Cell;
use crate::routing_grid::{CellKind, RoutingGrid};

/// Errors raised while reading a grid from text.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unrecognized token '{token}' at row {row}, column {col}")]
    UnrecognizedToken {
        token: String,
        row: usize,
        col: usize,
    },
    #[error("row {row} holds {found} cells where {expected} were expected")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("grid text contains no cells")]
    EmptyGrid,
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Maps single-character tokens to the cell kinds they stand for.
///
/// The default table recognizes `O` (free), `X` (obstacle), `P` (risky,
/// weight 3.0) and the digits `1`-`9` (waypoints labelled 1 to 9).
#[derive(Clone, Debug)]
pub struct SymbolTable {
    map: FxHashMap<char, CellKind>,
}

impl Default for SymbolTable {
    fn default() -> SymbolTable {
        let mut table = SymbolTable::empty();
        table.insert('O', CellKind::Free);
        table.insert('X', CellKind::Obstacle);
        table.insert('P', CellKind::Risky(3.0));
        for (label, token) in (1..).zip('1'..='9') {
            table.insert(token, CellKind::Waypoint(label));
        }
        table
    }
}

impl SymbolTable {
    /// A table recognizing no tokens at all.
    pub fn empty() -> SymbolTable {
        SymbolTable {
            map: FxHashMap::default(),
        }
    }
    /// Binds a token to a kind, replacing any previous binding.
    ///
    /// # Panics
    /// Panics if a risky weight is not greater than one.
    pub fn insert(&mut self, token: char, kind: CellKind) {
        if let CellKind::Risky(weight) = kind {
            assert!(
                weight > 1.0,
                "risky weight must be greater than 1, got {}",
                weight
            );
        }
        self.map.insert(token, kind);
    }
    /// The kind a token stands for, if any.
    pub fn kind_of(&self, token: char) -> Option<CellKind> {
        self.map.get(&token).copied()
    }
}

/// Parses a grid from whitespace-separated single-character tokens, one row
/// per line. Blank lines are skipped; the remaining rows must all hold the
/// same number of tokens. Row and column indices in errors are zero-based,
/// matching [Cell] coordinates. The returned grid has its components
/// generated and is ready to search.
pub fn parse_grid(text: &str, symbols: &SymbolTable) -> Result<RoutingGrid, ParseError> {
    let mut rows: Vec<Vec<CellKind>> = Vec::new();
    for line in text.lines().filter(|line| !line.trim().is_empty()) {
        let row = rows.len();
        let mut kinds = Vec::new();
        for (col, token) in line.split_whitespace().enumerate() {
            let kind = token
                .chars()
                .exactly_one()
                .ok()
                .and_then(|c| symbols.kind_of(c))
                .ok_or_else(|| ParseError::UnrecognizedToken {
                    token: token.to_string(),
                    row,
                    col,
                })?;
            kinds.push(kind);
        }
        if let Some(first) = rows.first() {
            if kinds.len() != first.len() {
                return Err(ParseError::RaggedRow {
                    row,
                    expected: first.len(),
                    found: kinds.len(),
                });
            }
        }
        rows.push(kinds);
    }
    if rows.is_empty() {
        return Err(ParseError::EmptyGrid);
    }
    let mut grid = RoutingGrid::new(rows.len(), rows[0].len());
    for (row, kinds) in rows.iter().enumerate() {
        for (col, &kind) in kinds.iter().enumerate() {
            if kind != CellKind::Free {
                grid.set_kind(Cell::new(row as i32, col as i32), kind);
            }
        }
    }
    grid.generate_components();
    info!(
        "Parsed a {}x{} grid with {} waypoints",
        grid.rows(),
        grid.cols(),
        grid.waypoints().len()
    );
    Ok(grid)
}

/// Reads a grid file and parses it with [parse_grid].
pub fn load_grid(path: impl AsRef<Path>, symbols: &SymbolTable) -> Result<RoutingGrid, ParseError> {
    let text = fs::read_to_string(path)?;
    parse_grid(&text, symbols)
}
