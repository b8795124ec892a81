//! Fixed-size grid of cells and bounds-checked positions.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::domain::cell_types::Cell;
use crate::domain::rules::{COLS, ROWS};

/// An in-bounds (row, col) coordinate. Construction is the only bounds check.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < ROWS && col < COLS).then_some(Self { row, col })
    }

    /// Bounds-check client-supplied coordinates, which may be negative.
    pub fn from_signed(row: i64, col: i64) -> Option<Self> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        Self::new(row, col)
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }

    pub fn above(self) -> Option<Position> {
        Position::new(self.row.checked_sub(1)?, self.col)
    }

    pub fn below(self) -> Option<Position> {
        Position::new(self.row + 1, self.col)
    }

    pub fn left(self) -> Option<Position> {
        Position::new(self.row, self.col.checked_sub(1)?)
    }

    pub fn right(self) -> Option<Position> {
        Position::new(self.row, self.col + 1)
    }

    /// Orthogonal neighbors that exist within the grid (up, down, left, right).
    pub fn neighbors(self) -> impl Iterator<Item = Position> {
        [self.above(), self.below(), self.left(), self.right()]
            .into_iter()
            .flatten()
    }

    /// Every position in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..ROWS).flat_map(|row| (0..COLS).map(move |col| Position { row, col }))
    }
}

/// ROWS × COLS cells, serialized as nested row arrays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    rows: [[Cell; COLS]; ROWS],
}

impl Grid {
    pub fn filled(cell: Cell) -> Self {
        Self {
            rows: [[cell; COLS]; ROWS],
        }
    }

    pub fn cell(&self, pos: Position) -> &Cell {
        &self.rows[pos.row][pos.col]
    }

    pub fn cell_mut(&mut self, pos: Position) -> &mut Cell {
        &mut self.rows[pos.row][pos.col]
    }

    pub fn cells(&self) -> impl Iterator<Item = (Position, &Cell)> {
        Position::all().map(move |pos| (pos, self.cell(pos)))
    }

    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = &Cell> + '_ {
        pos.neighbors().map(move |n| self.cell(n))
    }
}

impl Index<Position> for Grid {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Cell {
        self.cell(pos)
    }
}

impl IndexMut<Position> for Grid {
    fn index_mut(&mut self, pos: Position) -> &mut Cell {
        self.cell_mut(pos)
    }
}
