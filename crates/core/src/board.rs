//! Board module - manages the game grid
//!
//! The board is a `cols x rows` grid (10x20 by default) of packed colors,
//! `0` meaning empty. Storage is a flat row-major vector.
//! Coordinates: (x, y) where x grows to the right and y grows downward;
//! row 0 is the top of the playfield.
//!
//! Collision contract: any coordinate outside the grid is *blocked*. Callers
//! test a placement with one [`Board::is_valid`] call and get wall, floor and
//! stack collision from the same predicate.

use crate::pieces::{cells_of, color_of};
use crate::types::{
    Cell, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH, EMPTY_CELL, MAX_BOARD_DIMENSION,
    MIN_BOARD_DIMENSION,
};

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cols: u8,
    rows: u8,
    /// Flat array of cells, row-major order (y * cols + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty 10x20 board
    pub fn new() -> Self {
        Self::empty(BOARD_WIDTH, BOARD_HEIGHT)
    }

    /// Create an empty board with custom dimensions.
    ///
    /// Returns `None` unless both dimensions are within
    /// `MIN_BOARD_DIMENSION..=MAX_BOARD_DIMENSION`.
    pub fn with_size(cols: u8, rows: u8) -> Option<Self> {
        let range = MIN_BOARD_DIMENSION..=MAX_BOARD_DIMENSION;
        if range.contains(&cols) && range.contains(&rows) {
            Some(Self::empty(cols, rows))
        } else {
            None
        }
    }

    fn empty(cols: u8, rows: u8) -> Self {
        Self {
            cols,
            rows,
            cells: vec![EMPTY_CELL; cols as usize * rows as usize],
        }
    }

    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if !self.is_in_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (self.cols as usize) + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        self.cols
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        self.rows
    }

    /// True iff `0 <= x < cols` and `0 <= y < rows`
    pub fn is_in_bounds(&self, x: i8, y: i8) -> bool {
        x >= 0 && y >= 0 && (x as u8) < self.cols && (y as u8) < self.rows
    }

    /// Out of bounds, or holding a locked cell.
    pub fn is_blocked(&self, x: i8, y: i8) -> bool {
        match self.index(x, y) {
            Some(idx) => self.cells[idx] != EMPTY_CELL,
            None => true,
        }
    }

    /// Whether every cell of the piece is in bounds and unblocked
    pub fn is_valid(&self, kind: PieceKind, rotation: Rotation, x: i8, y: i8) -> bool {
        cells_of(kind, rotation, x, y)
            .iter()
            .all(|&(cx, cy)| !self.is_blocked(cx, cy))
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Fill a cell with a kind's color, or empty it with `None`.
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, kind: Option<PieceKind>) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = kind.map_or(EMPTY_CELL, color_of);
                true
            }
            None => false,
        }
    }

    /// Stamp a piece's color into its cells.
    ///
    /// The caller has already checked [`Board::is_valid`]; nothing is
    /// re-validated. Cells that fall outside the grid are skipped.
    pub fn lock(&mut self, kind: PieceKind, rotation: Rotation, x: i8, y: i8) {
        let color = color_of(kind);
        for (cx, cy) in cells_of(kind, rotation, x, y) {
            if let Some(idx) = self.index(cx, cy) {
                self.cells[idx] = color;
            }
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map_or(false, |row| row.iter().all(|&cell| cell != EMPTY_CELL))
    }

    /// Indices of every full row, ascending (top to bottom).
    pub fn completed_rows(&self) -> Vec<usize> {
        (0..self.rows as usize)
            .filter(|&y| self.is_row_full(y))
            .collect()
    }

    /// Remove the given rows and compact the rest downward.
    ///
    /// Remaining rows keep their relative order; as many empty rows as were
    /// removed appear at the top. Returns the number of rows removed.
    /// Uses a two-pointer scan from the bottom with `copy_within`.
    pub fn clear_rows(&mut self, rows: &[usize]) -> usize {
        let width = self.cols as usize;
        let mut write_y = self.rows as usize;
        let mut removed = 0;

        for read_y in (0..self.rows as usize).rev() {
            if rows.contains(&read_y) {
                removed += 1;
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src_start = read_y * width;
                self.cells
                    .copy_within(src_start..src_start + width, write_y * width);
            }
        }

        self.cells[..write_y * width].fill(EMPTY_CELL);
        removed
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY_CELL);
    }

    /// Get a reference to the internal cells array (row-major)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// One row of cells, or None past the bottom
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.rows as usize {
            return None;
        }
        let start = y * self.cols as usize;
        Some(&self.cells[start..start + self.cols as usize])
    }

    /// Convert to 2D rows for snapshots/display
    pub fn rows(&self) -> Vec<Vec<Cell>> {
        self.cells
            .chunks(self.cols as usize)
            .map(|row| row.to_vec())
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
