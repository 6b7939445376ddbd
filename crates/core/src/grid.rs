//! Grid module - the playfield buffer
//!
//! The grid is a 10x20 buffer where each cell is empty or holds an occupied marker.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//!
//! Collision only distinguishes empty from non-empty: a block, a photo tile and
//! a revealed background cell all block a piece and all count towards a full row.

use crate::controller::ActivePiece;
use crate::types::{Cell, PieceKind, COLS, ROWS};

/// Total number of cells on the grid
const GRID_SIZE: usize = COLS * ROWS;

/// The playfield - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Flat array of cells, row-major order (y * COLS + x)
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; GRID_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x as usize >= COLS || y < 0 || y as usize >= ROWS {
            return None;
        }
        Some((y as usize) * COLS + (x as usize))
    }

    pub fn width(&self) -> usize {
        COLS
    }

    pub fn height(&self) -> usize {
        ROWS
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and non-empty)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        self.get(x, y).is_some_and(|cell| !cell.is_empty())
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= ROWS {
            return false;
        }
        self.row(y).iter().all(|cell| !cell.is_empty())
    }

    /// Check if a row has no occupied cells
    pub fn is_row_empty(&self, y: usize) -> bool {
        if y >= ROWS {
            return false;
        }
        self.row(y).iter().all(Cell::is_empty)
    }

    /// Cells of row `y`
    ///
    /// Panics if `y` is not below `ROWS`.
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * COLS;
        &self.cells[start..start + COLS]
    }

    /// Test the piece against walls, floor and occupied cells.
    ///
    /// Cells above the top edge (y < 0) are only checked against the side
    /// walls, so pieces may sit partially above the grid.
    pub fn collide(&self, piece: &ActivePiece) -> bool {
        piece.cells().into_iter().any(|(x, y)| {
            if x < 0 || x as usize >= COLS || y as isize >= ROWS as isize {
                return true;
            }
            y >= 0 && self.is_occupied(x, y)
        })
    }

    /// Write a plain block for every in-bounds cell of the piece.
    pub fn merge(&mut self, piece: &ActivePiece) {
        self.merge_with(piece, Cell::Block(piece.kind));
    }

    /// Write `cell` for every in-bounds cell of the piece.
    /// Cells outside the grid are dropped.
    pub fn merge_with(&mut self, piece: &ActivePiece, cell: Cell) {
        for (x, y) in piece.cells() {
            self.set(x, y, cell);
        }
    }

    /// Remove every full row and collapse the rows above it.
    ///
    /// Scans bottom to top. A cleared index is examined again, because the row
    /// that slid into it may itself be full. Returns the number of rows cleared.
    pub fn sweep(&mut self) -> usize {
        let mut cleared = 0;
        let mut y = ROWS;
        while y > 0 {
            if self.is_row_full(y - 1) {
                self.remove_row(y - 1);
                cleared += 1;
            } else {
                y -= 1;
            }
        }
        cleared
    }

    /// Delete row `y`, shift every row above it down by one and empty the top row
    fn remove_row(&mut self, y: usize) {
        // copy_within handles the overlapping ranges
        for row in (1..=y).rev() {
            let src_start = (row - 1) * COLS;
            self.cells.copy_within(src_start..src_start + COLS, row * COLS);
        }
        self.cells[..COLS].fill(Cell::Empty);
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Build a grid from text rows aligned to the bottom edge.
    ///
    /// `.` and space are empty, `I J L O S Z T` are blocks of that kind, a
    /// digit is a photo tile, `@` is a revealed background cell and any other
    /// glyph is a plain block. Rows beyond the grid are ignored.
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut grid = Self::new();
        let skip = rows.len().saturating_sub(ROWS);
        let top = ROWS - (rows.len() - skip);
        for (i, line) in rows.iter().skip(skip).enumerate() {
            for (x, ch) in line.chars().take(COLS).enumerate() {
                grid.cells[(top + i) * COLS + x] = cell_from_glyph(ch);
            }
        }
        grid
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

fn cell_from_glyph(ch: char) -> Cell {
    match ch {
        '.' | ' ' => Cell::Empty,
        '@' => Cell::Revealed,
        'I' => Cell::Block(PieceKind::I),
        'J' => Cell::Block(PieceKind::J),
        'L' => Cell::Block(PieceKind::L),
        'O' => Cell::Block(PieceKind::O),
        'S' => Cell::Block(PieceKind::S),
        'Z' => Cell::Block(PieceKind::Z),
        'T' => Cell::Block(PieceKind::T),
        d if d.is_ascii_digit() => Cell::Photo(d as u16 - '0' as u16),
        _ => Cell::Block(PieceKind::I),
    }
}
