//! Piece controller - spawn, move, rotate and drop the falling piece
//!
//! Every command is validated against [`Grid::collide`] after it is applied and
//! undone when the grid rejects it. Prior legality is never assumed.

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::pieces::{shape_for, Shape};
use crate::types::{Direction, PieceKind, Rotation, COLS};

/// Result of a one-row drop attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The piece moved down one row
    Moved,
    /// The piece could not move; the caller should merge it
    Locked,
}

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    /// Anchor column of the shape's top-left cell
    pub x: i8,
    /// Anchor row of the shape's top-left cell
    pub y: i8,
}

impl ActivePiece {
    /// Create a piece in its spawn orientation, centred horizontally on row 0.
    ///
    /// Odd widths bias one column to the left.
    pub fn spawn(kind: PieceKind) -> Self {
        let width = shape_for(kind, Rotation::North).width();
        let x = (COLS / 2) as i8 - width.div_ceil(2) as i8;
        Self {
            kind,
            rotation: Rotation::North,
            x,
            y: 0,
        }
    }

    /// Shape of the current rotation state
    pub fn shape(&self) -> Shape {
        shape_for(self.kind, self.rotation)
    }

    /// Absolute grid coordinates of the filled cells
    pub fn cells(&self) -> ArrayVec<(i8, i8), 4> {
        self.shape()
            .cells()
            .into_iter()
            .map(|(dx, dy)| (self.x + dx, self.y + dy))
            .collect()
    }

    /// Shift one column; reverts and returns false when the grid rejects it
    pub fn shift(&mut self, grid: &Grid, dir: Direction) -> bool {
        self.x += dir.dx();
        if grid.collide(self) {
            self.x -= dir.dx();
            return false;
        }
        true
    }

    /// Advance to the next rotation state with the three-step kick ladder.
    ///
    /// Tries the rotated shape in place, then one column right, then one column
    /// left of the original anchor. If all three collide the piece is restored
    /// exactly and false is returned.
    pub fn rotate(&mut self, grid: &Grid) -> bool {
        let original = *self;
        self.rotation = self.rotation.next();

        if !grid.collide(self) {
            return true;
        }
        self.x = original.x + 1;
        if !grid.collide(self) {
            return true;
        }
        self.x = original.x - 1;
        if !grid.collide(self) {
            return true;
        }

        *self = original;
        false
    }

    /// Move down one row, or report that the piece has landed
    pub fn soft_drop(&mut self, grid: &Grid) -> DropOutcome {
        self.y += 1;
        if grid.collide(self) {
            self.y -= 1;
            return DropOutcome::Locked;
        }
        DropOutcome::Moved
    }

    /// Fall until the next row would collide, then stop on the last legal row.
    ///
    /// Returns the number of rows travelled. The caller merges right after.
    pub fn hard_drop(&mut self, grid: &Grid) -> u8 {
        let start = self.y;
        while !grid.collide(self) {
            self.y += 1;
        }
        self.y -= 1;
        (self.y - start).max(0) as u8
    }
}
