//! Pieces module - the tetromino catalog
//!
//! Every kind has exactly four pre-rotated layouts. Rotation is a table lookup,
//! never a matrix transform, so each state is exactly what the table says.
//! Layouts are row-major 0/1 matrices with the anchor at the top-left cell.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, Rotation};

/// Offset of a single mino relative to the piece anchor (dx, dy)
pub type MinoOffset = (i8, i8);

/// Row-major 0/1 layout
pub type Matrix = &'static [&'static [u8]];

/// One rotation state of a tetromino
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    rows: Matrix,
}

impl Shape {
    const fn new(rows: Matrix) -> Self {
        Self { rows }
    }

    /// Width of the bounding box in columns
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len())
    }

    /// Height of the bounding box in rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> Matrix {
        self.rows
    }

    /// Whether the cell at (col, row) of the bounding box is filled
    pub fn is_filled(&self, col: usize, row: usize) -> bool {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .is_some_and(|&v| v != 0)
    }

    /// Offsets of the filled cells, scanned row by row
    pub fn cells(&self) -> ArrayVec<MinoOffset, 4> {
        let mut out = ArrayVec::new();
        for (dy, row) in self.rows.iter().enumerate() {
            for (dx, &v) in row.iter().enumerate() {
                if v != 0 {
                    out.push((dx as i8, dy as i8));
                }
            }
        }
        out
    }
}

/// Get the shape for a piece kind and rotation
pub fn shape_for(kind: PieceKind, rotation: Rotation) -> Shape {
    states(kind)[rotation.index()]
}

/// All four rotation states of a kind, indexed by rotation index
pub fn states(kind: PieceKind) -> &'static [Shape; 4] {
    match kind {
        PieceKind::I => &I_STATES,
        PieceKind::J => &J_STATES,
        PieceKind::L => &L_STATES,
        PieceKind::O => &O_STATES,
        PieceKind::S => &S_STATES,
        PieceKind::Z => &Z_STATES,
        PieceKind::T => &T_STATES,
    }
}

const I_FLAT: Shape = Shape::new(&[&[1, 1, 1, 1]]);
const I_UPRIGHT: Shape = Shape::new(&[&[1], &[1], &[1], &[1]]);
const I_STATES: [Shape; 4] = [I_FLAT, I_UPRIGHT, I_FLAT, I_UPRIGHT];

const J_STATES: [Shape; 4] = [
    Shape::new(&[&[1, 0, 0], &[1, 1, 1]]),
    Shape::new(&[&[1, 1], &[1, 0], &[1, 0]]),
    Shape::new(&[&[1, 1, 1], &[0, 0, 1]]),
    Shape::new(&[&[0, 1], &[0, 1], &[1, 1]]),
];

const L_STATES: [Shape; 4] = [
    Shape::new(&[&[0, 0, 1], &[1, 1, 1]]),
    Shape::new(&[&[1, 0], &[1, 0], &[1, 1]]),
    Shape::new(&[&[1, 1, 1], &[1, 0, 0]]),
    Shape::new(&[&[1, 1], &[0, 1], &[0, 1]]),
];

const O_BOX: Shape = Shape::new(&[&[1, 1], &[1, 1]]);
const O_STATES: [Shape; 4] = [O_BOX; 4];

const S_FLAT: Shape = Shape::new(&[&[0, 1, 1], &[1, 1, 0]]);
const S_UPRIGHT: Shape = Shape::new(&[&[1, 0], &[1, 1], &[0, 1]]);
const S_STATES: [Shape; 4] = [S_FLAT, S_UPRIGHT, S_FLAT, S_UPRIGHT];

const Z_FLAT: Shape = Shape::new(&[&[1, 1, 0], &[0, 1, 1]]);
const Z_UPRIGHT: Shape = Shape::new(&[&[0, 1], &[1, 1], &[1, 0]]);
const Z_STATES: [Shape; 4] = [Z_FLAT, Z_UPRIGHT, Z_FLAT, Z_UPRIGHT];

const T_STATES: [Shape; 4] = [
    Shape::new(&[&[0, 1, 0], &[1, 1, 1]]),
    Shape::new(&[&[1, 0], &[1, 1], &[1, 0]]),
    Shape::new(&[&[1, 1, 1], &[0, 1, 0]]),
    Shape::new(&[&[0, 1], &[1, 1], &[0, 1]]),
];
