//! Pieces module tests - the fixed rotation tables

use photo_tetris::core::pieces::{shape_for, states};
use photo_tetris::types::{PieceKind, Rotation};

// ============== Shape Tests ==============

#[test]
fn test_i_piece_shapes() {
    let north = shape_for(PieceKind::I, Rotation::North);
    assert_eq!((north.width(), north.height()), (4, 1));
    assert_eq!(north.cells().as_slice(), &[(0, 0), (1, 0), (2, 0), (3, 0)]);

    let east = shape_for(PieceKind::I, Rotation::East);
    assert_eq!((east.width(), east.height()), (1, 4));
    assert_eq!(east.cells().as_slice(), &[(0, 0), (0, 1), (0, 2), (0, 3)]);

    assert_eq!(shape_for(PieceKind::I, Rotation::South), north);
    assert_eq!(shape_for(PieceKind::I, Rotation::West), east);
}

#[test]
fn test_o_piece_shapes() {
    let north = shape_for(PieceKind::O, Rotation::North);
    assert_eq!(north.cells().as_slice(), &[(0, 0), (1, 0), (0, 1), (1, 1)]);
    for rotation in [Rotation::East, Rotation::South, Rotation::West] {
        assert_eq!(shape_for(PieceKind::O, rotation), north);
    }
}

#[test]
fn test_t_piece_shapes() {
    let north = shape_for(PieceKind::T, Rotation::North);
    assert_eq!(north.cells().as_slice(), &[(1, 0), (0, 1), (1, 1), (2, 1)]);

    let east = shape_for(PieceKind::T, Rotation::East);
    assert_eq!(east.cells().as_slice(), &[(0, 0), (0, 1), (1, 1), (0, 2)]);

    let south = shape_for(PieceKind::T, Rotation::South);
    assert_eq!(south.cells().as_slice(), &[(0, 0), (1, 0), (2, 0), (1, 1)]);

    let west = shape_for(PieceKind::T, Rotation::West);
    assert_eq!(west.cells().as_slice(), &[(1, 0), (0, 1), (1, 1), (1, 2)]);
}

#[test]
fn test_j_and_l_are_mirrors() {
    for rotation in [Rotation::North, Rotation::South] {
        let j = shape_for(PieceKind::J, rotation);
        let l = shape_for(PieceKind::L, rotation);
        assert_eq!(j.width(), l.width());
        for row in 0..j.height() {
            for col in 0..j.width() {
                assert_eq!(j.is_filled(col, row), l.is_filled(j.width() - 1 - col, row));
            }
        }
    }
}

#[test]
fn test_s_and_z_flat_shapes() {
    let s = shape_for(PieceKind::S, Rotation::North);
    assert_eq!(s.cells().as_slice(), &[(1, 0), (2, 0), (0, 1), (1, 1)]);
    let z = shape_for(PieceKind::Z, Rotation::North);
    assert_eq!(z.cells().as_slice(), &[(0, 0), (1, 0), (1, 1), (2, 1)]);
}

// ============== Rotation Cycle ==============

#[test]
fn test_four_rotations_return_to_start() {
    for kind in PieceKind::ALL {
        let mut rotation = Rotation::North;
        for _ in 0..4 {
            rotation = rotation.next();
        }
        assert_eq!(rotation, Rotation::North);
        assert_eq!(shape_for(kind, rotation), states(kind)[0]);
    }
}

#[test]
fn test_rotation_swaps_bounding_box() {
    for kind in PieceKind::ALL {
        let north = shape_for(kind, Rotation::North);
        let east = shape_for(kind, Rotation::East);
        assert_eq!(north.width(), east.height(), "{:?}", kind);
        assert_eq!(north.height(), east.width(), "{:?}", kind);
    }
}
