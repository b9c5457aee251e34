//! Pieces and rotation tests - shape catalog and SRS wall kicks

use srs_tetris::core::pieces::{cells_of, shape_mask, spawn_column_of};
use srs_tetris::core::rotation::{kick_offsets, try_rotate};
use srs_tetris::core::Board;
use srs_tetris::types::{PieceKind, Rotation, RotationDirection};

const ROTATIONS: [Rotation; 4] = [
    Rotation::North,
    Rotation::East,
    Rotation::South,
    Rotation::West,
];

fn offsets(kind: PieceKind, rotation: Rotation) -> Vec<(i8, i8)> {
    cells_of(kind, rotation, 0, 0).to_vec()
}

// ============== Shape Tests ==============

#[test]
fn test_i_piece_shapes() {
    assert_eq!(offsets(PieceKind::I, Rotation::North), [(0, 1), (1, 1), (2, 1), (3, 1)]);
    assert_eq!(offsets(PieceKind::I, Rotation::East), [(2, 0), (2, 1), (2, 2), (2, 3)]);
    assert_eq!(offsets(PieceKind::I, Rotation::South), [(0, 2), (1, 2), (2, 2), (3, 2)]);
    assert_eq!(offsets(PieceKind::I, Rotation::West), [(1, 0), (1, 1), (1, 2), (1, 3)]);
}

#[test]
fn test_o_piece_shapes() {
    let north = offsets(PieceKind::O, Rotation::North);
    assert_eq!(north, [(0, 0), (1, 0), (0, 1), (1, 1)]);
    for rotation in ROTATIONS {
        assert_eq!(offsets(PieceKind::O, rotation), north);
    }
}

#[test]
fn test_t_piece_shapes() {
    assert_eq!(offsets(PieceKind::T, Rotation::North), [(1, 0), (0, 1), (1, 1), (2, 1)]);
    assert_eq!(offsets(PieceKind::T, Rotation::East), [(1, 0), (1, 1), (2, 1), (1, 2)]);
    assert_eq!(offsets(PieceKind::T, Rotation::South), [(0, 1), (1, 1), (2, 1), (1, 2)]);
    assert_eq!(offsets(PieceKind::T, Rotation::West), [(1, 0), (0, 1), (1, 1), (1, 2)]);
}

#[test]
fn test_s_and_z_piece_shapes() {
    assert_eq!(offsets(PieceKind::S, Rotation::North), [(1, 0), (2, 0), (0, 1), (1, 1)]);
    assert_eq!(offsets(PieceKind::S, Rotation::East), [(1, 0), (1, 1), (2, 1), (2, 2)]);
    assert_eq!(offsets(PieceKind::Z, Rotation::North), [(0, 0), (1, 0), (1, 1), (2, 1)]);
    assert_eq!(offsets(PieceKind::Z, Rotation::East), [(2, 0), (1, 1), (2, 1), (1, 2)]);
}

#[test]
fn test_j_and_l_piece_shapes() {
    assert_eq!(offsets(PieceKind::J, Rotation::North), [(0, 0), (0, 1), (1, 1), (2, 1)]);
    assert_eq!(offsets(PieceKind::J, Rotation::East), [(1, 0), (2, 0), (1, 1), (1, 2)]);
    assert_eq!(offsets(PieceKind::L, Rotation::North), [(2, 0), (0, 1), (1, 1), (2, 1)]);
    assert_eq!(offsets(PieceKind::L, Rotation::East), [(1, 0), (1, 1), (1, 2), (2, 2)]);
}

#[test]
fn test_masks_fit_in_box() {
    for kind in PieceKind::ALL {
        for rotation in ROTATIONS {
            assert_eq!(shape_mask(kind, rotation).count_ones(), 4);
            for (x, y) in offsets(kind, rotation) {
                assert!((0..4).contains(&x) && (0..4).contains(&y));
            }
        }
    }
}

#[test]
fn test_spawn_columns() {
    assert_eq!(spawn_column_of(PieceKind::I), 3);
    assert_eq!(spawn_column_of(PieceKind::O), 4);
    for kind in [PieceKind::T, PieceKind::S, PieceKind::Z, PieceKind::J, PieceKind::L] {
        assert_eq!(spawn_column_of(kind), 3);
    }
}

// ============== SRS Rotation Tests ==============

#[test]
fn test_t_rotation_success() {
    let board = Board::new();
    let placed = try_rotate(&board, PieceKind::T, Rotation::North, RotationDirection::Clockwise, 3, 0)
        .unwrap();
    assert_eq!(placed.rotation, Rotation::East);
    // Should succeed without kick on empty board
    assert_eq!((placed.col, placed.row, placed.kick_index), (3, 0, 0));
}

#[test]
fn test_t_rotation_with_kick() {
    // T at (3,5) rotating to East would occupy (4,5), (4,6), (5,6), (4,7).
    let mut board = Board::new();
    board.set(4, 6, Some(PieceKind::Z));

    let placed = try_rotate(&board, PieceKind::T, Rotation::North, RotationDirection::Clockwise, 3, 5)
        .unwrap();
    assert_eq!(placed.rotation, Rotation::East);
    assert_ne!(placed.kick_index, 0, "Expected a kick but got none");

    // Every earlier offset in the sequence must have collided.
    let kicks = kick_offsets(PieceKind::T, Rotation::North, Rotation::East);
    for &(dx, dy) in &kicks[..placed.kick_index] {
        assert!(!board.is_valid(PieceKind::T, Rotation::East, 3 + dx, 5 + dy));
    }
    let (dx, dy) = kicks[placed.kick_index];
    assert_eq!((placed.col, placed.row), (3 + dx, 5 + dy));
}

#[test]
fn test_ccw_rotation() {
    let board = Board::new();
    let placed = try_rotate(
        &board,
        PieceKind::T,
        Rotation::North,
        RotationDirection::CounterClockwise,
        3,
        0,
    )
    .unwrap();
    assert_eq!(placed.rotation, Rotation::West);
}

#[test]
fn test_i_rotation_uses_own_table() {
    let jlstz = kick_offsets(PieceKind::T, Rotation::North, Rotation::East);
    for kind in [PieceKind::J, PieceKind::L, PieceKind::S, PieceKind::Z] {
        assert_eq!(kick_offsets(kind, Rotation::North, Rotation::East), jlstz);
    }
    assert_ne!(kick_offsets(PieceKind::I, Rotation::North, Rotation::East), jlstz);
}

#[test]
fn test_i_rotation_against_right_wall() {
    // Vertical I (West, column 1 of the box) flush against the right wall.
    let board = Board::new();
    assert!(board.is_valid(PieceKind::I, Rotation::West, 8, 5));

    let placed = try_rotate(&board, PieceKind::I, Rotation::West, RotationDirection::Clockwise, 8, 5)
        .unwrap();
    assert_eq!(placed.rotation, Rotation::North);
    let cells = cells_of(PieceKind::I, placed.rotation, placed.col, placed.row);
    assert!(cells.iter().all(|&(x, _)| (0..10).contains(&x)));
    // (0,0) and (+1,0) still hang off the wall; (-2,0) fits.
    assert_eq!((placed.col, placed.kick_index), (6, 2));
}

#[test]
fn test_rotation_fails_when_every_kick_collides() {
    let mut board = Board::new();
    // Box the T in so no kick can fit.
    for y in 0..20 {
        for x in 0..10 {
            board.set(x, y, Some(PieceKind::Z));
        }
    }
    for (x, y) in cells_of(PieceKind::T, Rotation::North, 3, 8) {
        board.set(x, y, None);
    }
    for direction in [RotationDirection::Clockwise, RotationDirection::CounterClockwise] {
        assert!(try_rotate(&board, PieceKind::T, Rotation::North, direction, 3, 8).is_none());
    }
}
