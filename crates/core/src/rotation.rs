//! Rotation module - SRS wall kicks
//!
//! A rotation request tries an ordered list of `(d_col, d_row)` offsets and
//! takes the first one whose target placement is valid. Offsets are in board
//! coordinates, where rows grow downward, so each SRS "up" kick appears here
//! with a negative `d_row`.
//!
//! Reference: https://tetris.wiki/SRS

use crate::board::Board;
use crate::types::{PieceKind, Rotation, RotationDirection};

/// Column/row offset tried during a rotation
pub type KickOffset = (i8, i8);

/// Five kicks for each of the eight rotation transitions
pub type KickTable = [[KickOffset; 5]; 8];

/// Offset used when no table applies
const NO_KICK: [KickOffset; 1] = [(0, 0)];

/// Transition tag for `from * 4 + to`; `None` for non-adjacent pairs.
const TRANSITIONS: [Option<usize>; 16] = [
    None,    // 0->0
    Some(0), // 0->1
    None,    // 0->2
    Some(1), // 0->3
    Some(2), // 1->0
    None,    // 1->1
    Some(3), // 1->2
    None,    // 1->3
    None,    // 2->0
    Some(4), // 2->1
    None,    // 2->2
    Some(5), // 2->3
    Some(7), // 3->0
    None,    // 3->1
    Some(6), // 3->2
    None,    // 3->3
];

/// JLSTZ kick table (shared by J, L, S, T, Z)
const JLSTZ_KICKS: KickTable = [
    // 0->1
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    // 0->3
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // 1->0
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // 1->2
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // 2->1
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    // 2->3
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // 3->2
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    // 3->0
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
];

/// I piece kick table
const I_KICKS: KickTable = [
    // 0->1
    [(0, 0), (-2, 0), (1, 0), (-2, 1), (1, -2)],
    // 0->3
    [(0, 0), (-1, 0), (2, 0), (-1, -2), (2, 1)],
    // 1->0
    [(0, 0), (2, 0), (-1, 0), (2, -1), (-1, 2)],
    // 1->2
    [(0, 0), (-1, 0), (2, 0), (-1, -2), (2, 1)],
    // 2->1
    [(0, 0), (1, 0), (-2, 0), (1, 2), (-2, -1)],
    // 2->3
    [(0, 0), (2, 0), (-1, 0), (2, -1), (-1, 2)],
    // 3->2
    [(0, 0), (-2, 0), (1, 0), (-2, 1), (1, -2)],
    // 3->0
    [(0, 0), (1, 0), (-2, 0), (1, 2), (-2, -1)],
];

/// Tag of a `from -> to` transition, if it has a table entry
pub fn transition_index(from: Rotation, to: Rotation) -> Option<usize> {
    TRANSITIONS[from.index() * 4 + to.index()]
}

/// Ordered kick offsets for a kind and transition.
///
/// O always gets the single no-op offset; so does any transition without a
/// table entry.
pub fn kick_offsets(kind: PieceKind, from: Rotation, to: Rotation) -> &'static [KickOffset] {
    let table = match kind {
        PieceKind::O => return &NO_KICK,
        PieceKind::I => &I_KICKS,
        _ => &JLSTZ_KICKS,
    };
    match transition_index(from, to) {
        Some(idx) => &table[idx],
        None => &NO_KICK,
    }
}

/// Accepted rotation result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub rotation: Rotation,
    pub col: i8,
    pub row: i8,
    /// Position of the accepted offset in the kick sequence
    pub kick_index: usize,
}

/// Try to rotate a piece with wall kicks.
///
/// Returns the first kicked placement that is valid on `board`, or `None`
/// when every offset collides; the caller keeps its previous state then.
pub fn try_rotate(
    board: &Board,
    kind: PieceKind,
    rotation: Rotation,
    direction: RotationDirection,
    col: i8,
    row: i8,
) -> Option<Placement> {
    let target = rotation.rotate(direction);

    kick_offsets(kind, rotation, target)
        .iter()
        .enumerate()
        .find_map(|(kick_index, &(dx, dy))| {
            let (new_col, new_row) = (col + dx, row + dy);
            board
                .is_valid(kind, target, new_col, new_row)
                .then_some(Placement {
                    rotation: target,
                    col: new_col,
                    row: new_row,
                    kick_index,
                })
        })
}
