//! Pieces module - the shape catalog
//!
//! Every kind has four orientation masks. A mask is a 4x4 occupancy grid
//! packed into a `u16`: bit 15 is row 0 / column 0, bits run row-major, so a
//! mask literal written in nibbles reads top row first, left column first.
//!
//! Reference: https://tetris.wiki/SRS

use arrayvec::ArrayVec;
use rand::Rng;

use crate::types::{Cell, PieceKind, Rotation};

/// Absolute `(col, row)` cells of a placed piece.
pub type PieceCells = ArrayVec<(i8, i8), 4>;

/// Four orientation masks, indexed by [`Rotation::index`].
pub type OrientationMasks = [u16; 4];

/// I piece: horizontal on row 1, vertical on column 2, row 2, column 1
const I_MASKS: OrientationMasks = [
    0b0000_1111_0000_0000,
    0b0010_0010_0010_0010,
    0b0000_0000_1111_0000,
    0b0100_0100_0100_0100,
];

/// O piece: identical in every orientation
const O_MASKS: OrientationMasks = [0b1100_1100_0000_0000; 4];

const T_MASKS: OrientationMasks = [
    0b0100_1110_0000_0000,
    0b0100_0110_0100_0000,
    0b0000_1110_0100_0000,
    0b0100_1100_0100_0000,
];

const S_MASKS: OrientationMasks = [
    0b0110_1100_0000_0000,
    0b0100_0110_0010_0000,
    0b0000_0110_1100_0000,
    0b1000_1100_0100_0000,
];

const Z_MASKS: OrientationMasks = [
    0b1100_0110_0000_0000,
    0b0010_0110_0100_0000,
    0b0000_1100_0110_0000,
    0b0100_1100_1000_0000,
];

const J_MASKS: OrientationMasks = [
    0b1000_1110_0000_0000,
    0b0110_0100_0100_0000,
    0b0000_1110_0010_0000,
    0b0100_0100_1100_0000,
];

const L_MASKS: OrientationMasks = [
    0b0010_1110_0000_0000,
    0b0100_0100_0110_0000,
    0b0000_1110_1000_0000,
    0b1100_0100_0100_0000,
];

/// All four masks of a kind
pub fn orientation_masks(kind: PieceKind) -> &'static OrientationMasks {
    match kind {
        PieceKind::I => &I_MASKS,
        PieceKind::O => &O_MASKS,
        PieceKind::T => &T_MASKS,
        PieceKind::S => &S_MASKS,
        PieceKind::Z => &Z_MASKS,
        PieceKind::J => &J_MASKS,
        PieceKind::L => &L_MASKS,
    }
}

/// Mask for a kind in a given orientation
pub fn shape_mask(kind: PieceKind, rotation: Rotation) -> u16 {
    orientation_masks(kind)[rotation.index()]
}

/// Whether the mask has the cell at `(col, row)` inside its 4x4 box.
pub fn mask_contains(mask: u16, col: usize, row: usize) -> bool {
    col < 4 && row < 4 && mask & (0x8000 >> (row * 4 + col)) != 0
}

/// Expand a mask into absolute board cells by adding the anchor.
///
/// Cells come out in row-major order. Nothing is validated here; that is the
/// board's job.
pub fn cells_of(kind: PieceKind, rotation: Rotation, col: i8, row: i8) -> PieceCells {
    let mask = shape_mask(kind, rotation);
    let mut cells = PieceCells::new();
    for dy in 0..4 {
        for dx in 0..4 {
            if mask_contains(mask, dx, dy) {
                cells.push((col + dx as i8, row + dy as i8));
            }
        }
    }
    cells
}

/// Packed `0xRRGGBB` display color; never zero.
pub fn color_of(kind: PieceKind) -> Cell {
    match kind {
        PieceKind::I => 0x00F0F0,
        PieceKind::O => 0xF0F000,
        PieceKind::T => 0xA000F0,
        PieceKind::S => 0x00F000,
        PieceKind::Z => 0xF00000,
        PieceKind::J => 0x0000F0,
        PieceKind::L => 0xF0A000,
    }
}

/// Reverse of [`color_of`]
pub fn kind_of_color(color: Cell) -> Option<PieceKind> {
    PieceKind::ALL.into_iter().find(|&kind| color_of(kind) == color)
}

/// Anchor column a kind spawns at (row is always 0)
pub fn spawn_column_of(kind: PieceKind) -> i8 {
    match kind {
        PieceKind::O => 4,
        _ => 3,
    }
}

/// Uniform draw over the seven kinds
pub fn random_kind<R: Rng + ?Sized>(rng: &mut R) -> PieceKind {
    PieceKind::ALL[rng.gen_range(0..PieceKind::ALL.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const ROTATIONS: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    #[test]
    fn every_mask_has_four_cells() {
        for kind in PieceKind::ALL {
            for mask in orientation_masks(kind) {
                assert_eq!(mask.count_ones(), 4, "{:?} mask {:#018b}", kind, mask);
            }
        }
    }

    #[test]
    fn cells_are_offset_by_anchor() {
        let at_origin = cells_of(PieceKind::T, Rotation::East, 0, 0);
        let shifted = cells_of(PieceKind::T, Rotation::East, 5, 7);
        for (a, b) in at_origin.iter().zip(shifted.iter()) {
            assert_eq!((a.0 + 5, a.1 + 7), *b);
        }
    }

    #[test]
    fn negative_anchor_is_not_clamped() {
        let cells = cells_of(PieceKind::O, Rotation::North, -1, -2);
        assert_eq!(cells.as_slice(), &[(-1, -2), (0, -2), (-1, -1), (0, -1)]);
    }

    #[test]
    fn colors_are_distinct_and_non_zero() {
        for (i, a) in PieceKind::ALL.iter().enumerate() {
            assert_ne!(color_of(*a), 0);
            assert_eq!(kind_of_color(color_of(*a)), Some(*a));
            for b in &PieceKind::ALL[i + 1..] {
                assert_ne!(color_of(*a), color_of(*b));
            }
        }
        assert_eq!(kind_of_color(0), None);
    }

    #[test]
    fn o_piece_is_rotation_invariant() {
        let north = cells_of(PieceKind::O, Rotation::North, 4, 0);
        for rotation in ROTATIONS {
            assert_eq!(cells_of(PieceKind::O, rotation, 4, 0), north);
        }
    }

    #[test]
    fn spawn_cells_sit_in_the_middle_columns() {
        for kind in PieceKind::ALL {
            let cells = cells_of(kind, Rotation::North, spawn_column_of(kind), 0);
            assert!(cells.iter().all(|&(x, y)| (3..=6).contains(&x) && y <= 1));
        }
    }

    #[test]
    fn random_kind_covers_all_kinds() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 7];
        for _ in 0..500 {
            seen[random_kind(&mut rng).index()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
