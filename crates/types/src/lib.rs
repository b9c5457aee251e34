//! Shared engine types - piece kinds, rotations, actions and rule constants
//!
//! Pure data used by the engine and by whatever presentation layer polls it:
//! piece kinds, rotation states, input actions, lock events and the fixed
//! board/timing/scoring constants.
//!
//! # Board Dimensions
//!
//! Default playfield is 10 columns by 20 rows. Row 0 is the top row and rows
//! grow downward; column 0 is the leftmost column.
//!
//! # Timers
//!
//! All durations are milliseconds of caller-supplied elapsed time:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Nominal frame interval (~60 FPS) |
//! | `SOFT_DROP_INTERVAL_MS` | 50 | Fall interval cap while soft dropping |
//! | `LOCK_DELAY_MS` | 450 | Rest time before a landed piece locks |
//! | `LOCK_RESET_LIMIT` | 15 | Max lock delay resets per piece |
//!
//! # Gravity by Level
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 1000ms |
//! | 2 | 800ms |
//! | 3 | 650ms |
//! | 4 | 500ms |
//! | 5 | 400ms |
//! | 6 | 320ms |
//! | 7 | 250ms |
//! | 8 | 200ms |
//! | 9 | 160ms |
//! | 10+ | 120ms floor |
//!
//! # Examples
//!
//! ```
//! use srs_tetris_types::{GameAction, PieceKind, Rotation, RotationDirection};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//!
//! let rotated = Rotation::North.rotate(RotationDirection::CounterClockwise);
//! assert_eq!(rotated, Rotation::West);
//!
//! let action = GameAction::from_str("hardDrop").unwrap();
//! assert_eq!(action, GameAction::HardDrop);
//! ```

use serde::Serialize;

/// Default board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Default board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Smallest accepted board dimension (a piece's 4x4 box must fit)
pub const MIN_BOARD_DIMENSION: u8 = 4;

/// Largest accepted board dimension (coordinates are `i8`)
pub const MAX_BOARD_DIMENSION: u8 = 64;

/// Nominal frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Fall interval while soft drop is held; never slower than level gravity.
pub const SOFT_DROP_INTERVAL_MS: u32 = 50;

/// Accumulated rest time after which a landed piece locks.
pub const LOCK_DELAY_MS: u32 = 450;

/// Maximum number of lock delay resets per piece (15)
pub const LOCK_RESET_LIMIT: u8 = 15;

/// Gravity interval per level, milliseconds per row.
///
/// Index 0 = level 1, index 8 = level 9.
pub const DROP_INTERVALS: [u32; 9] = [1000, 800, 650, 500, 400, 320, 250, 200, 160];

/// Gravity interval from level 10 onward.
pub const DROP_INTERVAL_FLOOR_MS: u32 = 120;

/// Lines needed to advance one level.
pub const LINES_PER_LEVEL: u32 = 10;

/// Base points indexed by lines cleared in one lock (0 to 4), multiplied by
/// the level reached after the clear.
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// A cell on the game board
///
/// - `0`: empty
/// - anything else: packed `0xRRGGBB` color of the piece that locked there
pub type Cell = u32;

/// Value of an empty cell
pub const EMPTY_CELL: Cell = 0;

/// Tetromino kind; serialized as a lowercase letter.
///
/// Shapes, colors and spawn columns live in the core crate's `pieces` module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }

    /// Position in [`PieceKind::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Direction of a rotation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
}

impl RotationDirection {
    /// Orientation index delta: +1 clockwise, -1 counter-clockwise.
    pub fn delta(&self) -> i8 {
        match self {
            RotationDirection::Clockwise => 1,
            RotationDirection::CounterClockwise => -1,
        }
    }
}

/// Rotation states (North = spawn orientation, index 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Orientation index 0..=3.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Orientation for an index, wrapping modulo 4.
    pub fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }

    /// `(current + delta + 4) mod 4`
    pub fn rotate(&self, direction: RotationDirection) -> Self {
        let next = (self.index() as i8 + direction.delta() + 4) % 4;
        Self::from_index(next as usize)
    }

    /// Rotate clockwise
    pub fn rotate_cw(&self) -> Self {
        self.rotate(RotationDirection::Clockwise)
    }

    /// Rotate counter-clockwise
    pub fn rotate_ccw(&self) -> Self {
        self.rotate(RotationDirection::CounterClockwise)
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "north" | "n" | "0" => Some(Rotation::North),
            "east" | "e" | "1" => Some(Rotation::East),
            "south" | "s" | "2" => Some(Rotation::South),
            "west" | "w" | "3" => Some(Rotation::West),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Rotation::North => "north",
            Rotation::East => "east",
            Rotation::South => "south",
            Rotation::West => "west",
        }
    }
}

/// Discrete input events the engine understands.
///
/// A presenter maps its own key bindings onto these; key-repeat suppression
/// happens before an action reaches the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    RotateCw,
    RotateCcw,
    SoftDropStart,
    SoftDropStop,
    HardDrop,
    Pause,
    Restart,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "rotatecw" => Some(GameAction::RotateCw),
            "rotateccw" => Some(GameAction::RotateCcw),
            "softdropstart" => Some(GameAction::SoftDropStart),
            "softdropstop" => Some(GameAction::SoftDropStop),
            "harddrop" => Some(GameAction::HardDrop),
            "pause" => Some(GameAction::Pause),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
            GameAction::SoftDropStart => "softDropStart",
            GameAction::SoftDropStop => "softDropStop",
            GameAction::HardDrop => "hardDrop",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }
}

/// Emitted once per locked piece; consumed by observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    /// Points added to the score by this lock.
    pub score_awarded: u32,
    /// Level after the lock was processed.
    pub level: u32,
}
