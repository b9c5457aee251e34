//! Core game logic - pure, deterministic, and testable
//!
//! The falling-block engine with no dependencies on rendering, input devices
//! or I/O. A presentation layer drives it with per-frame `update` calls and
//! discrete input events, and polls it for what to draw.
//!
//! # Module Structure
//!
//! - [`pieces`]: shape catalog (4x4 orientation masks, colors, spawn columns)
//! - [`board`]: grid with collision, row completion and row compaction
//! - [`rotation`]: SRS kick tables and first-fit rotation
//! - [`scoring`]: line clear points, leveling and gravity speed
//! - [`rng`]: pluggable piece kind sources
//! - [`engine`]: gravity / lock delay state machine
//! - [`snapshot`]: serializable read-only view for presenters
//!
//! # Game Rules
//!
//! - **SRS Rotation**: 5-kick Super Rotation System; O rotation is cosmetic
//! - **Lock Delay**: 450ms of rest before a landed piece locks, with up to 15
//!   move/rotate resets per piece
//! - **Hard Drop**: locks at once, bypassing lock delay
//! - **Leveling**: every 10 lines; gravity speeds up until a 120ms floor
//! - **Scoring**: 40 / 100 / 300 / 1200 points per 1-4 lines, times level
//!
//! # Example
//!
//! ```
//! use srs_tetris_core::GameEngine;
//! use srs_tetris_types::GameAction;
//!
//! let mut game = GameEngine::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//! game.apply_action(GameAction::HardDrop);
//! game.update(16);
//!
//! assert!(!game.over());
//! assert_eq!(game.board().cells().iter().filter(|&&c| c != 0).count(), 4);
//! ```
//!
//! # Timing
//!
//! Call [`GameEngine::update`](engine::GameEngine::update) every frame with
//! the elapsed milliseconds. Gravity takes at most one step per call.

pub mod board;
pub mod engine;
pub mod pieces;
pub mod rng;
pub mod rotation;
pub mod scoring;
pub mod snapshot;

pub use srs_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use engine::{ActivePiece, GameEngine, GamePhase};
pub use pieces::{cells_of, color_of, spawn_column_of, PieceCells};
pub use rng::{KindSource, ScriptedKinds, SevenBag, UniformKinds};
pub use rotation::{kick_offsets, try_rotate, Placement};
pub use snapshot::{ActiveSnapshot, GameSnapshot, TimersSnapshot};
