//! SRS Tetris (workspace facade crate).
//!
//! Re-exports the engine crates as `srs_tetris::{core,types}` and hosts the
//! headless simulation used by the default binary.

pub use srs_tetris_core as core;
pub use srs_tetris_types as types;

pub mod sim;
