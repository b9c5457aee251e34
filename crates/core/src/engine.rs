//! Engine module - the gravity / lock delay state machine
//!
//! Ties together the board, the shape catalog, the rotation system and the
//! scoring tables. It owns the falling piece and a one-deep lookahead, and is
//! driven by two kinds of calls:
//!
//! - [`GameEngine::update`] once per frame with the elapsed milliseconds
//! - discrete input methods (`move_left`, `rotate_cw`, `hard_drop`, ...)
//!
//! Nothing here fails. A placement that does not fit is rejected and the
//! previous state kept; a spawn that does not fit ends the game.

use crate::board::Board;
use crate::pieces::{cells_of, color_of, spawn_column_of, PieceCells};
use crate::rng::{KindSource, UniformKinds};
use crate::rotation::try_rotate;
use crate::scoring::{effective_interval_ms, level_for_lines, line_clear_score};
use crate::snapshot::{ActiveSnapshot, GameSnapshot, TimersSnapshot};
use crate::types::{
    Cell, GameAction, LockEvent, PieceKind, Rotation, RotationDirection, LOCK_DELAY_MS,
    LOCK_RESET_LIMIT,
};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub col: i8,
    pub row: i8,
}

impl ActivePiece {
    /// A piece at its kind's spawn position
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            col: spawn_column_of(kind),
            row: 0,
        }
    }

    /// Absolute board cells
    pub fn cells(&self) -> PieceCells {
        cells_of(self.kind, self.rotation, self.col, self.row)
    }

    /// Check if all cells are at valid positions on the board
    pub fn is_valid(&self, board: &Board) -> bool {
        board.is_valid(self.kind, self.rotation, self.col, self.row)
    }

    fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            col: self.col + dx,
            row: self.row + dy,
            ..*self
        }
    }
}

/// Coarse session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Active,
    Paused,
    GameOver,
}

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameEngine<S: KindSource = UniformKinds> {
    board: Board,
    active: Option<ActivePiece>,
    next_kind: PieceKind,
    source: S,
    last_event: Option<LockEvent>,
    score: u32,
    level: u32,
    lines: u32,
    paused: bool,
    over: bool,
    soft_drop: bool,
    gravity_ms: u32,
    lock_ms: u32,
    lock_resets: u8,
    /// Set when a gravity step was blocked; cleared when one succeeds.
    landed: bool,
}

impl GameEngine<UniformKinds> {
    /// Start a 10x20 game with a seeded uniform kind source
    pub fn new(seed: u64) -> Self {
        Self::with_source(UniformKinds::new(seed))
    }
}

impl<S: KindSource> GameEngine<S> {
    /// Start a 10x20 game drawing kinds from `source`
    pub fn with_source(source: S) -> Self {
        Self::with_board(Board::new(), source)
    }

    /// Start a game on an existing board.
    ///
    /// The first piece spawns immediately; if it does not fit, the session
    /// is already over and the board is left as given.
    pub fn with_board(board: Board, mut source: S) -> Self {
        let first = source.next_kind();
        let next_kind = source.next_kind();
        let mut engine = Self {
            board,
            active: None,
            next_kind,
            source,
            last_event: None,
            score: 0,
            level: 1,
            lines: 0,
            paused: false,
            over: false,
            soft_drop: false,
            gravity_ms: 0,
            lock_ms: 0,
            lock_resets: 0,
            landed: false,
        };
        engine.spawn_piece(Some(first));
        engine
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn over(&self) -> bool {
        self.over
    }

    pub fn soft_drop_active(&self) -> bool {
        self.soft_drop
    }

    pub fn phase(&self) -> GamePhase {
        if self.over {
            GamePhase::GameOver
        } else if self.paused {
            GamePhase::Paused
        } else {
            GamePhase::Active
        }
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    /// Kind shown in the "next piece" preview
    pub fn next_kind(&self) -> PieceKind {
        self.next_kind
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Locked cell at (col, row); None if out of bounds
    pub fn cell(&self, col: i8, row: i8) -> Option<Cell> {
        self.board.get(col, row)
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Cells of the falling piece (empty when there is none)
    pub fn active_piece_cells(&self) -> PieceCells {
        self.active.map(|p| p.cells()).unwrap_or_default()
    }

    pub fn active_piece_color(&self) -> Option<Cell> {
        self.active.map(|p| color_of(p.kind))
    }

    /// Current gravity interval, including soft drop
    pub fn gravity_interval_ms(&self) -> u32 {
        effective_interval_ms(self.level, self.soft_drop)
    }

    /// Row the active piece would land on with a hard drop
    pub fn ghost_row(&self) -> Option<i8> {
        let active = self.active?;
        let mut row = active.row;
        while self.board.is_valid(active.kind, active.rotation, active.col, row + 1) {
            row += 1;
        }
        Some(row)
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.rows(),
            active: self.active.map(ActiveSnapshot::from),
            ghost_row: self.ghost_row(),
            next: self.next_kind,
            score: self.score,
            level: self.level,
            lines: self.lines,
            paused: self.paused,
            game_over: self.over,
            soft_drop: self.soft_drop,
            timers: TimersSnapshot {
                gravity_ms: self.gravity_ms,
                lock_ms: self.lock_ms,
                lock_resets: self.lock_resets,
            },
        }
    }

    fn accepts_input(&self) -> bool {
        !self.paused && !self.over
    }

    /// Per-frame gravity and lock delay.
    ///
    /// At most one gravity step per call. Returns true if the piece moved
    /// down or locked.
    pub fn update(&mut self, elapsed_ms: u32) -> bool {
        if !self.accepts_input() || self.active.is_none() {
            return false;
        }

        let interval = self.gravity_interval_ms();
        self.gravity_ms = self.gravity_ms.saturating_add(elapsed_ms);
        if self.gravity_ms < interval {
            return false;
        }
        self.gravity_ms = 0;

        if self.try_shift(0, 1) {
            self.lock_ms = 0;
            self.landed = false;
            return true;
        }

        self.landed = true;
        self.lock_ms = self.lock_ms.saturating_add(interval);
        if self.lock_ms >= LOCK_DELAY_MS {
            self.lock_piece();
            return true;
        }
        false
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(1)
    }

    pub fn rotate_cw(&mut self) -> bool {
        self.try_rotate(RotationDirection::Clockwise)
    }

    pub fn rotate_ccw(&mut self) -> bool {
        self.try_rotate(RotationDirection::CounterClockwise)
    }

    pub fn start_soft_drop(&mut self) -> bool {
        if !self.accepts_input() {
            return false;
        }
        self.soft_drop = true;
        true
    }

    pub fn stop_soft_drop(&mut self) -> bool {
        if !self.accepts_input() {
            return false;
        }
        self.soft_drop = false;
        true
    }

    /// Drop straight down and lock immediately, skipping lock delay.
    pub fn hard_drop(&mut self) -> bool {
        if !self.accepts_input() || self.active.is_none() {
            return false;
        }
        while self.try_shift(0, 1) {}
        self.lock_piece();
        true
    }

    /// Flip between Active and Paused; ignored once the game is over.
    pub fn toggle_pause(&mut self) -> bool {
        if self.over {
            return false;
        }
        self.paused = !self.paused;
        true
    }

    /// Fresh session on the same board size and kind source.
    pub fn restart(&mut self) {
        self.board.clear();
        self.active = None;
        self.last_event = None;
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.paused = false;
        self.over = false;
        self.soft_drop = false;
        let first = self.source.next_kind();
        self.next_kind = self.source.next_kind();
        self.spawn_piece(Some(first));
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::RotateCw => self.rotate_cw(),
            GameAction::RotateCcw => self.rotate_ccw(),
            GameAction::SoftDropStart => self.start_soft_drop(),
            GameAction::SoftDropStop => self.stop_soft_drop(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Translate the active piece if the target fits. No timer side effects.
    fn try_shift(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        let moved = active.shifted(dx, dy);
        if !moved.is_valid(&self.board) {
            return false;
        }
        self.active = Some(moved);
        true
    }

    fn try_move(&mut self, dx: i8) -> bool {
        if !self.accepts_input() || !self.try_shift(dx, 0) {
            return false;
        }
        self.reset_lock_timer();
        true
    }

    fn try_rotate(&mut self, direction: RotationDirection) -> bool {
        if !self.accepts_input() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };
        let Some(placed) = try_rotate(
            &self.board,
            active.kind,
            active.rotation,
            direction,
            active.col,
            active.row,
        ) else {
            return false;
        };

        self.active = Some(ActivePiece {
            rotation: placed.rotation,
            col: placed.col,
            row: placed.row,
            ..active
        });
        self.reset_lock_timer();
        true
    }

    /// Postpone locking after a move/rotate, while the per-piece budget lasts.
    fn reset_lock_timer(&mut self) {
        if self.landed && self.lock_resets < LOCK_RESET_LIMIT {
            self.lock_ms = 0;
            self.lock_resets += 1;
        }
    }

    /// Stamp the active piece, clear full rows, score, then spawn the next piece.
    fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };
        self.board
            .lock(active.kind, active.rotation, active.col, active.row);

        let rows = self.board.completed_rows();
        let cleared = self.board.clear_rows(&rows);
        let mut awarded = 0;
        if cleared > 0 {
            self.lines += cleared as u32;
            self.level = level_for_lines(self.lines);
            awarded = line_clear_score(cleared, self.level);
            self.score = self.score.saturating_add(awarded);
        }

        self.last_event = Some(LockEvent {
            kind: active.kind,
            lines_cleared: cleared as u32,
            score_awarded: awarded,
            level: self.level,
        });

        self.spawn_piece(None);
    }

    /// Bring in the next piece; `first` overrides the queue at session start.
    fn spawn_piece(&mut self, first: Option<PieceKind>) {
        let kind = match first {
            Some(kind) => kind,
            None => std::mem::replace(&mut self.next_kind, self.source.next_kind()),
        };

        self.gravity_ms = 0;
        self.lock_ms = 0;
        self.lock_resets = 0;
        self.landed = false;

        let piece = ActivePiece::spawn(kind);
        if piece.is_valid(&self.board) {
            self.active = Some(piece);
        } else {
            self.active = None;
            self.over = true;
        }
    }
}
