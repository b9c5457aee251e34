//! Headless simulation: drives an engine frame by frame with a seeded random
//! autoplayer. Used by the `srs-tetris` binary.

use std::env;

use anyhow::{bail, ensure, Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::{Board, GameEngine, KindSource, SevenBag, UniformKinds};
use crate::types::{
    GameAction, LockEvent, BOARD_HEIGHT, BOARD_WIDTH, MAX_BOARD_DIMENSION, MIN_BOARD_DIMENSION,
    TICK_MS,
};

/// Piece randomizer choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Randomizer {
    Uniform,
    Bag,
}

impl Randomizer {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "uniform" => Some(Randomizer::Uniform),
            "bag" | "7bag" => Some(Randomizer::Bag),
            _ => None,
        }
    }

    pub fn source(&self, seed: u64) -> Box<dyn KindSource> {
        match self {
            Randomizer::Uniform => Box::new(UniformKinds::new(seed)),
            Randomizer::Bag => Box::new(SevenBag::new(seed)),
        }
    }
}

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    pub seed: u64,
    pub cols: u8,
    pub rows: u8,
    pub max_frames: u32,
    pub frame_ms: u32,
    pub randomizer: Randomizer,
    pub print_json: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            cols: BOARD_WIDTH,
            rows: BOARD_HEIGHT,
            max_frames: 20_000,
            frame_ms: TICK_MS,
            randomizer: Randomizer::Uniform,
            print_json: false,
        }
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .with_context(|| format!("invalid {key}={raw:?}")),
        _ => Ok(default),
    }
}

impl SimConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`SimConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let randomizer = match lookup("TETRIS_RANDOMIZER") {
            Some(raw) if !raw.trim().is_empty() => match Randomizer::from_str(&raw) {
                Some(r) => r,
                None => bail!("invalid TETRIS_RANDOMIZER={raw:?} (expected uniform or bag)"),
            },
            _ => defaults.randomizer,
        };

        let print_json = lookup("TETRIS_SIM_JSON")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        let config = Self {
            seed: parse_var(&lookup, "TETRIS_SEED", defaults.seed)?,
            cols: parse_var(&lookup, "TETRIS_COLS", defaults.cols)?,
            rows: parse_var(&lookup, "TETRIS_ROWS", defaults.rows)?,
            max_frames: parse_var(&lookup, "TETRIS_FRAMES", defaults.max_frames)?,
            frame_ms: parse_var(&lookup, "TETRIS_FRAME_MS", defaults.frame_ms)?,
            randomizer,
            print_json,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let range = MIN_BOARD_DIMENSION..=MAX_BOARD_DIMENSION;
        ensure!(
            range.contains(&self.cols) && range.contains(&self.rows),
            "board size {}x{} outside {}..={}",
            self.cols,
            self.rows,
            MIN_BOARD_DIMENSION,
            MAX_BOARD_DIMENSION
        );
        ensure!(self.frame_ms > 0, "TETRIS_FRAME_MS must be positive");
        Ok(())
    }

    /// Build the engine this configuration describes
    pub fn engine(&self) -> Result<GameEngine<Box<dyn KindSource>>> {
        let board = Board::with_size(self.cols, self.rows)
            .with_context(|| format!("cannot build a {}x{} board", self.cols, self.rows))?;
        Ok(GameEngine::with_board(
            board,
            self.randomizer.source(self.seed),
        ))
    }
}

/// Random but plausible inputs: per piece, pick a rotation and a column,
/// walk there one action per frame, then hard drop or ride soft drop down.
#[derive(Debug)]
pub struct Autoplayer {
    rng: StdRng,
    plan: Option<Plan>,
}

#[derive(Debug, Clone, Copy)]
struct Plan {
    rotations: u8,
    shift: i8,
    hard_drop: bool,
}

impl Autoplayer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed ^ 0x5EED),
            plan: None,
        }
    }

    /// Forget the current plan; call when a new piece spawns.
    pub fn new_piece(&mut self) {
        self.plan = None;
    }

    /// Next action for this frame, if any
    pub fn next_action(&mut self) -> Option<GameAction> {
        let rng = &mut self.rng;
        let plan = self.plan.get_or_insert_with(|| Plan {
            rotations: rng.gen_range(0..4),
            shift: rng.gen_range(-5..=5),
            hard_drop: rng.gen_bool(0.5),
        });

        if plan.rotations > 0 {
            plan.rotations -= 1;
            return Some(GameAction::RotateCw);
        }
        if plan.shift != 0 {
            let step = plan.shift.signum();
            plan.shift -= step;
            return Some(if step < 0 {
                GameAction::MoveLeft
            } else {
                GameAction::MoveRight
            });
        }
        if plan.hard_drop {
            plan.hard_drop = false;
            return Some(GameAction::HardDrop);
        }
        None
    }
}

/// Outcome of a simulation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimReport {
    pub frames: u32,
    pub pieces_locked: u32,
    pub lines: u32,
    pub score: u32,
    pub level: u32,
    pub game_over: bool,
}

/// Run until game over or the frame limit; `on_lock` sees every lock event.
pub fn run<S: KindSource>(
    engine: &mut GameEngine<S>,
    config: &SimConfig,
    mut on_lock: impl FnMut(&LockEvent),
) -> SimReport {
    let mut player = Autoplayer::new(config.seed);
    let mut report = SimReport::default();

    engine.start_soft_drop();
    while report.frames < config.max_frames && !engine.over() {
        report.frames += 1;

        if let Some(action) = player.next_action() {
            engine.apply_action(action);
        }
        engine.update(config.frame_ms);

        if let Some(event) = engine.take_last_event() {
            report.pieces_locked += 1;
            on_lock(&event);
            player.new_piece();
        }
    }

    report.lines = engine.lines_cleared();
    report.score = engine.score();
    report.level = engine.level();
    report.game_over = engine.over();
    report
}
