//! Headless simulation runner (default binary).
//!
//! Plays one game with a seeded random autoplayer and reports what happened.
//! Configuration comes from `TETRIS_*` environment variables, see
//! [`SimConfig::from_env`].

use anyhow::{Context, Result};

use srs_tetris::sim::{self, SimConfig};

fn main() -> Result<()> {
    let config = SimConfig::from_env()?;
    println!(
        "[Sim] seed={} board={}x{} randomizer={:?} frame_ms={} max_frames={}",
        config.seed,
        config.cols,
        config.rows,
        config.randomizer,
        config.frame_ms,
        config.max_frames
    );

    let mut engine = config.engine()?;
    let report = sim::run(&mut engine, &config, |event| {
        if event.lines_cleared > 0 {
            println!(
                "[Sim] {} locked: {} line(s), +{} points, level {}",
                event.kind.as_str().to_uppercase(),
                event.lines_cleared,
                event.score_awarded,
                event.level
            );
        }
    });

    println!(
        "[Sim] {} after {} frames: pieces={} lines={} score={} level={}",
        if report.game_over { "game over" } else { "stopped" },
        report.frames,
        report.pieces_locked,
        report.lines,
        report.score,
        report.level
    );

    if config.print_json {
        let json = serde_json::to_string_pretty(&engine.snapshot())
            .context("failed to serialize final snapshot")?;
        println!("{json}");
    }

    Ok(())
}
