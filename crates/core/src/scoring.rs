//! Scoring module - line clear points, leveling and gravity speed
//!
//! Levels start at 1 and advance every `LINES_PER_LEVEL` cleared lines.
//! Line clear points come from a fixed table and are multiplied by the level.

use crate::types::{
    DROP_INTERVALS, DROP_INTERVAL_FLOOR_MS, LINES_PER_LEVEL, LINE_SCORES, SOFT_DROP_INTERVAL_MS,
};

/// Points for clearing `lines` rows with one lock at `level`.
///
/// More than four lines cannot come from a single piece and score nothing.
pub fn line_clear_score(lines: usize, level: u32) -> u32 {
    LINE_SCORES
        .get(lines)
        .copied()
        .unwrap_or(0)
        .saturating_mul(level)
}

/// Level for a cumulative line count: `lines / 10 + 1`
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Gravity interval for a level, in milliseconds.
///
/// Strictly decreasing through level 9, then clamped at the floor.
pub fn gravity_interval_ms(level: u32) -> u32 {
    let idx = level.max(1) as usize - 1;
    DROP_INTERVALS
        .get(idx)
        .copied()
        .unwrap_or(DROP_INTERVAL_FLOOR_MS)
}

/// Interval actually used by gravity; soft drop never falls slower than level gravity.
pub fn effective_interval_ms(level: u32, soft_drop: bool) -> u32 {
    let base = gravity_interval_ms(level);
    if soft_drop {
        base.min(SOFT_DROP_INTERVAL_MS)
    } else {
        base
    }
}
