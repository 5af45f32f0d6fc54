//! Scoring module - level progression, gravity curve and points
//!
//! Everything here is a pure function of cumulative lines or rows dropped:
//! - level = lines / 10 + 1
//! - drop interval = max(50, 1000 - (level - 1) * 100) ms
//! - line clear = lines * 100 * level
//! - soft drop +1 per row, hard drop +2 per row

use crate::types::{
    BASE_DROP_MS, DROP_STEP_MS, HARD_DROP_POINTS, LINES_PER_LEVEL, LINE_CLEAR_POINTS,
    MIN_DROP_MS, SOFT_DROP_POINTS,
};

/// Level management
/// Level starts at 1 and increases every 10 lines cleared
pub fn calculate_level(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Get drop interval for a level (in milliseconds), floored at `MIN_DROP_MS`
pub fn get_drop_interval_ms(level: u32) -> u32 {
    let reduction = level.saturating_sub(1).saturating_mul(DROP_STEP_MS);
    BASE_DROP_MS.saturating_sub(reduction).max(MIN_DROP_MS)
}

/// Points for clearing `lines` rows in one lock at `level`
pub fn calculate_line_score(lines: u32, level: u32) -> u32 {
    lines
        .saturating_mul(LINE_CLEAR_POINTS)
        .saturating_mul(level)
}

/// Calculate drop score
/// soft_drop: +1 per cell
/// hard_drop: +2 per cell
pub fn calculate_drop_score(cells: u32, is_hard_drop: bool) -> u32 {
    if is_hard_drop {
        cells * HARD_DROP_POINTS
    } else {
        cells * SOFT_DROP_POINTS
    }
}
