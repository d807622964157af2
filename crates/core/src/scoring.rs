//! Line clear and scoring
//!
//! Classic table only: points depend on how many rows one lock cleared and on
//! the level in effect when the piece locked. No drop bonuses, combos or
//! back-to-back multipliers.

use crate::board::Board;
use crate::types::{LINES_PER_LEVEL, LINE_SCORES};

/// Remove full rows from a copy of `board`.
///
/// Returns the compacted board and the number of rows removed. Height is kept
/// by inserting the same number of empty rows at the top.
pub fn clear_lines(board: &Board) -> (Board, u32) {
    let mut next = board.clone();
    let cleared = next.clear_full_rows();
    (next, cleared)
}

/// Points for clearing `lines` rows at once at `level` (0-based).
///
/// Counts above four cannot happen with four-cell pieces; they score as four.
pub fn score_for(lines: u32, level: u32) -> u32 {
    let idx = (lines as usize).min(LINE_SCORES.len() - 1);
    LINE_SCORES[idx].saturating_mul(level.saturating_add(1))
}

/// Level reached after `total_lines` cleared rows
pub fn level_for(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL
}
