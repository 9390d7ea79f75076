//! Scoring module - line-clear points and fall cadence
//!
//! The playfield core only knows the flat per-row rule; anything richer
//! (levels, combos) belongs to the collaborator consuming the line-clear
//! events.

use crate::types::{LINE_VALUE, NORMAL_FALL_TICKS, SOFT_DROP_FALL_TICKS};

/// Points for clearing `lines` rows with one lock
pub fn score_for_lines(lines: usize) -> u32 {
    lines as u32 * LINE_VALUE
}

/// Ticks between gravity steps, depending on whether soft drop is held
pub fn fall_interval_ticks(soft_drop: bool) -> u32 {
    if soft_drop {
        SOFT_DROP_FALL_TICKS
    } else {
        NORMAL_FALL_TICKS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_per_row() {
        assert_eq!(score_for_lines(0), 0);
        assert_eq!(score_for_lines(1), 100);
        assert_eq!(score_for_lines(4), 400);
    }

    #[test]
    fn test_fall_cadence() {
        assert_eq!(fall_interval_ticks(false), 20);
        assert_eq!(fall_interval_ticks(true), 3);
        assert!(fall_interval_ticks(true) < fall_interval_ticks(false));
    }
}
