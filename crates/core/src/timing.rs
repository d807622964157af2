//! Gravity timing
//!
//! The drop timer accumulates elapsed milliseconds and fires once the current
//! interval is reached. Firing resets the accumulator instead of subtracting
//! the interval, so a long frame (or a resume after pause) produces at most
//! one descent and never a burst of catch-up steps.

use crate::types::{BASE_DROP_MS, DROP_STEP_MS, MIN_DROP_MS, SOFT_DROP_MS};

/// Gravity interval for `level`, clamped at [`MIN_DROP_MS`].
pub fn drop_interval_ms(level: u32) -> u32 {
    BASE_DROP_MS
        .saturating_sub(level.saturating_mul(DROP_STEP_MS))
        .max(MIN_DROP_MS)
}

/// Automatic-descent timer with the soft-drop override
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DropTimer {
    elapsed_ms: u32,
    soft_drop: bool,
}

impl DropTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current interval: the soft-drop interval while held, else the level's.
    pub fn interval_ms(&self, level: u32) -> u32 {
        if self.soft_drop {
            SOFT_DROP_MS
        } else {
            drop_interval_ms(level)
        }
    }

    /// Add `delta_ms`; returns true when a descent is due.
    pub fn advance(&mut self, delta_ms: u32, level: u32) -> bool {
        self.elapsed_ms = self.elapsed_ms.saturating_add(delta_ms);
        if self.elapsed_ms >= self.interval_ms(level) {
            self.elapsed_ms = 0;
            return true;
        }
        false
    }

    /// Switch soft drop on or off. A change restarts the accumulator so the
    /// new speed takes effect from now.
    pub fn set_soft_drop(&mut self, held: bool) {
        if self.soft_drop != held {
            self.soft_drop = held;
            self.elapsed_ms = 0;
        }
    }

    pub fn soft_drop(&self) -> bool {
        self.soft_drop
    }

    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    /// Restart the accumulator, e.g. after a new piece spawns.
    pub fn restart(&mut self) {
        self.elapsed_ms = 0;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_intervals() {
        assert_eq!(drop_interval_ms(0), 1000);
        assert_eq!(drop_interval_ms(1), 900);
        assert_eq!(drop_interval_ms(5), 500);
        assert_eq!(drop_interval_ms(9), 100);
        assert_eq!(drop_interval_ms(10), 100);
        assert_eq!(drop_interval_ms(u32::MAX), 100);
    }

    #[test]
    fn test_intervals_never_increase_with_level() {
        let mut prev = drop_interval_ms(0);
        for level in 1..40 {
            let cur = drop_interval_ms(level);
            assert!(cur <= prev);
            prev = cur;
        }
    }

    #[test]
    fn test_fires_once_per_interval() {
        let mut timer = DropTimer::new();
        assert!(!timer.advance(999, 0));
        assert!(timer.advance(1, 0));
        assert_eq!(timer.elapsed_ms(), 0);
    }

    #[test]
    fn test_no_catch_up_after_long_frame() {
        let mut timer = DropTimer::new();
        assert!(timer.advance(5000, 0));
        // The extra four seconds are discarded.
        assert!(!timer.advance(16, 0));
    }

    #[test]
    fn test_soft_drop_interval() {
        let mut timer = DropTimer::new();
        timer.set_soft_drop(true);
        assert_eq!(timer.interval_ms(0), SOFT_DROP_MS);
        assert!(!timer.advance(49, 0));
        assert!(timer.advance(1, 0));

        timer.set_soft_drop(false);
        assert_eq!(timer.interval_ms(3), 700);
    }

    #[test]
    fn test_soft_drop_change_restarts_accumulator() {
        let mut timer = DropTimer::new();
        timer.advance(900, 0);
        timer.set_soft_drop(true);
        assert_eq!(timer.elapsed_ms(), 0);

        // Setting the same value again keeps progress.
        timer.advance(20, 0);
        timer.set_soft_drop(true);
        assert_eq!(timer.elapsed_ms(), 20);
    }
}
