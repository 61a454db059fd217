//! Generation schedule
//!
//! Poll-driven: the host ticks, the schedule compares elapsed whole seconds against a
//! due watermark. No timers, no callbacks.

/// Timing of target generations (all values in whole seconds since level start)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationSchedule {
    due_at_s: u64,
    first_delay_s: u64,
    interval_s: u64,
    grace_s: u64,
}

impl GenerationSchedule {
    pub fn new(first_delay_s: u64, interval_s: u64, grace_s: u64) -> Self {
        Self {
            due_at_s: first_delay_s,
            first_delay_s,
            interval_s,
            grace_s,
        }
    }

    /// Re-arm for a new session
    pub fn restart(&mut self) {
        self.due_at_s = self.first_delay_s;
    }

    pub fn due_at_s(&self) -> u64 {
        self.due_at_s
    }

    pub fn is_due(&self, elapsed_s: u64) -> bool {
        elapsed_s >= self.due_at_s
    }

    /// Fire at most once: if due, move the watermark one interval past `elapsed_s`
    /// and return true. Missed intervals are not replayed.
    pub fn poll(&mut self, elapsed_s: u64) -> bool {
        if !self.is_due(elapsed_s) {
            return false;
        }
        self.due_at_s = elapsed_s.saturating_add(self.interval_s);
        true
    }

    /// All targets solved: next generation after the short grace interval
    pub fn pull_forward(&mut self, elapsed_s: u64) {
        self.due_at_s = elapsed_s.saturating_add(self.grace_s);
    }
}

impl Default for GenerationSchedule {
    fn default() -> Self {
        use crate::consts::*;
        Self::new(FIRST_GENERATION_DELAY_S, TIME_BETWEEN_BUTTONS_S, SOLVED_GRACE_S)
    }
}
