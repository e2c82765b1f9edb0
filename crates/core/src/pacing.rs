//! Fixed frame pacing.
//!
//! The loop targets one frame per budget. A frame that finishes early sleeps
//! off the remainder; a frame that overruns proceeds immediately with no
//! catch-up.

use std::time::Duration;

use crate::types::TICKS_PER_FRAME;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePacer {
    budget_ms: u64,
}

impl FramePacer {
    pub const fn new(budget_ms: u64) -> Self {
        Self { budget_ms }
    }

    pub fn budget_ms(&self) -> u64 {
        self.budget_ms
    }

    /// Time left to sleep after a frame that took `elapsed_ms`.
    ///
    /// `None` when the frame used up (or overran) its budget.
    pub fn remaining(&self, elapsed_ms: u64) -> Option<Duration> {
        match self.budget_ms.checked_sub(elapsed_ms) {
            Some(0) | None => None,
            Some(ms) => Some(Duration::from_millis(ms)),
        }
    }
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new(TICKS_PER_FRAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn early_frame_sleeps_remainder() {
        let pacer = FramePacer::default();
        assert_eq!(pacer.remaining(4), Some(Duration::from_millis(12)));
        assert_eq!(pacer.remaining(0), Some(Duration::from_millis(16)));
    }

    #[test]
    fn full_or_overrun_frame_does_not_sleep() {
        let pacer = FramePacer::new(16);
        assert_eq!(pacer.remaining(16), None);
        assert_eq!(pacer.remaining(40), None);
    }
}
