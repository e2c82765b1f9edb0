//! One-shot countdown timers and the tick source they read.
//!
//! Timers are polled deadlines: a state arms one on entry, checks
//! [`StateTimer::is_done`] every frame and resets it on the way out.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

use crate::error::{CoreError, CoreResult};

/// Monotonic millisecond tick source.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Wall-clock ticks measured from construction.
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Hand-driven clock for deterministic tests and replays.
///
/// Clones share the same tick counter.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    ticks: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            ticks: Rc::new(Cell::new(start_ms)),
        }
    }

    pub fn advance(&self, ms: u64) {
        self.ticks.set(self.ticks.get().saturating_add(ms));
    }

    pub fn set(&self, ms: u64) {
        self.ticks.set(ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.ticks.get()
    }
}

/// Oneshot timer for state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StateTimer {
    start_ms: u64,
    target_ms: u64,
    started: bool,
}

impl StateTimer {
    pub const fn new() -> Self {
        Self {
            start_ms: 0,
            target_ms: 0,
            started: false,
        }
    }

    /// Arm the timer. Starting a timer that is already running is an error.
    pub fn start(&mut self, now_ms: u64, wait_ms: u64) -> CoreResult<()> {
        if self.started {
            return Err(CoreError::TimerAlreadyStarted);
        }
        self.start_ms = now_ms;
        self.target_ms = wait_ms;
        self.started = true;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.started = false;
        self.start_ms = 0;
        self.target_ms = 0;
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// True once strictly more than the target duration has elapsed.
    pub fn is_done(&self, now_ms: u64) -> bool {
        self.started && now_ms.saturating_sub(self.start_ms) > self.target_ms
    }

    pub fn target_ms(&self) -> u64 {
        self.target_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_timer_is_never_done() {
        let timer = StateTimer::new();
        assert!(!timer.is_started());
        assert!(!timer.is_done(u64::MAX));
    }

    #[test]
    fn timer_elapses_strictly_after_target() {
        let mut timer = StateTimer::new();
        timer.start(1000, 500).unwrap();
        assert!(!timer.is_done(1000));
        assert!(!timer.is_done(1500));
        assert!(timer.is_done(1501));
    }

    #[test]
    fn double_start_is_rejected() {
        let mut timer = StateTimer::new();
        timer.start(0, 10).unwrap();
        assert_eq!(timer.start(5, 10), Err(CoreError::TimerAlreadyStarted));

        timer.reset();
        assert!(!timer.is_started());
        assert!(timer.start(5, 10).is_ok());
    }

    #[test]
    fn manual_clock_clones_share_ticks() {
        let clock = ManualClock::new(10);
        let view = clock.clone();
        clock.advance(6);
        assert_eq!(view.now_ms(), 16);
        view.set(3);
        assert_eq!(clock.now_ms(), 3);
    }
}
