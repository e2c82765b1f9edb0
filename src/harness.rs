//! Frame loop harness.
//!
//! The harness owns the per-frame sequence:
//!
//! 1. read the clock once
//! 2. sample input and close requests from the [`Platform`]
//! 3. step the [`GameStateMachine`]
//! 4. present the frame
//! 5. sleep off whatever is left of the frame budget
//!
//! It also enforces the startup order: [`Harness::run`] refuses to start
//! until [`Harness::initialize`] has succeeded.

use std::time::Duration;

use thiserror::Error;
use tracing::{error, info, trace, warn};

use crate::core::{
    Clock, CoreError, FrameEnv, FramePacer, FrameView, GameStateMachine, Maze, StepOutcome,
};
use crate::types::InputSnapshot;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("frame loop started before the platform was initialized")]
    NotInitialized,

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Platform(#[from] anyhow::Error),
}

/// What the platform observed since the previous frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlatformSample {
    pub input: InputSnapshot,
    pub close_requested: bool,
}

/// Windowing, input and presentation collaborator.
pub trait Platform {
    /// Acquire the display. Must succeed before the loop runs.
    fn initialize(&mut self) -> anyhow::Result<()>;

    /// Drain pending events and report the held keys at `now_ms`.
    fn sample(&mut self, now_ms: u64) -> anyhow::Result<PlatformSample>;

    fn present(&mut self, frame: &FrameView<'_>) -> anyhow::Result<()>;

    /// Release the display. Called even when the loop failed.
    fn shutdown(&mut self) -> anyhow::Result<()>;

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Totals reported when the loop ends normally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub overruns: u64,
}

pub struct Harness<P: Platform, C: Clock> {
    platform: P,
    clock: C,
    machine: GameStateMachine,
    pacer: FramePacer,
    initialized: bool,
}

impl<P: Platform, C: Clock> Harness<P, C> {
    pub fn new(platform: P, clock: C, machine: GameStateMachine, pacer: FramePacer) -> Self {
        Self {
            platform,
            clock,
            machine,
            pacer,
            initialized: false,
        }
    }

    pub fn machine(&self) -> &GameStateMachine {
        &self.machine
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Validate the level, then acquire the platform.
    pub fn initialize(&mut self) -> Result<(), HarnessError> {
        if let Err(err) = Maze::new(self.machine.level()) {
            error!(error = %err, "level rejected");
            return Err(err.into());
        }
        self.platform.initialize().map_err(|err| {
            error!(error = %err, "platform initialization failed");
            HarnessError::Platform(err)
        })?;
        self.initialized = true;
        info!(budget_ms = self.pacer.budget_ms(), "platform initialized");
        Ok(())
    }

    /// Run frames until the state machine asks to quit.
    pub fn run(&mut self) -> Result<RunSummary, HarnessError> {
        if !self.initialized {
            return Err(HarnessError::NotInitialized);
        }

        let mut overruns = 0;
        loop {
            let frame_start = self.clock.now_ms();
            let sample = self.platform.sample(frame_start)?;
            let env = FrameEnv {
                now_ms: frame_start,
                input: sample.input,
                close_requested: sample.close_requested,
            };

            match self.machine.step(&env) {
                Ok(StepOutcome::Continue) => {}
                Ok(StepOutcome::Quit) => break,
                Err(err) => {
                    warn!(error = %err, state = %self.machine.state(), "frame step failed");
                    return Err(err.into());
                }
            }

            self.platform.present(&self.machine.frame_view())?;

            let elapsed = self.clock.now_ms().saturating_sub(frame_start);
            match self.pacer.remaining(elapsed) {
                Some(rest) => self.platform.sleep(rest),
                None => {
                    overruns += 1;
                    trace!(elapsed_ms = elapsed, "frame over budget");
                }
            }
        }

        let summary = RunSummary {
            frames: self.machine.frames(),
            overruns,
        };
        info!(frames = summary.frames, overruns, "frame loop finished");
        Ok(summary)
    }

    /// Release the platform. Also valid after a failed `initialize`, which
    /// may have acquired part of the display.
    pub fn shutdown(&mut self) -> Result<(), HarnessError> {
        self.initialized = false;
        self.platform.shutdown()?;
        Ok(())
    }
}
