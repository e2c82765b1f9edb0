//! Core game logic - pure, deterministic, and testable
//!
//! Everything a frame needs to decide what happens next lives here: the maze
//! and its pellets, lane-locked player movement, the game state machine and
//! the timers it polls. Nothing in this crate touches a terminal, a clock
//! source it does not receive as an argument, or the filesystem.
//!
//! # Module Structure
//!
//! - [`grid`]: generic 2D tile-index grid with tile/screen conversion
//! - [`level`]: tile and collision tables, ASCII level parsing, the classic maze
//! - [`maze`]: pellet and wall semantics layered over the grid
//! - [`player`]: continuous position, velocity and facing
//! - [`movement`]: one-tile lookahead, centerline snap, edge collision, warp
//! - [`machine`]: per-frame state machine with an explicit transition table
//! - [`timer`]: one-shot state timers and the tick sources they read
//! - [`pacing`]: fixed frame budget
//!
//! # Example
//!
//! ```
//! use tui_pacman_core::{FrameEnv, GameConfig, GameStateMachine, LevelData};
//! use tui_pacman_core::types::GameState;
//!
//! let level = LevelData::classic().unwrap();
//! let mut machine = GameStateMachine::new(level, GameConfig::default());
//!
//! machine.step(&FrameEnv::idle(0)).unwrap();
//! machine.step(&FrameEnv::idle(16)).unwrap();
//! assert_eq!(machine.state(), GameState::WaitingToStartLevel);
//!
//! // The start delay is 2000ms.
//! machine.step(&FrameEnv::idle(2017)).unwrap();
//! assert_eq!(machine.state(), GameState::Running);
//! ```
//!
//! # Timing
//!
//! The caller owns the clock. Sample it once at the top of every frame and
//! pass it in through [`FrameEnv`]; timers compare against that value only.

pub mod config;
pub mod error;
pub mod frame;
pub mod grid;
pub mod level;
pub mod machine;
pub mod maze;
pub mod movement;
pub mod pacing;
pub mod player;
pub mod timer;

pub use tui_pacman_types as types;

// Re-export commonly used types for convenience
pub use config::GameConfig;
pub use error::{CoreError, CoreResult};
pub use frame::{FrameView, RenderState};
pub use grid::TileGrid;
pub use level::{LevelData, CLASSIC_LAYOUT};
pub use machine::{FrameEnv, GameStateMachine, StateContext, StepOutcome, TRANSITIONS};
pub use maze::Maze;
pub use movement::MovementController;
pub use pacing::FramePacer;
pub use player::Player;
pub use timer::{Clock, ManualClock, SystemClock, StateTimer};
