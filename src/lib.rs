//! TUI Pac-Man (workspace facade crate).
//!
//! The game rules live in dedicated crates under `crates/` and are re-exported
//! here as `tui_pacman::{core,input,term,types}`. This crate adds the runtime
//! around them: environment configuration, file logging, the frame loop
//! harness and the terminal platform.

pub mod config;
pub mod harness;
pub mod logging;
pub mod platform;

pub use tui_pacman_core as core;
pub use tui_pacman_input as input;
pub use tui_pacman_term as term;
pub use tui_pacman_types as types;

pub use config::AppConfig;
pub use harness::{Harness, HarnessError, Platform, PlatformSample, RunSummary};
pub use platform::TerminalPlatform;
