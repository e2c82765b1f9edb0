//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! codes onto game [`Key`]s and tracks which keys are held so the game can
//! sample a [`crate::types::InputSnapshot`] once per frame, including in
//! terminals without key-release events.

pub mod handler;
pub mod map;

pub use tui_pacman_types as types;

pub use handler::KeyboardState;
pub use map::{is_close_request, map_key, Key};
