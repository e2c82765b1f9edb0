//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It avoids
//! widget/layout toolkits and renders into a simple framebuffer that is
//! diffed and flushed to the terminal each frame.
//!
//! - [`game_view`] is pure: [`core::FrameView`] in, [`FrameBuffer`] out
//! - [`renderer`] owns the terminal and writes only what changed

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_pacman_core as core;
pub use tui_pacman_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, Run, TerminalRenderer};
