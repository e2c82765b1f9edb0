//! Contract violations raised by the core.
//!
//! Every precondition the core enforces surfaces here as a value at the
//! violating call instead of aborting the process.

use thiserror::Error;

use crate::types::{GameState, TileCoord};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("tile {coord} is not a pellet")]
    NotAPellet { coord: TileCoord },

    #[error("tile {coord} is outside the grid")]
    OutOfBounds { coord: TileCoord },

    #[error("state timer was started while already running")]
    TimerAlreadyStarted,

    #[error("level shape mismatch: {rows}x{cols} grid with {tiles} tile indices and {collision} collision cells")]
    LevelShape {
        rows: u16,
        cols: u16,
        tiles: usize,
        collision: usize,
    },

    #[error("grid of {rows}x{cols} cannot hold {len} tile indices")]
    GridShape { rows: u16, cols: u16, len: usize },

    #[error("tile size {tile_w}x{tile_h} must be positive")]
    TileSize { tile_w: i32, tile_h: i32 },

    #[error("level holds {count} pellets, more than a counter can track")]
    TooManyPellets { count: usize },

    #[error("second player start at {second}, first at {first}")]
    DuplicateStart { first: TileCoord, second: TileCoord },

    #[error("collision cell {index} holds {value}, expected 0 or 1")]
    InvalidCollision { index: usize, value: u8 },

    #[error("level has no player start tile")]
    MissingStart,

    #[error("transition {from} -> {to} is not in the transition table")]
    IllegalTransition { from: GameState, to: GameState },

    #[error("state {state} requires a loaded level")]
    NotLoaded { state: GameState },
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
