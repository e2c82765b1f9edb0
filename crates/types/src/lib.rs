//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Maze Dimensions
//!
//! The arcade maze is a 31-row by 28-column tile grid:
//!
//! - **Rows**: 31 (indexed 0-30, top to bottom)
//! - **Cols**: 28 (indexed 0-27, left to right)
//! - **Warp tunnel**: row 14, exits at columns 0 and 27
//!
//! # Screen Space
//!
//! Positions are continuous pixel coordinates. Each tile spans
//! `TILE_WIDTH` x `TILE_HEIGHT` pixels and the player sprite is twice that,
//! centered on its position.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TILE_WIDTH` | 8 | Tile width in pixels |
//! | `TILE_HEIGHT` | 8 | Tile height in pixels |
//! | `PLAYER_SPRITE_WIDTH` | 16 | Player sprite width in pixels |
//! | `PLAYER_SPRITE_HEIGHT` | 16 | Player sprite height in pixels |
//! | `PLAYER_SPEED` | 1.5 | Pixels moved per frame |
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAMES_PER_SECOND` | 60 | Target frame rate |
//! | `TICKS_PER_FRAME` | 16 | Frame budget in milliseconds |
//! | `LEVEL_LOAD_DELAY_MS` | 2000 | Pause before play starts |
//! | `LEVEL_COMPLETE_DELAY_MS` | 4000 | Flashing maze duration |
//! | `FLASH_PERIOD_FRAMES` | 60 | Frames between maze flash toggles |
//!
//! # Examples
//!
//! ```
//! use tui_pacman_types::{Direction, GameState, TileCoord};
//!
//! let up = Direction::Up;
//! assert_eq!(up.opposite(), Direction::Down);
//! assert_eq!(TileCoord::new(5, 5).step(up), TileCoord::new(4, 5));
//!
//! assert!(GameState::Running.is_playing());
//! ```

/// Maze height in tiles
pub const MAP_ROWS: u16 = 31;

/// Maze width in tiles
pub const MAP_COLS: u16 = 28;

/// Tile width in pixels
pub const TILE_WIDTH: i32 = 8;

/// Tile height in pixels
pub const TILE_HEIGHT: i32 = 8;

/// Player sprite width in pixels (two tiles)
pub const PLAYER_SPRITE_WIDTH: i32 = 16;

/// Player sprite height in pixels (two tiles)
pub const PLAYER_SPRITE_HEIGHT: i32 = 16;

/// Player speed in pixels per frame
pub const PLAYER_SPEED: f64 = 1.5;

/// Row holding the warp tunnel
pub const WARP_ROW: i32 = 14;

/// Player start tile
pub const PLAYER_START_ROW: i32 = 23;
pub const PLAYER_START_COL: i32 = 13;

/// Pellets on the classic maze (240 pellets + 4 power pellets)
pub const TOTAL_PELLETS: u16 = 244;

/// Target frame rate
pub const FRAMES_PER_SECOND: u32 = 60;

/// Frame budget in milliseconds (16ms ≈ 60 FPS)
pub const TICKS_PER_FRAME: u64 = 16;

/// Delay between the maze appearing and play starting
pub const LEVEL_LOAD_DELAY_MS: u64 = 2000;

/// Duration of the flashing maze after the last pellet is eaten
pub const LEVEL_COMPLETE_DELAY_MS: u64 = 4000;

/// Frames between flash toggles on level completion
pub const FLASH_PERIOD_FRAMES: u16 = 60;

/// Blue channel multiplier applied while the maze is "flashed"
pub const FLASH_BLUE_MOD: u8 = 100;

/// Reserved tile indices
pub mod tile {
    /// Open floor, nothing drawn
    pub const OPEN: u16 = 0;
    /// Maze wall
    pub const WALL: u16 = 1;
    /// Ghost-house door
    pub const DOOR: u16 = 2;
    /// Area outside the playfield
    pub const VOID: u16 = 3;
    /// Power pellet
    pub const POWER_PELLET: u16 = 13;
    /// Regular pellet
    pub const PELLET: u16 = 16;
    /// A pellet that has been eaten
    pub const EATEN: u16 = 49;

    /// Check whether an index is one of the two pellet markers
    pub fn is_pellet(index: u16) -> bool {
        index == PELLET || index == POWER_PELLET
    }
}

/// Discrete game lifecycle states
///
/// `PlayerDying` and `GameOver` exist for completeness but no transition
/// currently targets them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    Title,
    LoadingLevel,
    WaitingToStartLevel,
    Running,
    PlayerWarpingOut,
    PlayerWarpingIn,
    PlayerDying,
    LevelComplete,
    GameOver,
    Exiting,
}

impl GameState {
    /// Every state, in declaration order
    pub const ALL: [GameState; 10] = [
        GameState::Title,
        GameState::LoadingLevel,
        GameState::WaitingToStartLevel,
        GameState::Running,
        GameState::PlayerWarpingOut,
        GameState::PlayerWarpingIn,
        GameState::PlayerDying,
        GameState::LevelComplete,
        GameState::GameOver,
        GameState::Exiting,
    ];

    /// States where the player is on the board and moving
    pub fn is_playing(&self) -> bool {
        matches!(
            self,
            GameState::Running | GameState::PlayerWarpingOut | GameState::PlayerWarpingIn
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameState::Title => "title",
            GameState::LoadingLevel => "loading_level",
            GameState::WaitingToStartLevel => "waiting_to_start_level",
            GameState::Running => "running",
            GameState::PlayerWarpingOut => "player_warping_out",
            GameState::PlayerWarpingIn => "player_warping_in",
            GameState::PlayerDying => "player_dying",
            GameState::LevelComplete => "level_complete",
            GameState::GameOver => "game_over",
            GameState::Exiting => "exiting",
        }
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Movement intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Priority order used when several direction keys are held
    pub const PRIORITY: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit (row, col) offset
    pub fn offset(&self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Velocity along this direction with the given magnitude
    pub fn velocity(&self, speed: f64) -> (f64, f64) {
        let (dr, dc) = self.offset();
        (dc as f64 * speed, dr as f64 * speed)
    }
}

/// Discrete tile address
///
/// Signed so that positions outside the grid (warp tunnel) still map to a
/// coordinate; such coordinates simply never match a tile on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoord {
    pub row: i32,
    pub col: i32,
}

impl TileCoord {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The adjacent tile in a direction
    pub fn step(&self, direction: Direction) -> Self {
        let (dr, dc) = direction.offset();
        Self::new(self.row + dr, self.col + dc)
    }
}

impl std::fmt::Display for TileCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Continuous pixel position
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Integer screen-space rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn contains(&self, point: ScreenPoint) -> bool {
        point.x >= self.left() as f64
            && point.x < self.right() as f64
            && point.y >= self.top() as f64
            && point.y < self.bottom() as f64
    }
}

/// Per-channel color multiplier applied to maze tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorMod {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorMod {
    pub const IDENTITY: ColorMod = ColorMod::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Default for ColorMod {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Keys currently held down, sampled once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputSnapshot {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub cancel: bool,
}

impl InputSnapshot {
    pub fn is_held(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// The highest-priority held direction, if any
    pub fn direction(&self) -> Option<Direction> {
        Direction::PRIORITY.into_iter().find(|d| self.is_held(*d))
    }

    /// Builder-style helper for holding a direction
    pub fn with_direction(mut self, direction: Direction) -> Self {
        match direction {
            Direction::Up => self.up = true,
            Direction::Down => self.down = true,
            Direction::Left => self.left = true,
            Direction::Right => self.right = true,
        }
        self
    }
}
