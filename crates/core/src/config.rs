//! Gameplay tuning shared by the state machine and movement controller.

use crate::types::{
    Direction, FLASH_BLUE_MOD, FLASH_PERIOD_FRAMES, LEVEL_COMPLETE_DELAY_MS, LEVEL_LOAD_DELAY_MS,
    PLAYER_SPEED, PLAYER_SPRITE_HEIGHT, PLAYER_SPRITE_WIDTH, TICKS_PER_FRAME, WARP_ROW,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    /// Pixels per frame
    pub player_speed: f64,
    pub sprite_width: i32,
    pub sprite_height: i32,
    /// Facing and direction of travel when a level starts
    pub start_direction: Direction,
    /// Row holding both tunnel mouths
    pub warp_row: i32,
    pub start_delay_ms: u64,
    pub complete_delay_ms: u64,
    pub flash_period_frames: u16,
    pub flash_blue_mod: u8,
    pub frame_budget_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_speed: PLAYER_SPEED,
            sprite_width: PLAYER_SPRITE_WIDTH,
            sprite_height: PLAYER_SPRITE_HEIGHT,
            start_direction: Direction::Left,
            warp_row: WARP_ROW,
            start_delay_ms: LEVEL_LOAD_DELAY_MS,
            complete_delay_ms: LEVEL_COMPLETE_DELAY_MS,
            flash_period_frames: FLASH_PERIOD_FRAMES,
            flash_blue_mod: FLASH_BLUE_MOD,
            frame_budget_ms: TICKS_PER_FRAME,
        }
    }
}
