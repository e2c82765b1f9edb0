//! Read-only per-frame view handed to renderers.

use crate::maze::Maze;
use crate::player::Player;
use crate::types::{ColorMod, GameState, Rect, ScreenPoint};

/// Render-side state driven by the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderState {
    /// Clip region set when a level loads; `None` before the first load.
    pub clip: Option<Rect>,
    /// Color modulation applied to maze tiles
    pub tile_color: ColorMod,
}

impl RenderState {
    /// Check if a screen point lies inside the clip region.
    pub fn is_visible(&self, point: ScreenPoint) -> bool {
        self.clip.is_some_and(|clip| clip.contains(point))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub state: GameState,
    pub maze: Option<&'a Maze>,
    pub player: Option<&'a Player>,
    pub render: RenderState,
    pub pellets_eaten: u16,
    pub pellet_total: u16,
}

impl FrameView<'_> {
    /// Maze and player are present once a level has been loaded.
    pub fn is_loaded(&self) -> bool {
        self.maze.is_some() && self.player.is_some()
    }
}
