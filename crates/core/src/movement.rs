//! Movement controller - lane-locked player movement
//!
//! The player's continuous position and the maze's discrete tiles are kept
//! consistent by three rules:
//!
//! - **Lookahead**: a turn is validated against the single tile adjacent to
//!   the player's current tile, nothing further.
//! - **Centerline snap**: an accepted turn places the player exactly on the
//!   center of that adjacent tile, dropping any sub-tile offset.
//! - **Edge collision**: after moving, solidity is sampled at the sprite's
//!   leading edge, not its center, and any hit is a hard stop.
//!
//! Inside the warp tunnel none of this applies; motion is ballistic and only
//! screen-space bounds matter.

use tracing::trace;

use crate::config::GameConfig;
use crate::error::CoreResult;
use crate::maze::Maze;
use crate::player::Player;
use crate::types::{Direction, ScreenPoint, TileCoord};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementController {
    speed: f64,
    sprite_width: i32,
    sprite_height: i32,
    warp_row: i32,
}

impl MovementController {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            speed: config.player_speed,
            sprite_width: config.sprite_width,
            sprite_height: config.sprite_height,
            warp_row: config.warp_row,
        }
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Tile currently under the player's position
    pub fn player_tile(&self, maze: &Maze, player: &Player) -> TileCoord {
        maze.to_tile(player.position())
    }

    /// Check if the tile adjacent to `from` in `direction` is open
    pub fn can_move(&self, maze: &Maze, from: TileCoord, direction: Direction) -> bool {
        maze.neighbor(from, direction)
            .is_some_and(|target| !maze.is_solid(target))
    }

    /// Try to turn the player toward `direction`.
    ///
    /// Rejected when the adjacent tile is solid or the player already faces
    /// that way. On acceptance the player is snapped onto the adjacent tile's
    /// centerline and given a fixed-speed velocity along `direction`.
    pub fn try_turn(&self, maze: &Maze, player: &mut Player, direction: Direction) -> bool {
        if player.facing() == direction {
            return false;
        }

        let from = self.player_tile(maze, player);
        if !self.can_move(maze, from, direction) {
            return false;
        }

        let target = from.step(direction);
        let (dx, dy) = direction.velocity(self.speed);
        player.set_facing(direction);
        player.reset_position(maze.to_screen(target));
        player.set_velocity(dx, dy);
        trace!(?direction, %from, %target, "turn accepted");
        true
    }

    /// Eat the pellet under the player's exact position, if any.
    ///
    /// Returns the number of pellets eaten this call (0 or 1).
    pub fn eat_pellet(&self, maze: &mut Maze, player: &Player) -> CoreResult<u16> {
        let coord = self.player_tile(maze, player);
        if !maze.is_pellet(coord) {
            return Ok(0);
        }
        maze.eat_pellet(coord)?;
        Ok(1)
    }

    /// Leading-edge sample point along the axis of travel.
    ///
    /// The sprite is wider than a tile, so its visible edge sits
    /// `sprite/2 - tile/2` pixels ahead of its center. A sprite no wider
    /// than a tile samples at its center.
    pub fn leading_edge(&self, maze: &Maze, player: &Player) -> Option<ScreenPoint> {
        let (tile_w, tile_h) = maze.grid().tile_size();
        let mut point = player.position();

        if player.dx() != 0.0 {
            let reach = (self.sprite_width / 2 - tile_w / 2).max(0) as f64;
            point.x += reach.copysign(player.dx());
        } else if player.dy() != 0.0 {
            let reach = (self.sprite_height / 2 - tile_h / 2).max(0) as f64;
            point.y += reach.copysign(player.dy());
        } else {
            return None;
        }
        Some(point)
    }

    /// Stop the player dead if its leading edge entered a solid tile.
    ///
    /// Returns true when the player was stopped.
    pub fn bounds_check(&self, maze: &Maze, player: &mut Player) -> bool {
        let Some(edge) = self.leading_edge(maze, player) else {
            return false;
        };
        let coord = maze.to_tile(edge);
        if maze.is_solid(coord) {
            player.stop();
            trace!(%coord, "wall hit");
            return true;
        }
        false
    }

    /// Player stands on either tunnel mouth.
    pub fn is_warping_out(&self, maze: &Maze, player: &Player) -> bool {
        let tile = self.player_tile(maze, player);
        let last = maze.cols() as i32 - 1;
        tile.row == self.warp_row && (tile.col == 0 || tile.col == last)
    }

    /// Player has come one column back inside the maze from the tunnel.
    pub fn has_warped_in(&self, maze: &Maze, player: &Player) -> bool {
        let tile = self.player_tile(maze, player);
        let last = maze.cols() as i32 - 1;
        tile.row == self.warp_row && (tile.col == 1 || tile.col == last - 1)
    }

    /// Move the player to the opposite edge once it is fully off screen.
    ///
    /// Velocity is untouched. Returns true when the player was moved.
    pub fn wrap_around(&self, maze: &Maze, player: &mut Player) -> bool {
        let bounds = maze.map_bounds();
        let half = (self.sprite_width / 2) as f64;
        let left = bounds.left() as f64 - half;
        let right = bounds.right() as f64 + half;

        if player.x() > right {
            player.reset_position(ScreenPoint::new(left, player.y()));
            true
        } else if player.x() < left {
            player.reset_position(ScreenPoint::new(right, player.y()));
            true
        } else {
            false
        }
    }
}

impl Default for MovementController {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}
