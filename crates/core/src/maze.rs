//! Maze - pellet and wall semantics layered over a [`TileGrid`]
//!
//! The grid owns the mutable tile indices; solidity comes from the level's
//! separate collision table and never from the tile index itself.

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::grid::TileGrid;
use crate::level::LevelData;
use crate::types::{tile, Direction, Rect, ScreenPoint, TileCoord, TILE_HEIGHT, TILE_WIDTH};

#[derive(Debug, Clone, PartialEq)]
pub struct Maze {
    grid: TileGrid,
    collision: Arc<[u8]>,
}

impl Maze {
    /// Build a fresh maze from level data using the standard tile size.
    pub fn new(level: &LevelData) -> CoreResult<Self> {
        Self::with_tile_size(level, TILE_WIDTH, TILE_HEIGHT)
    }

    pub fn with_tile_size(level: &LevelData, tile_w: i32, tile_h: i32) -> CoreResult<Self> {
        let grid = TileGrid::new(
            level.rows(),
            level.cols(),
            tile_w,
            tile_h,
            level.tiles().to_vec(),
        )?;
        Ok(Self {
            grid,
            collision: level.collision(),
        })
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn rows(&self) -> u16 {
        self.grid.rows()
    }

    pub fn cols(&self) -> u16 {
        self.grid.cols()
    }

    pub fn tile_index_at(&self, coord: TileCoord) -> Option<u16> {
        self.grid.tile_index_at(coord)
    }

    pub fn set_tile_index_at(&mut self, coord: TileCoord, value: u16) -> CoreResult<()> {
        self.grid.set_tile_index_at(coord, value)
    }

    /// True iff the tile holds one of the two pellet markers.
    pub fn is_pellet(&self, coord: TileCoord) -> bool {
        self.grid.tile_index_at(coord).is_some_and(tile::is_pellet)
    }

    /// Mark a pellet as eaten. The tile must currently be a pellet.
    pub fn eat_pellet(&mut self, coord: TileCoord) -> CoreResult<()> {
        if !self.is_pellet(coord) {
            return Err(CoreError::NotAPellet { coord });
        }
        self.grid.set_tile_index_at(coord, tile::EATEN)
    }

    /// Solidity from the collision table. Off-grid tiles are open (tunnel).
    pub fn is_solid(&self, coord: TileCoord) -> bool {
        self.grid
            .index(coord)
            .is_some_and(|i| self.collision[i] == 1)
    }

    pub fn neighbor(&self, coord: TileCoord, direction: Direction) -> Option<TileCoord> {
        self.grid.neighbor(coord, direction)
    }

    pub fn to_screen(&self, coord: TileCoord) -> ScreenPoint {
        self.grid.to_screen(coord)
    }

    pub fn to_tile(&self, point: ScreenPoint) -> TileCoord {
        self.grid.to_tile(point)
    }

    pub fn map_bounds(&self) -> Rect {
        self.grid.map_bounds()
    }

    /// Pellets still on the board
    pub fn pellets_remaining(&self) -> usize {
        self.grid
            .tiles()
            .iter()
            .filter(|&&t| tile::is_pellet(t))
            .count()
    }
}
