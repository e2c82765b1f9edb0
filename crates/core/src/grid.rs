//! Grid module - generic tiled map storage
//!
//! A rows x cols grid where each cell holds a tile index.
//! Uses a flat array, row-major order (row * cols + col).
//! Screen coordinates: each tile spans `tile_w` x `tile_h` pixels starting at
//! `origin`; a tile's canonical position is its center.

use crate::error::{CoreError, CoreResult};
use crate::types::{Direction, Rect, ScreenPoint, TileCoord};

/// Indexed tile storage with screen-space transforms
#[derive(Debug, Clone, PartialEq)]
pub struct TileGrid {
    rows: u16,
    cols: u16,
    tile_w: i32,
    tile_h: i32,
    origin_x: i32,
    origin_y: i32,
    /// Flat array of tile indices, row-major order
    tiles: Vec<u16>,
}

impl TileGrid {
    /// Create a grid from row-major tile indices. Tiles must be at least one
    /// pixel on each side.
    pub fn new(rows: u16, cols: u16, tile_w: i32, tile_h: i32, tiles: Vec<u16>) -> CoreResult<Self> {
        if tile_w <= 0 || tile_h <= 0 {
            return Err(CoreError::TileSize { tile_w, tile_h });
        }
        let expected = rows as usize * cols as usize;
        if tiles.len() != expected {
            return Err(CoreError::GridShape {
                rows,
                cols,
                len: tiles.len(),
            });
        }
        Ok(Self {
            rows,
            cols,
            tile_w,
            tile_h,
            origin_x: 0,
            origin_y: 0,
            tiles,
        })
    }

    /// Offset the whole grid in screen space.
    pub fn with_origin(mut self, x: i32, y: i32) -> Self {
        self.origin_x = x;
        self.origin_y = y;
        self
    }

    /// Calculate flat index from a tile coordinate
    #[inline(always)]
    pub fn index(&self, coord: TileCoord) -> Option<usize> {
        if !self.contains(coord) {
            return None;
        }
        Some(coord.row as usize * self.cols as usize + coord.col as usize)
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn tile_size(&self) -> (i32, i32) {
        (self.tile_w, self.tile_h)
    }

    pub fn contains(&self, coord: TileCoord) -> bool {
        coord.row >= 0
            && coord.col >= 0
            && coord.row < self.rows as i32
            && coord.col < self.cols as i32
    }

    /// Get the tile index at a coordinate
    /// Returns None if out of bounds
    pub fn tile_index_at(&self, coord: TileCoord) -> Option<u16> {
        self.index(coord).map(|i| self.tiles[i])
    }

    pub fn set_tile_index_at(&mut self, coord: TileCoord, value: u16) -> CoreResult<()> {
        match self.index(coord) {
            Some(i) => {
                self.tiles[i] = value;
                Ok(())
            }
            None => Err(CoreError::OutOfBounds { coord }),
        }
    }

    /// The adjacent tile in a direction, if it lies on the grid
    pub fn neighbor(&self, coord: TileCoord, direction: Direction) -> Option<TileCoord> {
        let next = coord.step(direction);
        self.contains(next).then_some(next)
    }

    /// Canonical (center) screen position of a tile.
    pub fn to_screen(&self, coord: TileCoord) -> ScreenPoint {
        ScreenPoint::new(
            (self.origin_x + coord.col * self.tile_w + self.tile_w / 2) as f64,
            (self.origin_y + coord.row * self.tile_h + self.tile_h / 2) as f64,
        )
    }

    /// Tile containing a screen position.
    ///
    /// Positions are floored to whole pixels, then divided by the tile
    /// size. Points outside the grid map to coordinates outside the grid.
    pub fn to_tile(&self, point: ScreenPoint) -> TileCoord {
        let px = point.x.floor() as i32 - self.origin_x;
        let py = point.y.floor() as i32 - self.origin_y;
        TileCoord::new(py.div_euclid(self.tile_h), px.div_euclid(self.tile_w))
    }

    /// Screen-space rectangle covered by the grid
    pub fn map_bounds(&self) -> Rect {
        Rect::new(
            self.origin_x,
            self.origin_y,
            self.cols as i32 * self.tile_w,
            self.rows as i32 * self.tile_h,
        )
    }

    /// Get a reference to the internal tile array
    pub fn tiles(&self) -> &[u16] {
        &self.tiles
    }

    /// Iterate `(coord, index)` pairs in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (TileCoord, u16)> + '_ {
        let cols = self.cols as usize;
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, &t)| (TileCoord::new((i / cols) as i32, (i % cols) as i32), t))
    }
}
