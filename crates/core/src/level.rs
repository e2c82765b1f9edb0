//! Level data - the two parallel tables a maze is built from
//!
//! A level is a row-major tile-index table (what to draw, where the pellets
//! are) plus a binary collision table of the same shape (1 = solid,
//! 0 = free). Keeping the two in sync is the level author's job; the
//! core only checks that the shapes agree.
//!
//! Levels are usually authored as ASCII art:
//!
//! | Char | Tile | Solid |
//! |------|------|-------|
//! | `#` | wall | yes |
//! | `-` | ghost-house door | yes |
//! | `~` | void outside the playfield | yes |
//! | `.` | pellet | no |
//! | `o` | power pellet | no |
//! | ` ` | open floor | no |
//! | `P` | player start (open floor) | no |

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::types::{tile, TileCoord, MAP_COLS, MAP_ROWS, PLAYER_START_COL, PLAYER_START_ROW};

/// The arcade maze. The warp tunnel runs through row 14.
pub const CLASSIC_LAYOUT: [&str; MAP_ROWS as usize] = [
    "############################",
    "#............##............#",
    "#.####.#####.##.#####.####.#",
    "#o####.#####.##.#####.####o#",
    "#.####.#####.##.#####.####.#",
    "#..........................#",
    "#.####.##.########.##.####.#",
    "#.####.##.########.##.####.#",
    "#......##....##....##......#",
    "######.##### ## #####.######",
    "~~~~~#.##### ## #####.#~~~~~",
    "~~~~~#.##    --    ##.#~~~~~",
    "~~~~~#.## ######## ##.#~~~~~",
    "######.## ######## ##.######",
    "      .   ########   .      ",
    "######.## ######## ##.######",
    "~~~~~#.## ######## ##.#~~~~~",
    "~~~~~#.##          ##.#~~~~~",
    "~~~~~#.## ######## ##.#~~~~~",
    "######.## ######## ##.######",
    "#............##............#",
    "#.####.#####.##.#####.####.#",
    "#.####.#####.##.#####.####.#",
    "#o..##.......P .......##..o#",
    "###.##.##.########.##.##.###",
    "###.##.##.########.##.##.###",
    "#......##....##....##......#",
    "#.##########.##.##########.#",
    "#.##########.##.##########.#",
    "#..........................#",
    "############################",
];

/// Externally supplied level tables, validated for shape.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelData {
    rows: u16,
    cols: u16,
    tiles: Vec<u16>,
    collision: Arc<[u8]>,
    start: TileCoord,
    pellet_total: u16,
}

impl LevelData {
    /// Build a level from raw tables.
    pub fn from_tables(
        rows: u16,
        cols: u16,
        tiles: Vec<u16>,
        collision: Vec<u8>,
        start: TileCoord,
    ) -> CoreResult<Self> {
        let expected = rows as usize * cols as usize;
        if tiles.len() != expected || collision.len() != expected {
            return Err(CoreError::LevelShape {
                rows,
                cols,
                tiles: tiles.len(),
                collision: collision.len(),
            });
        }
        if let Some((index, &value)) = collision.iter().enumerate().find(|(_, v)| **v > 1) {
            return Err(CoreError::InvalidCollision { index, value });
        }
        if start.row < 0 || start.col < 0 || start.row >= rows as i32 || start.col >= cols as i32 {
            return Err(CoreError::OutOfBounds { coord: start });
        }

        let count = tiles.iter().filter(|&&t| tile::is_pellet(t)).count();
        let pellet_total =
            u16::try_from(count).map_err(|_| CoreError::TooManyPellets { count })?;

        Ok(Self {
            rows,
            cols,
            tiles,
            collision: collision.into(),
            start,
            pellet_total,
        })
    }

    /// Parse an ASCII-art level. Exactly one `P` marks the player start.
    pub fn from_ascii(layout: &[&str]) -> CoreResult<Self> {
        let rows = layout.len() as u16;
        let cols = layout.first().map(|r| r.chars().count()).unwrap_or(0) as u16;

        let mut tiles = Vec::with_capacity(rows as usize * cols as usize);
        let mut collision = Vec::with_capacity(rows as usize * cols as usize);
        let mut start = None;

        for (r, line) in layout.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                let (index, solid) = match ch {
                    '#' => (tile::WALL, 1),
                    '-' => (tile::DOOR, 1),
                    '~' => (tile::VOID, 1),
                    '.' => (tile::PELLET, 0),
                    'o' => (tile::POWER_PELLET, 0),
                    'P' => {
                        let here = TileCoord::new(r as i32, c as i32);
                        if let Some(first) = start {
                            return Err(CoreError::DuplicateStart {
                                first,
                                second: here,
                            });
                        }
                        start = Some(here);
                        (tile::OPEN, 0)
                    }
                    _ => (tile::OPEN, 0),
                };
                tiles.push(index);
                collision.push(solid);
            }
        }

        let start = start.ok_or(CoreError::MissingStart)?;
        Self::from_tables(rows, cols, tiles, collision, start)
    }

    /// The arcade maze: 31x28 tiles, 244 pellets.
    pub fn classic() -> CoreResult<Self> {
        Self::from_ascii(&CLASSIC_LAYOUT)
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn tiles(&self) -> &[u16] {
        &self.tiles
    }

    /// Shared handle on the immutable collision table
    pub fn collision(&self) -> Arc<[u8]> {
        Arc::clone(&self.collision)
    }

    pub fn start(&self) -> TileCoord {
        self.start
    }

    /// Number of pellet tiles when the level is fresh
    pub fn pellet_total(&self) -> u16 {
        self.pellet_total
    }
}
