//! GameView: maps a [`FrameView`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! One maze tile becomes `cell_w x cell_h` terminal cells; 2x1 by default to
//! compensate for the usual glyph aspect ratio.

use crate::core::{FrameView, Maze, Player, RenderState};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{tile, ColorMod, Direction, GameState};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const WALL: Rgb = Rgb::new(33, 33, 222);
const DOOR: Rgb = Rgb::new(255, 184, 222);
const PELLET: Rgb = Rgb::new(255, 184, 151);
const PLAYER: Rgb = Rgb::new(255, 255, 0);
const TEXT: Rgb = Rgb::new(220, 220, 220);

const PANEL_MIN_WIDTH: u16 = 12;

/// A lightweight terminal renderer for the maze game.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render one frame into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when
    /// the terminal size changes.
    pub fn render_into(&self, view: &FrameView<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (Some(maze), Some(player)) = (view.maze, view.player) else {
            self.draw_banner(fb, viewport, "PAC-MAN");
            return;
        };

        let map_w = maze.cols() * self.cell_w;
        let map_h = maze.rows() * self.cell_h;
        let start_x = viewport.width.saturating_sub(map_w) / 2;
        let start_y = viewport.height.saturating_sub(map_h) / 2;

        self.draw_maze(fb, maze, view.render.tile_color, start_x, start_y);
        self.draw_player(fb, maze, player, view.render, start_x, start_y);
        self.draw_side_panel(fb, view, viewport, start_x + map_w, start_y);

        let overlay = match view.state {
            GameState::WaitingToStartLevel => Some("READY!"),
            GameState::LevelComplete => Some("LEVEL CLEAR"),
            _ => None,
        };
        if let Some(text) = overlay {
            self.draw_overlay_text(fb, start_x, start_y, map_w, map_h, text);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, view: &FrameView<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(view, viewport, &mut fb);
        fb
    }

    fn draw_maze(
        &self,
        fb: &mut FrameBuffer,
        maze: &Maze,
        tint: ColorMod,
        start_x: u16,
        start_y: u16,
    ) {
        for (coord, index) in maze.grid().iter() {
            let (ch, style) = match index {
                tile::WALL => ('█', CellStyle::fg(WALL.modulate(tint))),
                tile::DOOR => ('─', CellStyle::fg(DOOR.modulate(tint))),
                tile::PELLET => ('·', CellStyle::fg(PELLET)),
                tile::POWER_PELLET => ('●', CellStyle::fg(PELLET).bold()),
                _ => continue,
            };
            self.fill_tile(fb, start_x, start_y, coord.col as u16, coord.row as u16, ch, style);
        }
    }

    fn draw_player(
        &self,
        fb: &mut FrameBuffer,
        maze: &Maze,
        player: &Player,
        render: RenderState,
        start_x: u16,
        start_y: u16,
    ) {
        // Inside the tunnel the sprite leaves the clip region and disappears.
        if !render.is_visible(player.position()) {
            return;
        }
        let coord = maze.to_tile(player.position());
        if !maze.grid().contains(coord) {
            return;
        }

        let style = CellStyle::fg(PLAYER).bold();
        let glyph = player_glyph(player.facing());
        let px = start_x + coord.col as u16 * self.cell_w;
        let py = start_y + coord.row as u16 * self.cell_h;
        for dy in 0..self.cell_h {
            for dx in 0..self.cell_w {
                let ch = glyph[(dx as usize).min(1)];
                fb.put_char(px + dx, py + dy, ch, style);
            }
        }
    }

    fn fill_tile(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        col: u16,
        row: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + col * self.cell_w;
        let py = start_y + row * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        view: &FrameView<'_>,
        viewport: Viewport,
        map_right: u16,
        start_y: u16,
    ) {
        let panel_x = map_right.saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < PANEL_MIN_WIDTH {
            return;
        }

        let label = CellStyle::fg(TEXT).bold();
        let value = CellStyle::fg(Rgb::new(200, 200, 200));

        let mut y = start_y;
        fb.put_str(panel_x, y, "PELLETS", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, view.pellets_eaten as u32, value);
        let total_x = panel_x + digits(view.pellets_eaten as u32);
        fb.put_char(total_x, y, '/', value);
        fb.put_u32(total_x + 1, y, view.pellet_total as u32, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "STATE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, view.state.as_str(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "KEYS", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "arrows/wasd", value);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "esc/q quit", value);
    }

    fn draw_banner(&self, fb: &mut FrameBuffer, viewport: Viewport, text: &str) {
        self.draw_overlay_text(fb, 0, 0, viewport.width, viewport.height, text);
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        fb.put_str(x, mid_y, text, CellStyle::fg(PLAYER).bold());
    }
}

/// Two-cell sprite; the mouth opens toward the direction of travel.
fn player_glyph(facing: Direction) -> [char; 2] {
    match facing {
        Direction::Up => ['\\', '/'],
        Direction::Down => ['/', '\\'],
        Direction::Left => ['>', ')'],
        Direction::Right => ['(', '<'],
    }
}

fn digits(mut n: u32) -> u16 {
    let mut len = 1;
    while n >= 10 {
        n /= 10;
        len += 1;
    }
    len
}
