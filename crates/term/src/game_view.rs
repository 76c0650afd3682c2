//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{FrameBuffer, Style};
use crate::types::{Color, GameStatus, BOARD_HEIGHT, BOARD_WIDTH};

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

const WELL_BG: Color = Color::new(26, 26, 26);
const SCREEN_BG: Color = Color::new(0, 0, 0);

/// Panel needs at least this many columns to be drawn at all.
const MIN_PANEL_WIDTH: u16 = 12;

pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    help: &'static [(&'static str, &'static str)],
}

impl Default for GameView {
    fn default() -> Self {
        // 2 columns per cell roughly squares typical terminal glyphs.
        Self {
            cell_w: 2,
            help: &[],
        }
    }
}

impl GameView {
    /// Key legend shown under the stats.
    pub fn with_help(mut self, help: &'static [(&'static str, &'static str)]) -> Self {
        self.help = help;
        self
    }

    /// Outer size of the bordered board.
    pub fn frame_size(&self) -> (u16, u16) {
        (BOARD_WIDTH as u16 * self.cell_w + 2, BOARD_HEIGHT as u16 + 2)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height);

        let (frame_w, frame_h) = self.frame_size();
        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h) / 2;

        draw_border(fb, origin_x, origin_y, frame_w, frame_h);

        let empty = Style::new(Color::new(60, 60, 60), WELL_BG);
        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let px = origin_x + 1 + x as u16 * self.cell_w;
                let py = origin_y + 1 + y as u16;
                match cell {
                    Some(kind) => {
                        let style = Style::new(kind.color(), WELL_BG).bold();
                        fb.fill(px, py, self.cell_w, 1, '█', style);
                    }
                    None => {
                        fb.fill(px, py, self.cell_w, 1, ' ', empty);
                        fb.put(px, py, '·', empty);
                    }
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, origin_x + frame_w + 2, origin_y);

        match snap.status {
            GameStatus::Paused => {
                draw_banner(fb, origin_x, origin_y, frame_w, frame_h, &["PAUSED"]);
            }
            GameStatus::GameOver => {
                draw_banner(
                    fb,
                    origin_x,
                    origin_y,
                    frame_w,
                    frame_h,
                    &["GAME OVER", "r: play again"],
                );
            }
            GameStatus::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        top: u16,
    ) {
        if panel_x.saturating_add(MIN_PANEL_WIDTH) > viewport.width {
            return;
        }

        let label = Style::new(Color::new(192, 132, 252), SCREEN_BG).bold();
        let value = Style::default().bold();
        let dim = Style::new(Color::new(140, 140, 140), SCREEN_BG);

        let mut y = top;
        for (name, number) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_str(panel_x, y + 1, &number.to_string(), value);
            y += 3;
        }

        for (key, what) in self.help {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, key, value);
            fb.put_str(panel_x + 6, y, what, dim);
            y += 1;
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    let style = Style::new(Color::new(200, 200, 200), SCREEN_BG);
    let right = x + w - 1;
    let bottom = y + h - 1;

    fb.put(x, y, '┌', style);
    fb.put(right, y, '┐', style);
    fb.put(x, bottom, '└', style);
    fb.put(right, bottom, '┘', style);
    for cx in x + 1..right {
        fb.put(cx, y, '─', style);
        fb.put(cx, bottom, '─', style);
    }
    for cy in y + 1..bottom {
        fb.put(x, cy, '│', style);
        fb.put(right, cy, '│', style);
    }
}

/// Centered lines over the board, one below the other.
fn draw_banner(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, lines: &[&str]) {
    let style = Style::new(Color::new(255, 255, 255), SCREEN_BG).bold();
    let first = y + h / 2 - lines.len() as u16 / 2;
    for (i, text) in lines.iter().enumerate() {
        let text_w = text.chars().count() as u16;
        let tx = x + w.saturating_sub(text_w) / 2;
        fb.put_str(tx, first + i as u16, text, style);
    }
}
