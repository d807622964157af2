//! GameView: draws a [`GameSnapshot`] into a framebuffer.
//!
//! Pure, no I/O. The layout is the well, a side panel with the numbers and
//! the preview, and a centered banner for every phase except `Playing`.

use crate::core::GameSnapshot;
use crate::fb::{FrameBuffer, Style};
use crate::types::{Phase, PieceKind, Rgb, BOARD_HEIGHT, BOARD_WIDTH};

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const BLACK: Rgb = Rgb::new(0, 0, 0);

/// Terminal size in columns and rows.
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

#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Terminal columns per board cell; 2 keeps cells roughly square.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Well size including its border.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            u16::from(BOARD_WIDTH) * self.cell_w + 2,
            u16::from(BOARD_HEIGHT) + 2,
        )
    }

    /// Render into a reused framebuffer, resizing it to `viewport`.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let (frame_w, frame_h) = self.frame_size();
        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_well(fb, snap, origin_x, origin_y);
        self.draw_panel(fb, snap, origin_x + frame_w + 2, origin_y);

        match snap.phase {
            Phase::Menu => {
                self.draw_banner(fb, origin_x, origin_y, &["BLOCKFALL", "ENTER to start"]);
            }
            Phase::Paused => {
                let lines = ["PAUSED", "P to resume", "ENTER to restart"];
                self.draw_banner(fb, origin_x, origin_y, &lines);
            }
            Phase::GameOver => self.draw_game_over(fb, snap, origin_x, origin_y),
            Phase::Playing => {}
        }
    }

    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_well(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x0: u16, y0: u16) {
        let (frame_w, frame_h) = self.frame_size();
        let border = Style::new(Rgb::new(200, 200, 200), BLACK);

        fb.put(x0, y0, '┌', border);
        fb.put(x0 + frame_w - 1, y0, '┐', border);
        fb.put(x0, y0 + frame_h - 1, '└', border);
        fb.put(x0 + frame_w - 1, y0 + frame_h - 1, '┘', border);
        for dx in 1..frame_w - 1 {
            fb.put(x0 + dx, y0, '─', border);
            fb.put(x0 + dx, y0 + frame_h - 1, '─', border);
        }
        for dy in 1..frame_h - 1 {
            fb.put(x0, y0 + dy, '│', border);
            fb.put(x0 + frame_w - 1, y0 + dy, '│', border);
        }

        let empty = Style::new(Rgb::new(90, 90, 100), WELL_BG).dim();
        for (row, cells) in (0u16..).zip(snap.board.iter()) {
            for (col, cell) in (0u16..).zip(cells.iter()) {
                match cell {
                    Some(kind) => self.draw_block(fb, x0, y0, col, row, *kind),
                    None => self.fill_cell(fb, x0, y0, col, row, '·', empty),
                }
            }
        }

        if let Some(ghost) = snap.ghost {
            let style = Style::new(Rgb::new(140, 140, 140), WELL_BG).dim();
            for (col, row) in ghost.visible_cells() {
                self.fill_cell(fb, x0, y0, col.into(), row.into(), '░', style);
            }
        }

        if let Some(active) = snap.active {
            for (col, row) in active.visible_cells() {
                self.draw_block(fb, x0, y0, col.into(), row.into(), active.kind);
            }
        }
    }

    fn draw_block(&self, fb: &mut FrameBuffer, x0: u16, y0: u16, col: u16, row: u16, kind: PieceKind) {
        let style = Style::new(kind.color(), WELL_BG).bold();
        self.fill_cell(fb, x0, y0, col, row, '█', style);
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, x0: u16, y0: u16, col: u16, row: u16, ch: char, style: Style) {
        let x = x0 + 1 + col * self.cell_w;
        let y = y0 + 1 + row;
        fb.fill_rect(x, y, self.cell_w, 1, ch, style);
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y0: u16) {
        if x >= fb.width() {
            return;
        }
        let label = Style::default().bold();
        let value = Style::new(Rgb::new(200, 200, 200), BLACK);

        let mut y = y0;
        for (name, number) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
            ("HIGH", snap.high_score),
        ] {
            fb.put_str(x, y, name, label);
            fb.put_u32(x, y + 1, number, value);
            y += 3;
        }

        fb.put_str(x, y, "NEXT", label);
        y += 1;
        if let Some(next) = snap.next {
            let style = Style::new(next.kind.color(), BLACK).bold();
            for (col, row) in next.shape.filled() {
                let px = x + (col as u16) * self.cell_w;
                fb.fill_rect(px, y + row as u16, self.cell_w, 1, '█', style);
            }
        }
    }

    /// Game over banner with the final level and lines, plus a badge when
    /// the session set a new high score. The blank line holds the stats.
    fn draw_game_over(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x0: u16, y0: u16) {
        let lines: &[&str] = if snap.new_record {
            &["GAME OVER", "NEW HIGH SCORE!", "", "ENTER to restart", "M for menu"]
        } else {
            &["GAME OVER", "", "ENTER to restart", "M for menu"]
        };
        let top = self.draw_banner(fb, x0, y0, lines);
        let stats_y = top + lines.len() as u16 - 3;

        let (frame_w, _) = self.frame_size();
        let style = Style::new(Rgb::new(200, 200, 200), BLACK);
        let width = "LV ".len() + digits(snap.level) + "  LINES ".len() + digits(snap.lines);
        let mut x = x0 + frame_w.saturating_sub(width as u16) / 2;
        fb.put_str(x, stats_y, "LV ", style);
        x += 3;
        x += fb.put_u32(x, stats_y, snap.level, style);
        fb.put_str(x, stats_y, "  LINES ", style);
        x += 8;
        fb.put_u32(x, stats_y, snap.lines, style);
    }

    /// Center `lines` over the well. Returns the first banner row.
    fn draw_banner(&self, fb: &mut FrameBuffer, x0: u16, y0: u16, lines: &[&str]) -> u16 {
        let (frame_w, frame_h) = self.frame_size();
        let style = Style::new(Rgb::new(255, 255, 255), BLACK).bold();
        let top = y0 + frame_h / 2 - (lines.len() as u16) / 2;

        for (dy, text) in (0u16..).zip(lines) {
            let w = text.chars().count() as u16;
            let x = x0 + frame_w.saturating_sub(w) / 2;
            fb.put_str(x, top + dy, text, style);
        }
        top
    }
}

fn digits(mut n: u32) -> usize {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}
