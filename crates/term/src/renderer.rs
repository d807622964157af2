//! TerminalRenderer: owns the raw-mode terminal and flushes framebuffers.
//!
//! Frames are encoded into a byte buffer with queued crossterm commands and
//! written in one go. After the first frame only changed runs are sent.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{FrameBuffer, Glyph, Style};
use crate::types::Rgb;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    prev: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            prev: None,
            buf: Vec::with_capacity(32 * 1024),
        }
    }

    /// Switch to raw mode and the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush()
    }

    /// Restore the terminal. Safe to call after a failed `enter`.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Forget the previous frame so the next draw repaints everything.
    pub fn invalidate(&mut self) {
        self.prev = None;
    }

    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        encode_frame(self.prev.as_ref(), fb, &mut self.buf)?;
        self.flush()?;

        match &mut self.prev {
            Some(prev) => prev.clone_from(fb),
            None => self.prev = Some(fb.clone()),
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode `next` into `out`.
///
/// With a same-sized `prev`, only runs of glyphs that differ are emitted;
/// otherwise the screen is cleared and fully repainted.
pub fn encode_frame(prev: Option<&FrameBuffer>, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let prev = prev.filter(|p| p.width() == next.width() && p.height() == next.height());
    if prev.is_none() {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    let mut style: Option<Style> = None;
    for y in 0..next.height() {
        for_each_changed_run(prev, next, y, |x, len| {
            out.queue(cursor::MoveTo(x, y))?;
            for dx in 0..len {
                let glyph = next.get(x + dx, y).unwrap_or_default();
                if style != Some(glyph.style) {
                    queue_style(out, glyph.style)?;
                    style = Some(glyph.style);
                }
                out.queue(Print(glyph.ch))?;
            }
            Ok(())
        })?;
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Call `emit(x, len)` for each run on row `y` that differs from `prev`, or
/// once for the whole row when there is no previous frame. Runs are walked
/// in place so a steady-state frame allocates nothing.
fn for_each_changed_run<F>(prev: Option<&FrameBuffer>, next: &FrameBuffer, y: u16, mut emit: F) -> Result<()>
where
    F: FnMut(u16, u16) -> Result<()>,
{
    let Some(prev) = prev else {
        return emit(0, next.width());
    };

    let differs = |x: u16| -> bool {
        let a: Glyph = prev.get(x, y).unwrap_or_default();
        let b: Glyph = next.get(x, y).unwrap_or_default();
        a != b
    };

    let mut x = 0;
    while x < next.width() {
        if !differs(x) {
            x += 1;
            continue;
        }
        let start = x;
        while x < next.width() && differs(x) {
            x += 1;
        }
        emit(start, x - start)?;
    }
    Ok(())
}

fn queue_style(out: &mut Vec<u8>, style: Style) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(color(style.fg)))?;
    out.queue(SetBackgroundColor(color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
