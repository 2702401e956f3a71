//! Terminal output: framebuffer flushing and the core [`Renderer`] sink.
//!
//! [`TerminalRenderer`] owns the raw-mode/alternate-screen lifecycle and writes
//! only the cells that changed since the previous frame. [`TerminalSink`]
//! plugs it into the game loop.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::core::{Frame, Renderer};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::game_view::{GameView, Viewport};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode().context("failed to disable raw mode")?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// Callers keep one `FrameBuffer` and pass it in every frame. The renderer
    /// diffs against the previous frame, then swaps buffers so the caller gets
    /// the old one back to draw into.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        let (mut prev, needs_full) = match self.last.take() {
            Some(prev) => {
                let resized = prev.width() != fb.width() || prev.height() != fb.height();
                (prev, resized)
            }
            None => (FrameBuffer::new(fb.width(), fb.height()), true),
        };

        if needs_full {
            self.buf.clear();
            encode_full_into(fb, &mut self.buf)?;
            self.flush_buf()?;
            prev.resize(fb.width(), fb.height());
        } else {
            self.buf.clear();
            encode_diff_into(&prev, fb, &mut self.buf)?;
            self.flush_buf()?;
        }

        // Swap current into prev so next frame can diff without cloning.
        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout
            .write_all(&self.buf)
            .and_then(|()| self.stdout.flush())
            .context("failed to write to terminal")
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Game loop renderer that draws each frame to the terminal.
///
/// The viewport follows the terminal size, queried on every frame.
pub struct TerminalSink {
    term: TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
}

impl TerminalSink {
    pub fn new(term: TerminalRenderer, view: GameView) -> Self {
        Self {
            term,
            view,
            fb: FrameBuffer::new(0, 0),
        }
    }

    pub fn terminal_mut(&mut self) -> &mut TerminalRenderer {
        &mut self.term
    }

    /// Force a full redraw on the next frame (after a resize).
    pub fn invalidate(&mut self) {
        self.term.invalidate();
    }
}

impl Renderer for TerminalSink {
    type Error = anyhow::Error;

    fn render(&mut self, frame: &Frame<'_>) -> Result<()> {
        let (w, h) = terminal::size().unwrap_or((80, 24));
        self.view.render_into(frame, Viewport::new(w, h), &mut self.fb);
        self.term.draw_swap(&mut self.fb)
    }
}

/// Queues cells into a byte buffer, emitting style changes only when the
/// style actually changes.
struct Painter<'a> {
    out: &'a mut Vec<u8>,
    style: Option<CellStyle>,
}

impl<'a> Painter<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, style: None }
    }

    fn paint(&mut self, cell: Cell) -> Result<()> {
        if self.style != Some(cell.style) {
            queue_style(self.out, cell.style)?;
            self.style = Some(cell.style);
        }
        self.out.queue(Print(cell.ch))?;
        Ok(())
    }

    fn finish(self) -> Result<()> {
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out` without touching stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let mut painter = Painter::new(out);
    for y in 0..fb.height() {
        if y > 0 {
            painter.out.queue(Print("\r\n"))?;
        }
        for x in 0..fb.width() {
            painter.paint(fb.get(x, y).unwrap_or_default())?;
        }
    }
    painter.finish()
}

/// Encode only the runs of cells that differ from `prev`.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut painter = Painter::new(out);
    for (x, y, len) in changed_runs(prev, next) {
        painter.out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            painter.paint(next.get(x + dx, y).unwrap_or_default())?;
        }
    }
    painter.finish()
}

fn queue_style(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(Rgb { r, g, b }: Rgb) -> Color {
    Color::Rgb { r, g, b }
}

/// Horizontal runs `(x, y, len)` of cells that differ between two frames.
///
/// Frames of different sizes yield every row as one run.
fn changed_runs(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<(u16, u16, u16)> {
    let (w, h) = (next.width(), next.height());
    if prev.width() != w || prev.height() != h {
        return (0..h).map(|y| (0, y, w)).collect();
    }

    let differs = |x: u16, y: u16| prev.get(x, y) != next.get(x, y);
    let mut runs = Vec::new();
    for y in 0..h {
        let mut x = 0;
        while x < w {
            if !differs(x, y) {
                x += 1;
                continue;
            }
            let start = x;
            while x < w && differs(x, y) {
                x += 1;
            }
            runs.push((start, y, x - start));
        }
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_encode_contains_every_glyph() {
        let mut fb = FrameBuffer::new(3, 2);
        let style = CellStyle::default();
        fb.put_str(0, 0, "ABC", style);
        fb.put_str(0, 1, "DEF", style);

        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains('A') && text.contains('F'));
    }

    #[test]
    fn unchanged_frame_encodes_no_glyphs() {
        let mut fb = FrameBuffer::new(3, 1);
        fb.put_str(0, 0, "XYZ", CellStyle::default());

        let mut out = Vec::new();
        encode_diff_into(&fb, &fb.clone(), &mut out).unwrap();
        assert!(!String::from_utf8_lossy(&out).contains('X'));
    }

    #[test]
    fn changed_runs_coalesce_adjacent_cells() {
        let style = CellStyle::default().bold();
        let a = FrameBuffer::new(6, 2);
        let mut b = FrameBuffer::new(6, 2);

        // Cells 1..=3 of row 0 and cell 5 of row 1 become blocks.
        for x in 1..=3 {
            b.set(x, 0, style.cell('█'));
        }
        b.set(5, 1, style.cell('█'));

        assert_eq!(changed_runs(&a, &b), vec![(1, 0, 3), (5, 1, 1)]);
    }

    #[test]
    fn resized_frame_is_fully_dirty() {
        let a = FrameBuffer::new(2, 1);
        let b = FrameBuffer::new(3, 2);
        assert_eq!(changed_runs(&a, &b), vec![(0, 0, 3), (0, 1, 3)]);
    }
}
