//! GameView: maps a core [`Frame`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Frame, Piece};
use crate::fb::{block_color, CellStyle, FrameBuffer, Rgb, SCREEN_BG, WELL_BG};
use crate::types::GameStatus;

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

/// Board position and size on screen, border included
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub start_x: u16,
    pub start_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
}

/// A lightweight terminal renderer for the playfield and its side panel.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
const EMPTY_CELL: CellStyle = CellStyle::new(Rgb::new(90, 90, 100), WELL_BG).dim();
const OVERLAY: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Where the bordered board goes for a grid of `cols` x `rows`.
    ///
    /// Centered horizontally with room for the side panel on the right.
    pub fn layout(&self, cols: usize, rows: usize, viewport: Viewport) -> Layout {
        let frame_w = (cols as u16).saturating_mul(self.cell_w).saturating_add(2);
        let frame_h = (rows as u16).saturating_mul(self.cell_h).saturating_add(2);
        Layout {
            start_x: viewport.width.saturating_sub(frame_w) / 2,
            start_y: viewport.height.saturating_sub(frame_h) / 2,
            frame_w,
            frame_h,
        }
    }

    /// Render a frame into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport and cleared first.
    pub fn render_into(&self, frame: &Frame<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (cols, rows) = (frame.grid.cols(), frame.grid.rows());
        let layout = self.layout(cols, rows, viewport);

        self.draw_border(fb, layout);

        // Locked cells with the active piece on top.
        for y in 0..rows as u16 {
            for x in 0..cols as u16 {
                match block_color(frame.visible_cell(x as i32, y as i32)) {
                    Some(fg) => self.draw_block(fb, layout, x, y, fg),
                    None => self.fill_cell_rect(fb, layout, x, y, '·', EMPTY_CELL),
                }
            }
        }

        self.draw_side_panel(fb, frame, viewport, layout);

        match frame.status {
            GameStatus::GameOver => self.draw_overlay_text(fb, layout, "GAME OVER"),
            GameStatus::Idle => self.draw_overlay_text(fb, layout, "PRESS R"),
            GameStatus::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, frame: &Frame<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(frame, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, layout: Layout) {
        let Layout {
            start_x: x,
            start_y: y,
            frame_w: w,
            frame_h: h,
        } = layout;
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', BORDER);
        fb.put_char(x + w - 1, y, '┐', BORDER);
        fb.put_char(x, y + h - 1, '└', BORDER);
        fb.put_char(x + w - 1, y + h - 1, '┘', BORDER);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', BORDER);
            fb.put_char(x + dx, y + h - 1, '─', BORDER);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', BORDER);
            fb.put_char(x + w - 1, y + dy, '│', BORDER);
        }
    }

    fn draw_block(&self, fb: &mut FrameBuffer, layout: Layout, x: u16, y: u16, fg: Rgb) {
        self.fill_cell_rect(fb, layout, x, y, '█', CellStyle::new(fg, WELL_BG).bold());
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        layout: Layout,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = layout.start_x + 1 + cell_x * self.cell_w;
        let py = layout.start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        frame: &Frame<'_>,
        viewport: Viewport,
        layout: Layout,
    ) {
        let panel_x = layout
            .start_x
            .saturating_add(layout.frame_w)
            .saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let mut y = layout.start_y;
        for (label, value) in [
            ("SCORE", frame.points),
            ("LEVEL", frame.level),
            ("LINES", frame.lines),
        ] {
            fb.put_str(panel_x, y, label, LABEL);
            fb.put_u32(panel_x, y.saturating_add(1), value, VALUE);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "NEXT", LABEL);
        y = y.saturating_add(1);
        if let Some(next) = frame.next {
            self.draw_preview(fb, panel_x, y, next);
        }
    }

    /// Draw a piece's shape matrix at a fixed screen position.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, piece: &Piece) {
        let Some(fg) = block_color(piece.color_id()) else {
            return;
        };
        let style = CellStyle::new(fg, SCREEN_BG).bold();
        for (dx, dy) in piece.shape.occupied() {
            let px = x.saturating_add(dx as u16 * self.cell_w);
            let py = y.saturating_add(dy as u16 * self.cell_h);
            fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, layout: Layout, text: &str) {
        let mid_y = layout.start_y.saturating_add(layout.frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = layout
            .start_x
            .saturating_add(layout.frame_w.saturating_sub(text_w) / 2);
        fb.put_str(x, mid_y, text, OVERLAY);
    }
}
