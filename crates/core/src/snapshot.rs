//! What the game loop hands to a renderer
//!
//! [`Frame`] borrows the live session for one `render` call. [`GameSnapshot`]
//! is an owned copy for callers that need to keep a frame around.

use std::convert::Infallible;

use crate::grid::{Grid, EMPTY};
use crate::piece::Piece;
use crate::types::GameStatus;

/// Read-only view of one frame
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub grid: &'a Grid,
    pub active: Option<&'a Piece>,
    pub next: Option<&'a Piece>,
    pub points: u32,
    pub lines: u32,
    pub level: u32,
    pub status: GameStatus,
}

impl Frame<'_> {
    /// Color id visible at (x, y): the active piece over the grid.
    pub fn visible_cell(&self, x: i32, y: i32) -> u8 {
        if let Some(active) = self.active {
            if active.cells().any(|cell| cell == (x, y)) {
                return active.color_id();
            }
        }
        self.grid.get(x, y).unwrap_or(EMPTY)
    }

    pub fn to_snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            grid: self.grid.clone(),
            active: self.active.cloned(),
            next: self.next.cloned(),
            points: self.points,
            lines: self.lines,
            level: self.level,
            status: self.status,
        }
    }
}

/// Owned copy of a [`Frame`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub grid: Grid,
    pub active: Option<Piece>,
    pub next: Option<Piece>,
    pub points: u32,
    pub lines: u32,
    pub level: u32,
    pub status: GameStatus,
}

impl GameSnapshot {
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            grid: &self.grid,
            active: self.active.as_ref(),
            next: self.next.as_ref(),
            points: self.points,
            lines: self.lines,
            level: self.level,
            status: self.status,
        }
    }

    pub fn playable(&self) -> bool {
        self.status == GameStatus::Running
    }
}

/// Sink for frames; all pixel and layout work happens on its side.
pub trait Renderer {
    type Error;

    fn render(&mut self, frame: &Frame<'_>) -> Result<(), Self::Error>;
}

/// Renderer that draws nothing (headless runs, benches)
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    type Error = Infallible;

    fn render(&mut self, _frame: &Frame<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}
