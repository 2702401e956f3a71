//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout libraries and instead renders into a simple
//! framebuffer that is flushed to the terminal as a diff.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Plug into the game loop as a plain [`core::Renderer`]
//! - Allow precise control over aspect ratio (2 chars wide per cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blocktris_core as core;
pub use blocktris_types as types;

pub use fb::{block_color, Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Layout, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer, TerminalSink};
