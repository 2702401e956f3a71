//! Terminal input module (engine-facing).
//!
//! This crate is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::GameAction`] requests; the game loop decides
//! whether a request has any effect.

pub mod map;

pub use blocktris_types as types;

pub use map::{handle_key_event, should_quit};
