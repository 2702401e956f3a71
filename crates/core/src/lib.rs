//! Core rule engine - pure, deterministic, and testable
//!
//! This crate contains the rules of the game and the loop that drives them.
//! It has **no dependencies** on terminals or wall clocks: time arrives as
//! millisecond timestamps, and drawing and timers are supplied by the host
//! through the [`Renderer`] and [`Scheduler`] traits.
//!
//! # Module Structure
//!
//! - [`grid`]: Rectangular playfield of color ids, row clearing and freezing
//! - [`piece`]: Tetromino shape table and the 90° clockwise rotation transform
//! - [`collision`]: Placement validity against walls, floor and stack
//! - [`factory`]: Random or scripted piece generation
//! - [`scoring`]: Drop bonuses, line clear points and level progression
//! - [`rules`]: Tunable tables and their validation
//! - [`scheduler`]: Tick handles and the host timer capability
//! - [`snapshot`]: Frames handed to renderers
//! - [`game_loop`]: Session state machine tying it all together
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: each piece kind is equally likely on every draw
//! - **Plain rotation**: clockwise only, no wall kicks; blocked rotations are dropped
//! - **No lock delay**: a piece that cannot fall when gravity fires lands at once
//! - **Top out**: a piece that lands without leaving its spawn row ends the game
//! - **Scoring**: classic 100/300/500/800 times (level + 1), plus 1 point per dropped row
//!
//! # Example
//!
//! ```
//! use blocktris_core::{FrameScheduler, GameLoop, NullRenderer, PieceFactory, Rules};
//! use blocktris_core::types::GameAction;
//!
//! let mut game = GameLoop::new(
//!     Rules::default(),
//!     PieceFactory::random(7),
//!     FrameScheduler::new(),
//!     NullRenderer,
//! )
//! .unwrap();
//! game.play(0).unwrap();
//!
//! game.handle_action(GameAction::MoveRight, 0).unwrap();
//! game.handle_action(GameAction::Rotate, 0).unwrap();
//! game.handle_action(GameAction::HardDrop, 0).unwrap();
//!
//! assert!(game.points() > 0); // Hard drop awards points
//! ```

pub mod collision;
pub mod factory;
pub mod game_loop;
pub mod grid;
pub mod piece;
pub mod rules;
pub mod scheduler;
pub mod scoring;
pub mod snapshot;

pub use blocktris_types as types;

// Re-export commonly used types for convenience
pub use collision::valid;
pub use factory::PieceFactory;
pub use game_loop::{DropOutcome, GameLoop, TickOutcome};
pub use grid::Grid;
pub use piece::{rotate, Piece, Shape};
pub use rules::{Rules, RulesError};
pub use scheduler::{FrameScheduler, Scheduler, TickHandle};
pub use scoring::{LineClear, ScoreKeeper};
pub use snapshot::{Frame, GameSnapshot, NullRenderer, Renderer};
