//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data with no external dependencies, so they can be used
//! by the rule engine, the key mapping, and the terminal renderer alike.
//!
//! # Board Dimensions
//!
//! Default playfield dimensions:
//!
//! - **Columns**: 10 (indexed 0-9)
//! - **Rows**: 20 (indexed 0-19, row 0 is the top)
//! - **Spawn position**: (3, 0) for most pieces, (4, 0) for the O piece
//!
//! # Drop Intervals by Level
//!
//! Gravity speeds up with level (milliseconds per row):
//!
//! | Level | Interval |
//! |-------|----------|
//! | 0 | 800ms |
//! | 1 | 720ms |
//! | 2 | 630ms |
//! | 3 | 550ms |
//! | 4 | 470ms |
//! | 5 | 380ms |
//! | 6 | 300ms |
//! | 7 | 220ms |
//! | 8 | 130ms |
//! | 9 | 100ms |
//! | 10-12 | 80ms |
//! | 13-15 | 70ms |
//! | 16-18 | 50ms |
//! | 19+ | 30ms |
//!
//! # Examples
//!
//! ```
//! use blocktris_types::{PieceKind, BOARD_COLS, BOARD_ROWS};
//!
//! assert_eq!(PieceKind::O.color_id(), 4);
//! assert_eq!(PieceKind::ALL.len(), 7);
//!
//! assert_eq!(BOARD_COLS, 10);
//! assert_eq!(BOARD_ROWS, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_COLS: usize = 10;

/// Board height in cells (20 rows)
pub const BOARD_ROWS: usize = 20;

/// Frame cadence of the terminal runner in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u64 = 16;

/// Points per row for soft drops and hard drops
pub const DROP_POINTS_PER_ROW: u32 = 1;

/// Line clear scoring table, indexed by the number of rows cleared at once.
///
/// - 0 lines: 0 points
/// - 1 line: 100 points
/// - 2 lines: 300 points
/// - 3 lines: 500 points
/// - 4 lines: 800 points
///
/// Points are multiplied by (level + 1).
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Gravity interval per level in milliseconds.
///
/// Levels past the end of the table use the last entry.
pub const LEVEL_INTERVALS_MS: [u32; 21] = [
    800, 720, 630, 550, 470, 380, 300, 220, 130, 100, 80, 80, 80, 70, 70, 70, 50, 50, 50, 30, 30,
];

/// Largest shape side length (the I piece is 4x4)
pub const MAX_SHAPE_SIZE: usize = 4;

/// The seven tetromino piece kinds
///
/// Each kind has a fixed color id used in grid cells:
/// - **I** (1): cyan bar
/// - **J** (2): blue
/// - **L** (3): orange
/// - **O** (4): yellow 2x2 square
/// - **S** (5): green
/// - **T** (6): purple
/// - **Z** (7): red
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds, ordered by color id
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Grid cell value written when this kind lands (1..=7)
    pub fn color_id(&self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::J => 2,
            PieceKind::L => 3,
            PieceKind::O => 4,
            PieceKind::S => 5,
            PieceKind::T => 6,
            PieceKind::Z => 7,
        }
    }
}

/// Requests that the input side can send to the game loop
///
/// Movement requests only take effect while a game is running. `Abort` ends
/// a running game; `Restart` is honored in every state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down (scored per row)
    SoftDrop,
    /// Drop piece to its resting position and land it (scored per row)
    HardDrop,
    /// Rotate piece 90° clockwise
    Rotate,
    /// End the current game immediately
    Abort,
    /// Throw the session away and start a new game
    Restart,
}

/// Lifecycle of a game loop
///
/// `Idle -> Running -> GameOver`; only a reset leaves `GameOver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Idle,
    Running,
    GameOver,
}
