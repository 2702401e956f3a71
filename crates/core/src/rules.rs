//! Game rules - tunable tables with defaults from `blocktris_types`
//!
//! `Rules` deserializes with every field optional, so a rules file only
//! needs the values it changes:
//!
//! ```
//! use blocktris_core::Rules;
//!
//! let rules = Rules {
//!     lines_per_level: 5,
//!     ..Rules::default()
//! };
//! assert!(rules.validate().is_ok());
//! assert_eq!(rules.cols, 10);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::collision::valid;
use crate::grid::Grid;
use crate::piece::Piece;
use crate::types::{
    PieceKind, BOARD_COLS, BOARD_ROWS, DROP_POINTS_PER_ROW, LEVEL_INTERVALS_MS, LINES_PER_LEVEL,
    LINE_SCORES,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Rules {
    pub rows: usize,
    pub cols: usize,
    /// Base points indexed by lines cleared in one landing (0..=4)
    pub line_scores: [u32; 5],
    /// Points per row for soft and hard drops
    pub drop_points_per_row: u32,
    pub lines_per_level: u32,
    /// Gravity interval per level; the last entry applies to every higher level
    pub level_intervals_ms: Vec<u32>,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            rows: BOARD_ROWS,
            cols: BOARD_COLS,
            line_scores: LINE_SCORES,
            drop_points_per_row: DROP_POINTS_PER_ROW,
            lines_per_level: LINES_PER_LEVEL,
            level_intervals_ms: LEVEL_INTERVALS_MS.to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("grid of {rows}x{cols} has no room for pieces")]
    EmptyGrid { rows: usize, cols: usize },
    #[error("{kind:?} piece does not fit at its spawn position on a {rows}x{cols} grid")]
    SpawnDoesNotFit {
        kind: PieceKind,
        rows: usize,
        cols: usize,
    },
    #[error("lines_per_level must be at least 1")]
    ZeroLinesPerLevel,
    #[error("level_intervals_ms must not be empty")]
    EmptyLevelTable,
    #[error("level_intervals_ms speeds down at level {level}: {prev}ms -> {next}ms")]
    IntervalIncreases { level: usize, prev: u32, next: u32 },
}

impl Rules {
    /// Check the tables before a game is built from them
    pub fn validate(&self) -> Result<(), RulesError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(RulesError::EmptyGrid {
                rows: self.rows,
                cols: self.cols,
            });
        }

        let empty = Grid::new(self.rows, self.cols);
        if let Some(kind) = PieceKind::ALL
            .into_iter()
            .find(|&kind| !valid(&Piece::spawn(kind, self.cols), &empty))
        {
            return Err(RulesError::SpawnDoesNotFit {
                kind,
                rows: self.rows,
                cols: self.cols,
            });
        }

        if self.lines_per_level == 0 {
            return Err(RulesError::ZeroLinesPerLevel);
        }

        if self.level_intervals_ms.is_empty() {
            return Err(RulesError::EmptyLevelTable);
        }

        if let Some((i, w)) = self
            .level_intervals_ms
            .windows(2)
            .enumerate()
            .find(|(_, w)| w[1] > w[0])
        {
            return Err(RulesError::IntervalIncreases {
                level: i + 1,
                prev: w[0],
                next: w[1],
            });
        }

        Ok(())
    }
}
