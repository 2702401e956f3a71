//! Piece factory - picks the kind of every new piece
//!
//! The default source draws uniformly from the seven kinds with a seedable
//! `StdRng`, so a seed reproduces a whole game. A fixed sequence source is
//! available for replays and tests.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::piece::Piece;
use crate::types::PieceKind;

#[derive(Debug, Clone)]
enum Source {
    Random(StdRng),
    Sequence { kinds: Vec<PieceKind>, next: usize },
}

/// Produces new pieces at their spawn position
#[derive(Debug, Clone)]
pub struct PieceFactory {
    source: Source,
}

impl PieceFactory {
    /// Uniform random kinds from a fixed seed
    pub fn random(seed: u64) -> Self {
        Self {
            source: Source::Random(StdRng::seed_from_u64(seed)),
        }
    }

    /// Uniform random kinds seeded from the OS
    pub fn from_entropy() -> Self {
        Self {
            source: Source::Random(StdRng::from_entropy()),
        }
    }

    /// Cycle through `kinds` in order, forever.
    ///
    /// # Panics
    ///
    /// Panics if `kinds` is empty.
    pub fn sequence(kinds: impl IntoIterator<Item = PieceKind>) -> Self {
        let kinds: Vec<PieceKind> = kinds.into_iter().collect();
        assert!(!kinds.is_empty(), "piece sequence must not be empty");
        Self {
            source: Source::Sequence { kinds, next: 0 },
        }
    }

    /// Pick the next kind
    pub fn next_kind(&mut self) -> PieceKind {
        match &mut self.source {
            Source::Random(rng) => PieceKind::ALL[rng.gen_range(0..PieceKind::ALL.len())],
            Source::Sequence { kinds, next } => {
                let kind = kinds[*next];
                *next = (*next + 1) % kinds.len();
                kind
            }
        }
    }

    /// A new piece of the next kind at its spawn position on a grid `cols` wide
    pub fn spawn(&mut self, cols: usize) -> Piece {
        Piece::spawn(self.next_kind(), cols)
    }
}

impl Default for PieceFactory {
    fn default() -> Self {
        Self::from_entropy()
    }
}
