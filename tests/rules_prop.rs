//! Property tests for placement, rotation and whole-game rollouts.
//!
//! Invariants covered:
//! - Validity depends only on a piece's filled cells; empty matrix cells may
//!   hang outside the grid or over the stack.
//! - Four clockwise rotations restore every piece, wherever it is.
//! - Over random games: points never decrease, accepted moves leave the
//!   piece validly placed, and no full row survives a landing.

use proptest::prelude::*;

use blocktris::core::{
    rotate, valid, DropOutcome, FrameScheduler, GameLoop, Grid, NullRenderer, Piece,
    PieceFactory, Rules,
};
use blocktris::types::{GameAction, GameStatus, PieceKind};

fn kind_strategy() -> impl Strategy<Value = PieceKind> {
    (0..PieceKind::ALL.len()).prop_map(|i| PieceKind::ALL[i])
}

fn action_strategy() -> impl Strategy<Value = GameAction> {
    prop_oneof![
        Just(GameAction::MoveLeft),
        Just(GameAction::MoveRight),
        Just(GameAction::SoftDrop),
        Just(GameAction::HardDrop),
        Just(GameAction::Rotate),
    ]
}

/// A 20x10 grid with roughly `density` percent of cells filled
fn grid_strategy() -> impl Strategy<Value = Grid> {
    (0u8..60, prop::collection::vec(0u8..100, 200)).prop_map(|(density, rolls)| {
        let mut grid = Grid::new(20, 10);
        for (i, roll) in rolls.into_iter().enumerate() {
            if roll < density {
                grid.set((i % 10) as i32, (i / 10) as i32, 7);
            }
        }
        grid
    })
}

proptest! {
    #[test]
    fn validity_only_sees_filled_cells(
        kind in kind_strategy(),
        turns in 0usize..4,
        x in -4i32..12,
        y in -4i32..22,
        grid in grid_strategy(),
    ) {
        let mut piece = Piece::new(kind, x, y);
        for _ in 0..turns {
            piece = rotate(&piece);
        }

        let expected = piece.cells().all(|(cx, cy)| grid.is_vacant(cx, cy));
        prop_assert_eq!(valid(&piece, &grid), expected);
    }

    #[test]
    fn four_rotations_restore_piece(kind in kind_strategy(), x in -3i32..10, y in 0i32..20) {
        let piece = Piece::new(kind, x, y);
        let mut turned = piece.clone();
        for _ in 0..4 {
            turned = rotate(&turned);
            prop_assert_eq!(turned.x, x);
            prop_assert_eq!(turned.y, y);
            prop_assert_eq!(turned.cells().count(), 4);
        }
        prop_assert_eq!(turned, piece);
    }

    #[test]
    fn random_games_respect_invariants(
        seed in any::<u64>(),
        actions in prop::collection::vec(action_strategy(), 1..300),
    ) {
        let mut game = GameLoop::new(
            Rules::default(),
            PieceFactory::random(seed),
            FrameScheduler::new(),
            NullRenderer,
        )
        .unwrap();
        game.play(0).unwrap();

        let mut last_points = 0;
        for (i, action) in actions.into_iter().enumerate() {
            let moved = game.handle_action(action, i as u64).unwrap();
            if moved && action != GameAction::HardDrop {
                prop_assert!(valid(game.active().unwrap(), game.grid()));
            }
            if i % 4 == 0 {
                let outcome = game.drop_step();
                if matches!(outcome, DropOutcome::Landed(_)) {
                    let grid = game.grid();
                    prop_assert!((0..grid.rows()).all(|y| !grid.is_row_full(y)));
                }
            }

            prop_assert!(game.points() >= last_points);
            last_points = game.points();
            prop_assert!(game.lines() < Rules::default().lines_per_level);

            prop_assert_ne!(game.status(), GameStatus::Idle);
            if game.status() == GameStatus::GameOver {
                prop_assert!(game.active().is_none());
                break;
            }
        }
    }
}
