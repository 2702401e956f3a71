//! Piece tests - shapes, rotation and placement validity

use blocktris::core::{rotate, valid, Grid, Piece, PieceFactory, Shape};
use blocktris::types::{PieceKind, BOARD_COLS, BOARD_ROWS};

fn empty_grid() -> Grid {
    Grid::new(BOARD_ROWS, BOARD_COLS)
}

#[test]
fn test_every_kind_spawns_valid() {
    let grid = empty_grid();
    for kind in PieceKind::ALL {
        let piece = Piece::spawn(kind, grid.cols());
        assert!(valid(&piece, &grid), "{:?} should fit at spawn", kind);
        assert_eq!(piece.y, 0);
        assert_eq!(piece.cells().count(), 4);
    }
}

#[test]
fn test_shapes_use_their_color_id() {
    for kind in PieceKind::ALL {
        let shape = Shape::of(kind);
        for (dx, dy) in shape.occupied() {
            assert_eq!(shape.get(dx, dy), kind.color_id());
        }
    }
}

#[test]
fn test_shape_sizes() {
    assert_eq!(Shape::of(PieceKind::I).size(), 4);
    assert_eq!(Shape::of(PieceKind::O).size(), 2);
    for kind in [PieceKind::J, PieceKind::L, PieceKind::S, PieceKind::T, PieceKind::Z] {
        assert_eq!(Shape::of(kind).size(), 3);
    }
}

#[test]
fn test_rotate_t_clockwise() {
    let rotated = rotate(&Piece::spawn(PieceKind::T, BOARD_COLS));
    let rows: Vec<Vec<u8>> = rotated.shape.rows().map(|r| r.to_vec()).collect();
    assert_eq!(rows, vec![vec![0, 6, 0], vec![0, 6, 6], vec![0, 6, 0]]);
}

#[test]
fn test_four_rotations_identity() {
    for kind in PieceKind::ALL {
        let piece = Piece::spawn(kind, BOARD_COLS);
        let back = (0..4).fold(piece.clone(), |p, _| rotate(&p));
        assert_eq!(back, piece, "{:?}", kind);
    }
}

#[test]
fn test_rotation_at_wall_is_invalid() {
    let grid = empty_grid();
    // Vertical I fills matrix column 3, so it sits in grid column 1.
    let vertical = rotate(&Piece::new(PieceKind::I, -2, 0));
    assert!(valid(&vertical, &grid));

    // Back to horizontal would put the bar at columns -2..=1.
    let horizontal = rotate(&rotate(&rotate(&vertical)));
    assert!(!valid(&horizontal, &grid));
}

#[test]
fn test_stack_collision() {
    let mut grid = empty_grid();
    grid.set(4, 1, 2);

    let t = Piece::spawn(PieceKind::T, grid.cols());
    assert!(!valid(&t, &grid));
    assert!(valid(&t.shifted(-2, 0), &grid));
}

#[test]
fn test_seeded_factories_agree() {
    let mut a = PieceFactory::random(99);
    let mut b = PieceFactory::random(99);
    let left: Vec<PieceKind> = (0..50).map(|_| a.next_kind()).collect();
    let right: Vec<PieceKind> = (0..50).map(|_| b.next_kind()).collect();
    assert_eq!(left, right);
}
