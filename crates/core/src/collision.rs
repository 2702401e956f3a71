//! Placement validation
//!
//! A candidate piece is valid when every occupied cell is inside the side
//! walls, above the floor and on an empty grid cell. Zero cells of the shape
//! never constrain anything, wherever they land.

use crate::grid::{Grid, EMPTY};
use crate::piece::Piece;

fn inside_walls(grid: &Grid, x: i32) -> bool {
    x >= 0 && (x as usize) < grid.cols()
}

fn above_floor(grid: &Grid, y: i32) -> bool {
    y < grid.rows() as i32
}

// A negative row has no grid cell, so it reads as occupied.
fn not_occupied(grid: &Grid, x: i32, y: i32) -> bool {
    grid.get(x, y) == Some(EMPTY)
}

/// Check a candidate placement against walls, floor and stack.
pub fn valid(piece: &Piece, grid: &Grid) -> bool {
    piece
        .cells()
        .all(|(x, y)| inside_walls(grid, x) && above_floor(grid, y) && not_occupied(grid, x, y))
}
