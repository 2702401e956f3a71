//! Pieces module - tetromino shape table and the rotation transform
//!
//! Every piece is an N x N matrix of cells (N <= 4) plus a position.
//! Rotation is a plain matrix transform: transpose, then reverse each row,
//! which turns the occupied pattern 90° clockwise inside the same square.
//! There are no wall kicks; a rotation that collides is simply discarded by
//! the caller.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, BOARD_COLS, MAX_SHAPE_SIZE};

type Row = ArrayVec<u8, MAX_SHAPE_SIZE>;

/// Square cell matrix of a piece
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: ArrayVec<Row, MAX_SHAPE_SIZE>,
}

impl Shape {
    /// Build a shape from rows, top row first.
    ///
    /// # Panics
    ///
    /// Panics unless the matrix is square, between 1x1 and 4x4, and every
    /// non-zero cell carries the same value.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let size = rows.len();
        assert!(
            (1..=MAX_SHAPE_SIZE).contains(&size),
            "shape must be 1x1 to {MAX_SHAPE_SIZE}x{MAX_SHAPE_SIZE}, got {size} rows"
        );

        let mut color = None;
        let mut out = ArrayVec::new();
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), size, "shape row {y} is not {size} wide; shapes must be square");
            for &cell in row.iter().filter(|&&cell| cell != 0) {
                let expected = *color.get_or_insert(cell);
                assert_eq!(cell, expected, "shape mixes color ids {expected} and {cell}");
            }
            out.push(row.iter().copied().collect());
        }

        Self { rows: out }
    }

    /// The spawn-orientation shape of a piece kind
    pub fn of(kind: PieceKind) -> Self {
        match kind {
            PieceKind::I => Self::from_rows(&[&[1, 1, 1, 1], &[0, 0, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 0]]),
            PieceKind::J => Self::from_rows(&[&[2, 0, 0], &[2, 2, 2], &[0, 0, 0]]),
            PieceKind::L => Self::from_rows(&[&[0, 0, 3], &[3, 3, 3], &[0, 0, 0]]),
            PieceKind::O => Self::from_rows(&[&[4, 4], &[4, 4]]),
            PieceKind::S => Self::from_rows(&[&[0, 5, 5], &[5, 5, 0], &[0, 0, 0]]),
            PieceKind::T => Self::from_rows(&[&[0, 6, 0], &[6, 6, 6], &[0, 0, 0]]),
            PieceKind::Z => Self::from_rows(&[&[7, 7, 0], &[0, 7, 7], &[0, 0, 0]]),
        }
    }

    /// Side length N of the N x N matrix
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Cell at (col, row) inside the matrix, 0 outside it
    pub fn get(&self, col: usize, row: usize) -> u8 {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(0)
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.rows.iter().map(|row| row.as_slice())
    }

    /// (dx, dy) offsets of the non-zero cells
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(dy, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, &cell)| cell != 0)
                .map(move |(dx, _)| (dx, dy))
        })
    }

    /// 90° clockwise rotation: transpose, then reverse each row.
    pub fn rotated_cw(&self) -> Self {
        let mut out = self.clone();
        let n = out.size();

        for i in 0..n {
            for j in 0..i {
                let tmp = out.rows[i][j];
                out.rows[i][j] = out.rows[j][i];
                out.rows[j][i] = tmp;
            }
        }
        for row in out.rows.iter_mut() {
            row.reverse();
        }

        out
    }
}

/// Column a piece kind spawns at on a grid `cols` wide.
///
/// On the default 10-wide grid that is column 3, or 4 for the O piece,
/// which is two cells wide. Wider grids shift both by `(cols - 10) / 2`
/// so pieces stay centered; narrower grids keep the default columns.
pub fn spawn_x(kind: PieceKind, cols: usize) -> i32 {
    let base = match kind {
        PieceKind::O => 4,
        _ => 3,
    };
    let extra = cols.saturating_sub(BOARD_COLS) / 2;
    base + extra as i32
}

/// A piece: shape plus the grid position of the shape's top-left corner
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    /// A piece in its spawn orientation at (x, y)
    pub fn new(kind: PieceKind, x: i32, y: i32) -> Self {
        Self {
            kind,
            shape: Shape::of(kind),
            x,
            y,
        }
    }

    /// A piece at its spawn position on a grid `cols` wide (top row, centered)
    pub fn spawn(kind: PieceKind, cols: usize) -> Self {
        Self::new(kind, spawn_x(kind, cols), 0)
    }

    /// Grid value written for this piece
    pub fn color_id(&self) -> u8 {
        self.kind.color_id()
    }

    /// Copy moved by (dx, dy)
    pub fn shifted(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self.clone()
        }
    }

    /// Absolute grid coordinates (x, y) of the occupied cells
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .occupied()
            .map(move |(dx, dy)| (self.x + dx as i32, self.y + dy as i32))
    }
}

/// Rotated copy of `piece`, same position and kind.
///
/// The result is not validated; callers check it against the grid and
/// keep the original when it collides.
pub fn rotate(piece: &Piece) -> Piece {
    Piece {
        shape: piece.shape.rotated_cw(),
        ..piece.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_four_cells_of_its_color() {
        for kind in PieceKind::ALL {
            let shape = Shape::of(kind);
            assert_eq!(shape.occupied().count(), 4, "{kind:?}");
            for (dx, dy) in shape.occupied() {
                assert_eq!(shape.get(dx, dy), kind.color_id());
            }
        }
    }

    #[test]
    fn test_rotate_t_clockwise() {
        let t = Piece::spawn(PieceKind::T, BOARD_COLS);
        let rotated = rotate(&t);
        assert_eq!(
            rotated.shape,
            Shape::from_rows(&[&[0, 6, 0], &[0, 6, 6], &[0, 6, 0]])
        );
        assert_eq!((rotated.x, rotated.y, rotated.kind), (t.x, t.y, t.kind));
    }

    #[test]
    fn test_rotate_i_goes_vertical_on_last_column() {
        let rotated = rotate(&Piece::spawn(PieceKind::I, BOARD_COLS));
        let cols: Vec<usize> = rotated.shape.occupied().map(|(dx, _)| dx).collect();
        assert_eq!(cols, vec![3, 3, 3, 3]);
    }

    #[test]
    fn test_rotate_leaves_input_untouched() {
        let original = Piece::spawn(PieceKind::L, BOARD_COLS);
        let before = original.clone();
        let _ = rotate(&original);
        assert_eq!(original, before);
    }

    #[test]
    fn test_o_rotation_is_identity() {
        let o = Shape::of(PieceKind::O);
        assert_eq!(o.rotated_cw(), o);
    }

    #[test]
    #[should_panic]
    fn test_non_square_shape_panics() {
        let _ = Shape::from_rows(&[&[1, 1, 1], &[1, 0, 0]]);
    }

    #[test]
    #[should_panic]
    fn test_mixed_colors_panic() {
        let _ = Shape::from_rows(&[&[1, 2], &[0, 0]]);
    }

    #[test]
    fn test_piece_cells_are_absolute() {
        let o = Piece::new(PieceKind::O, 4, 7);
        let cells: Vec<(i32, i32)> = o.cells().collect();
        assert_eq!(cells, vec![(4, 7), (5, 7), (4, 8), (5, 8)]);
    }
}
