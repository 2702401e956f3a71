//! Grid module - the playfield matrix
//!
//! The grid is `rows x cols` cells, each holding a color id (`0` = empty,
//! `1..=7` = a landed piece). Dimensions are fixed at creation; only cell
//! values change afterwards.
//!
//! Storage is one flat row-major buffer (`y * cols + x`).
//! Coordinates: (x, y) where x is the column (left to right) and y the row
//! (top to bottom). Row 0 is the top of the well.

use crate::piece::Piece;

/// Value of an empty cell
pub const EMPTY: u8 = 0;

/// The playfield
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (y * cols + x)
    cells: Vec<u8>,
}

impl Grid {
    /// Create an empty grid
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "grid must be at least 1x1, got {rows}x{cols}");
        Self {
            rows,
            cols,
            cells: vec![EMPTY; rows * cols],
        }
    }

    /// Build a grid from explicit rows, top row first.
    ///
    /// # Panics
    ///
    /// Panics if `rows` is empty or the rows differ in length.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        assert!(!rows.is_empty(), "grid needs at least one row");
        let cols = rows[0].len();
        assert!(cols > 0, "grid needs at least one column");

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), cols, "row {y} has {} cells, expected {cols}", row.len());
            cells.extend_from_slice(row);
        }

        Self {
            rows: rows.len(),
            cols,
            cells,
        }
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.cols || y >= self.rows {
            return None;
        }
        Some(y * self.cols + x)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<u8> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, value: u8) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// True if (x, y) is inside the grid and empty
    pub fn is_vacant(&self, x: i32, y: i32) -> bool {
        self.get(x, y) == Some(EMPTY)
    }

    /// One row of cells, or None past the bottom
    pub fn row(&self, y: usize) -> Option<&[u8]> {
        if y >= self.rows {
            return None;
        }
        let start = y * self.cols;
        Some(&self.cells[start..start + self.cols])
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .is_some_and(|row| row.iter().all(|&cell| cell != EMPTY))
    }

    /// Delete row `y` and insert an empty row at the top.
    ///
    /// Rows above `y` shift down by one; rows below are untouched.
    /// Returns false if `y` is out of range.
    pub fn remove_row(&mut self, y: usize) -> bool {
        if y >= self.rows {
            return false;
        }

        let width = self.cols;
        // copy_within handles the overlapping ranges
        self.cells.copy_within(0..y * width, width);
        self.cells[..width].fill(EMPTY);
        true
    }

    /// Remove every full row in one pass and return how many were removed.
    ///
    /// Scanning top to bottom is safe while removing: `remove_row(y)` only
    /// moves rows that were already scanned.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        for y in 0..self.rows {
            if self.is_row_full(y) {
                self.remove_row(y);
                cleared += 1;
            }
        }
        cleared
    }

    /// Write the piece's color id into every cell it occupies.
    ///
    /// Cells that fall outside the grid (e.g. above the top edge) are
    /// dropped without error.
    pub fn freeze(&mut self, piece: &Piece) {
        let color = piece.color_id();
        for (x, y) in piece.cells() {
            self.set(x, y, color);
        }
    }

    /// Number of non-empty cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != EMPTY).count()
    }
}
