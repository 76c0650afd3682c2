//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or holds the kind of the
//! piece that was locked there. Storage is a flat row-major array, so the
//! dimensions can never change.
//!
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19
//! (top to bottom). Rows above the board (y < 0) are treated as always free
//! for placement queries and are skipped when locking.

use arrayvec::ArrayVec;

use crate::pieces::Shape;
use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row indices removed by one clear. A clear can never remove more rows than the board has.
pub type ClearedRows = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Whether one piece cell may sit at (x, y).
    ///
    /// The column must be on the board and the row must be above the floor.
    /// Rows above the top edge are always free.
    #[inline]
    pub fn is_free(&self, x: i8, y: i8) -> bool {
        if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return false;
        }
        y < 0 || !self.is_occupied(x, y)
    }

    /// Whether `shape` anchored at (x, y) collides with nothing.
    pub fn can_place(&self, shape: &Shape, x: i8, y: i8) -> bool {
        shape
            .occupied()
            .all(|(dx, dy)| self.is_free(x + dx, y + dy))
    }

    /// Write `kind` into every cell covered by `shape` at (x, y).
    ///
    /// Cells above the top edge are dropped. The caller is expected to have
    /// checked [`Board::can_place`]; nothing is re-validated here.
    pub fn lock(&mut self, shape: &Shape, kind: PieceKind, x: i8, y: i8) {
        for (dx, dy) in shape.occupied() {
            let py = y + dy;
            if py >= 0 {
                self.set(x + dx, py, Some(kind));
            }
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|row| row.iter().all(|cell| cell.is_some()))
            .unwrap_or(false)
    }

    /// Cells of row `y`, left to right.
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= BOARD_HEIGHT as usize {
            return None;
        }
        let start = y * BOARD_WIDTH as usize;
        Some(&self.cells[start..start + BOARD_WIDTH as usize])
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(BOARD_WIDTH as usize)
    }

    /// Remove every full row and return how many were removed.
    pub fn clear_lines(&mut self) -> u32 {
        self.clear_full_rows().len() as u32
    }

    /// Remove every full row and return the removed row indices (bottom to top).
    ///
    /// Remaining rows keep their relative order and settle to the bottom;
    /// empty rows fill in at the top. Two-pointer compaction, no allocation.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared_rows = ClearedRows::new();
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, write_y * width);
                }
            }
        }

        self.cells[..write_y * width].fill(None);

        cleared_rows
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of filled cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Copy out as a 2D grid (row-major).
    pub fn to_grid(&self) -> [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize] {
        let mut grid = [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        for (dst, src) in grid.iter_mut().zip(self.rows()) {
            dst.copy_from_slice(src);
        }
        grid
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::spawn_shape;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_is_free_above_top_edge() {
        let board = Board::new();
        assert!(board.is_free(0, -1));
        assert!(board.is_free(9, -4));
        assert!(!board.is_free(-1, -1));
        assert!(!board.is_free(10, -1));
        assert!(!board.is_free(0, 20));
    }

    #[test]
    fn test_lock_skips_rows_above_board() {
        let mut board = Board::new();
        let i = spawn_shape(PieceKind::I).rotated_cw();
        // Vertical I spanning rows -2..=1.
        board.lock(&i, PieceKind::I, 0, -2);
        assert_eq!(board.filled_count(), 2);
        assert!(board.is_occupied(0, 0));
        assert!(board.is_occupied(0, 1));
    }

    #[test]
    fn test_clear_full_rows_reports_indices_bottom_up() {
        let mut board = Board::new();
        for x in 0..10 {
            board.set(x, 19, Some(PieceKind::I));
            board.set(x, 17, Some(PieceKind::I));
        }
        board.set(3, 18, Some(PieceKind::T));

        let rows = board.clear_full_rows();
        assert_eq!(rows.as_slice(), &[19, 17]);
        assert_eq!(board.get(3, 19), Some(Some(PieceKind::T)));
        assert_eq!(board.filled_count(), 1);
    }

    #[test]
    fn test_to_grid_matches_cells() {
        let mut board = Board::new();
        board.set(5, 3, Some(PieceKind::O));
        board.set(7, 10, Some(PieceKind::L));

        let grid = board.to_grid();
        assert_eq!(grid[3][5], Some(PieceKind::O));
        assert_eq!(grid[10][7], Some(PieceKind::L));
        assert_eq!(grid.iter().flatten().filter(|c| c.is_some()).count(), 2);
    }
}
