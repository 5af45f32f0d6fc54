//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell can be empty or filled with a piece kind.
//! Uses a flat array for cache locality and zero-allocation line clears.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use arrayvec::ArrayVec;

use crate::pieces::Tetromino;
use crate::types::{Cell, Grid, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row indices removed by a single clear pass.
pub type ClearedRows = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
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

    /// Calculate flat index from (x, y) coordinates
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

    /// Fill a whole row with one kind (test and bench setup)
    pub fn fill_row(&mut self, y: usize, kind: PieceKind) {
        if y >= BOARD_HEIGHT as usize {
            return;
        }
        let start = y * BOARD_WIDTH as usize;
        self.cells[start..start + BOARD_WIDTH as usize].fill(Some(kind));
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Clear all full rows and return the row indices that were cleared (sorted bottom to top)
    ///
    /// Surviving rows keep their relative order and slide down; the freed rows at
    /// the top are emptied. Two-pointer pass, no allocation.
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
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        self.cells[..write_y * width].fill(None);

        cleared_rows
    }

    /// Write every on-board cell of a piece into the grid.
    ///
    /// Cells above the top edge (y < 0) are dropped. Returns how many cells were written.
    pub fn lock_piece(&mut self, piece: &Tetromino) -> usize {
        let mut written = 0;
        for (x, y) in piece.cells() {
            if y < 0 {
                continue;
            }
            if self.set(x, y, Some(piece.kind)) {
                written += 1;
            }
        }
        written
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(BOARD_WIDTH as usize)
    }

    /// Copy into a row-major 2D grid
    pub fn to_grid(&self) -> Grid {
        let mut grid: Grid = [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        for (dst, src) in grid.iter_mut().zip(self.rows()) {
            dst.copy_from_slice(src);
        }
        grid
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
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
    fn test_board_flat_array() {
        let mut board = Board::new();

        board.set(0, 0, Some(PieceKind::I));
        board.set(5, 10, Some(PieceKind::T));

        assert_eq!(board.get(0, 0), Some(Some(PieceKind::I)));
        assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));

        assert_eq!(board.cells[0], Some(PieceKind::I));
        assert_eq!(board.cells[10 * 10 + 5], Some(PieceKind::T));
    }

    #[test]
    fn test_lock_piece_drops_cells_above_top() {
        let mut board = Board::new();
        // I base shape fills local row 1; anchor y=-2 puts that row at board y=-1.
        let piece = Tetromino::new(PieceKind::I).shifted(0, -2);
        assert_eq!(board.lock_piece(&piece), 0);
        assert_eq!(board, Board::new());

        let piece = Tetromino::new(PieceKind::T).shifted(0, -1);
        // T: local row 0 lands at y=-1 (dropped), local row 1 at y=0.
        assert_eq!(board.lock_piece(&piece), 3);
        assert!(board.is_occupied(4, 0));
        assert!(board.is_occupied(5, 0));
        assert!(board.is_occupied(6, 0));
    }

    #[test]
    fn test_to_grid_matches_cells() {
        let mut board = Board::new();
        board.set(3, 7, Some(PieceKind::Z));
        let grid = board.to_grid();
        assert_eq!(grid[7][3], Some(PieceKind::Z));
        assert_eq!(grid.iter().flatten().filter(|c| c.is_some()).count(), 1);
    }
}
