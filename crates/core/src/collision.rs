//! Collision predicate shared by every movement, rotation and drop.

use crate::board::Board;
use crate::pieces::Tetromino;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Whether `piece` shifted by (dx, dy) fits on `board`.
///
/// Every filled cell must be inside the side walls and above the floor. Cells above
/// the top edge (y < 0) skip the occupancy check; all others must land on an empty cell.
pub fn is_valid_move(piece: &Tetromino, board: &Board, dx: i8, dy: i8) -> bool {
    piece.cells().all(|(x, y)| {
        let (x, y) = (x + dx, y + dy);
        if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return false;
        }
        y < 0 || !board.is_occupied(x, y)
    })
}

/// Rows the piece can fall before its next downward step would collide.
pub fn drop_distance(piece: &Tetromino, board: &Board) -> u8 {
    let mut distance: u8 = 0;
    while is_valid_move(piece, board, 0, distance as i8 + 1) {
        distance += 1;
    }
    distance
}

/// Rotated copy of `piece` if it fits where it stands, otherwise `None`.
pub fn try_rotate(piece: &Tetromino, board: &Board) -> Option<Tetromino> {
    let rotated = piece.rotated();
    is_valid_move(&rotated, board, 0, 0).then_some(rotated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn fresh_pieces_fit_an_empty_board() {
        let board = Board::new();
        for kind in PieceKind::ALL {
            assert!(is_valid_move(&Tetromino::new(kind), &board, 0, 0), "{:?}", kind);
        }
    }

    #[test]
    fn walls_and_floor_reject() {
        let board = Board::new();
        // O at x=0 occupies columns 0 and 1.
        let piece = Tetromino { x: 0, ..Tetromino::new(PieceKind::O) };
        assert!(!is_valid_move(&piece, &board, -1, 0));
        let piece = Tetromino { x: 8, ..piece };
        assert!(!is_valid_move(&piece, &board, 1, 0));
        let piece = Tetromino { y: 18, ..piece };
        assert!(is_valid_move(&piece, &board, 0, 0));
        assert!(!is_valid_move(&piece, &board, 0, 1));
    }

    #[test]
    fn cells_above_top_skip_occupancy_but_not_walls() {
        let mut board = Board::new();
        board.fill_row(0, PieceKind::Z);
        let piece = Tetromino { y: -2, ..Tetromino::new(PieceKind::O) };
        assert!(is_valid_move(&piece, &board, 0, 0));
        assert!(!is_valid_move(&piece, &board, 0, 1));

        let piece = Tetromino { x: -1, ..piece };
        assert!(!is_valid_move(&piece, &board, 0, 0));
    }

    #[test]
    fn occupied_cells_block() {
        let mut board = Board::new();
        board.set(4, 5, Some(PieceKind::L));
        let piece = Tetromino { y: 3, ..Tetromino::new(PieceKind::O) };
        assert!(is_valid_move(&piece, &board, 0, 0));
        assert!(!is_valid_move(&piece, &board, 0, 1));
        assert!(is_valid_move(&piece, &board, 1, 1));
    }

    #[test]
    fn drop_distance_to_floor() {
        let board = Board::new();
        // O spans rows 0-1 at spawn; lowest valid anchor is 18.
        assert_eq!(drop_distance(&Tetromino::new(PieceKind::O), &board), 18);
        // I fills local row 1 only; lowest valid anchor is 18.
        assert_eq!(drop_distance(&Tetromino::new(PieceKind::I), &board), 18);
    }

    #[test]
    fn rotation_blocked_by_wall_is_rejected() {
        let board = Board::new();
        // Vertical I in column 0 cannot become horizontal without a kick.
        let vertical = Tetromino::new(PieceKind::I).rotated();
        let hugging_wall = Tetromino { x: -2, ..vertical };
        assert!(is_valid_move(&hugging_wall, &board, 0, 0));
        assert_eq!(try_rotate(&hugging_wall, &board), None);

        let free = Tetromino::new(PieceKind::T);
        assert_eq!(try_rotate(&free, &board), Some(free.rotated()));
    }
}
