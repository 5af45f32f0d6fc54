//! Piece catalog and rotation tests

use tetris_lite::core::{base_shape, is_valid_move, try_rotate, Board, Tetromino};
use tetris_lite::types::{PieceKind, BOARD_WIDTH};

fn cells(piece: &Tetromino) -> Vec<(i8, i8)> {
    let mut v: Vec<_> = piece.cells().collect();
    v.sort();
    v
}

#[test]
fn test_catalog_bounding_sizes() {
    assert_eq!(base_shape(PieceKind::I).size(), 4);
    assert_eq!(base_shape(PieceKind::O).size(), 2);
    for kind in [PieceKind::T, PieceKind::S, PieceKind::Z, PieceKind::J, PieceKind::L] {
        assert_eq!(base_shape(kind).size(), 3, "{:?}", kind);
    }
}

#[test]
fn test_spawn_is_centered_at_top() {
    for kind in PieceKind::ALL {
        let piece = Tetromino::new(kind);
        let size = piece.shape.size() as i8;
        assert_eq!(piece.x, BOARD_WIDTH as i8 / 2 - size / 2, "{:?}", kind);
        assert_eq!(piece.y, 0);
    }
}

#[test]
fn test_t_rotates_clockwise() {
    // .#.      .#.
    // ###  ->  .##
    // ...      .#.
    let t = Tetromino {
        x: 0,
        y: 0,
        ..Tetromino::new(PieceKind::T)
    };
    assert_eq!(cells(&t), vec![(0, 1), (1, 0), (1, 1), (2, 1)]);
    assert_eq!(cells(&t.rotated()), vec![(1, 0), (1, 1), (1, 2), (2, 1)]);
}

#[test]
fn test_i_rotates_to_vertical() {
    let i = Tetromino {
        x: 0,
        y: 0,
        ..Tetromino::new(PieceKind::I)
    };
    let vertical = i.rotated();
    let xs: Vec<i8> = vertical.cells().map(|(x, _)| x).collect();
    assert!(xs.iter().all(|x| *x == xs[0]));
    assert_eq!(vertical.cells().count(), 4);
}

#[test]
fn test_o_rotation_is_identity() {
    let o = Tetromino::new(PieceKind::O);
    assert_eq!(o.rotated(), o);
}

#[test]
fn test_rotation_keeps_anchor() {
    for kind in PieceKind::ALL {
        let p = Tetromino::new(kind).shifted(1, 5);
        let r = p.rotated();
        assert_eq!((r.x, r.y), (p.x, p.y));
    }
}

#[test]
fn test_rotation_against_wall_is_rejected() {
    let board = Board::new();
    // Vertical I hugging the left wall; its horizontal form would poke out.
    let vertical = Tetromino::new(PieceKind::I).rotated();
    let column = vertical.cells().next().map(|(x, _)| x).unwrap_or(0);
    let against_wall = vertical.shifted(-column, 5);
    assert!(is_valid_move(&against_wall, &board, 0, 0));
    assert!(try_rotate(&against_wall, &board).is_none());
}
