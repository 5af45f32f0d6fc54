//! Pieces module - tetromino shape catalog and bitmask rotation
//!
//! Every piece kind maps to a square bitmask (2x2, 3x3 or 4x4). Rotation is a pure
//! transform of the bitmask: transpose, then reverse each row. There is no rotation
//! state and no kick table; the shape itself is the rotation.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::types::{PieceKind, BOARD_WIDTH};

/// Offset of a single mino relative to the piece anchor (x, y)
pub type MinoOffset = (i8, i8);

/// Largest bounding square in the catalog.
pub const MAX_SHAPE_SIZE: usize = 4;

/// Square bitmask shape. Bit `x` of `rows[y]` marks a filled cell at (x, y).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shape {
    size: u8,
    rows: [u8; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Build a shape from row strings, `#` for a filled cell.
    ///
    /// The number of rows is the bounding size; each row must be that wide.
    pub const fn from_rows(rows: &[&str]) -> Self {
        let size = rows.len();
        assert!(size >= 1 && size <= MAX_SHAPE_SIZE);
        let mut bits = [0u8; MAX_SHAPE_SIZE];
        let mut y = 0;
        while y < size {
            let row = rows[y].as_bytes();
            assert!(row.len() == size);
            let mut x = 0;
            while x < size {
                if row[x] == b'#' {
                    bits[y] |= 1 << x;
                }
                x += 1;
            }
            y += 1;
        }
        Self {
            size: size as u8,
            rows: bits,
        }
    }

    /// Side length of the bounding square
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Whether the local cell (x, y) is filled
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        x < self.size as usize && y < self.size as usize && self.rows[y] & (1 << x) != 0
    }

    /// Offsets of every filled cell, row by row.
    pub fn minos(&self) -> ArrayVec<MinoOffset, { MAX_SHAPE_SIZE * MAX_SHAPE_SIZE }> {
        let mut out = ArrayVec::new();
        let n = self.size as usize;
        for y in 0..n {
            for x in 0..n {
                if self.is_filled(x, y) {
                    out.push((x as i8, y as i8));
                }
            }
        }
        out
    }

    /// Rotate 90° clockwise: transpose the bitmask, then reverse each row.
    pub fn rotated(&self) -> Self {
        let n = self.size as usize;
        let mut rows = [0u8; MAX_SHAPE_SIZE];
        for (y, row) in rows.iter_mut().enumerate().take(n) {
            for x in 0..n {
                // transposed[y][x] = self[x][y]; reversing the row reads column n-1-x.
                if self.is_filled(y, n - 1 - x) {
                    *row |= 1 << x;
                }
            }
        }
        Self {
            size: self.size,
            rows,
        }
    }
}

const I_SHAPE: Shape = Shape::from_rows(&["....", "####", "....", "...."]);
const O_SHAPE: Shape = Shape::from_rows(&["##", "##"]);
const T_SHAPE: Shape = Shape::from_rows(&[".#.", "###", "..."]);
const S_SHAPE: Shape = Shape::from_rows(&[".##", "##.", "..."]);
const Z_SHAPE: Shape = Shape::from_rows(&["##.", ".##", "..."]);
const J_SHAPE: Shape = Shape::from_rows(&["#..", "###", "..."]);
const L_SHAPE: Shape = Shape::from_rows(&["..#", "###", "..."]);

/// Catalog base rotation for a piece kind
pub fn base_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::Z => Z_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
    }
}

/// Horizontally centered spawn column for a shape.
pub fn spawn_x(shape: &Shape) -> i8 {
    (BOARD_WIDTH / 2) as i8 - (shape.size() / 2) as i8
}

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Create a new piece in its base rotation at the spawn anchor
    pub fn new(kind: PieceKind) -> Self {
        let shape = base_shape(kind);
        Self {
            kind,
            shape,
            x: spawn_x(&shape),
            y: 0,
        }
    }

    /// Same piece with its shape rotated clockwise; the anchor does not move.
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotated(),
            ..*self
        }
    }

    /// Same piece moved by (dx, dy)
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Board coordinates of every filled cell
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .minos()
            .into_iter()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_catalog_shape_has_four_minos() {
        for kind in PieceKind::ALL {
            assert_eq!(base_shape(kind).minos().len(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn catalog_sizes() {
        assert_eq!(base_shape(PieceKind::I).size(), 4);
        assert_eq!(base_shape(PieceKind::O).size(), 2);
        for kind in [PieceKind::T, PieceKind::S, PieceKind::Z, PieceKind::J, PieceKind::L] {
            assert_eq!(base_shape(kind).size(), 3);
        }
    }

    #[test]
    fn t_rotates_clockwise() {
        let t = base_shape(PieceKind::T);
        let expected = Shape::from_rows(&[".#.", ".##", ".#."]);
        assert_eq!(t.rotated(), expected);
    }

    #[test]
    fn i_rotates_into_vertical_bar() {
        let i = base_shape(PieceKind::I).rotated();
        assert_eq!(i.minos().as_slice(), &[(2, 0), (2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn o_is_rotation_invariant() {
        let o = base_shape(PieceKind::O);
        assert_eq!(o.rotated(), o);
    }

    #[test]
    fn four_rotations_are_identity() {
        for kind in PieceKind::ALL {
            let s = base_shape(kind);
            assert_eq!(s.rotated().rotated().rotated().rotated(), s, "{:?}", kind);
        }
    }

    #[test]
    fn spawn_anchor_is_centered() {
        assert_eq!(Tetromino::new(PieceKind::I).x, 3);
        assert_eq!(Tetromino::new(PieceKind::O).x, 4);
        assert_eq!(Tetromino::new(PieceKind::T).x, 4);
        assert_eq!(Tetromino::new(PieceKind::T).y, 0);
    }

    #[test]
    fn cells_are_offset_by_anchor() {
        let piece = Tetromino::new(PieceKind::O).shifted(1, 2);
        let cells: Vec<_> = piece.cells().collect();
        assert_eq!(cells, vec![(5, 2), (6, 2), (5, 3), (6, 3)]);
    }
}
