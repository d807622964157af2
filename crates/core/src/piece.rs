//! Piece module - shape matrices and the active piece
//!
//! Each kind has a single canonical matrix. Rotation is the plain 90°
//! clockwise matrix transform (transpose, then reverse the row order), so a
//! rotated shape may change its bounding box: the I piece turns from 1x4 into
//! 4x1.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, BOARD_WIDTH};

/// Largest side of any shape matrix
pub const MAX_SHAPE: usize = 4;

/// Absolute cells of a piece. Every kind has exactly four.
pub type PieceCells = ArrayVec<(i8, i8), 4>;

/// A small filled/empty matrix, `rows` x `cols`, stored in a fixed 4x4 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    grid: [[bool; MAX_SHAPE]; MAX_SHAPE],
}

impl Shape {
    /// Build a shape from text rows; `1` or `#` marks a filled cell.
    fn parse(rows: &[&[u8]]) -> Self {
        let mut grid = [[false; MAX_SHAPE]; MAX_SHAPE];
        for (r, line) in rows.iter().enumerate() {
            for (c, &b) in line.iter().enumerate() {
                grid[r][c] = b == b'1' || b == b'#';
            }
        }
        Self {
            rows: rows.len() as u8,
            cols: rows[0].len() as u8,
            grid,
        }
    }

    /// The spawn orientation of `kind`.
    pub fn canonical(kind: PieceKind) -> Self {
        match kind {
            PieceKind::I => Self::parse(&[b"1111"]),
            PieceKind::O => Self::parse(&[b"11", b"11"]),
            PieceKind::T => Self::parse(&[b"010", b"111"]),
            PieceKind::S => Self::parse(&[b"011", b"110"]),
            PieceKind::Z => Self::parse(&[b"110", b"011"]),
            PieceKind::J => Self::parse(&[b"100", b"111"]),
            PieceKind::L => Self::parse(&[b"001", b"111"]),
        }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether the local cell `(col, row)` is filled.
    pub fn is_filled(&self, col: usize, row: usize) -> bool {
        row < self.rows as usize && col < self.cols as usize && self.grid[row][col]
    }

    /// Rotate 90° clockwise: transpose, then reverse rows.
    ///
    /// Row `c` of the result is column `c` of the source read bottom-up.
    pub fn rotate_cw(&self) -> Self {
        let rows = self.rows as usize;
        let cols = self.cols as usize;
        let mut grid = [[false; MAX_SHAPE]; MAX_SHAPE];
        for (c, out_row) in grid.iter_mut().enumerate().take(cols) {
            for (i, out) in out_row.iter_mut().enumerate().take(rows) {
                *out = self.grid[rows - 1 - i][c];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            grid,
        }
    }

    /// Local `(col, row)` offsets of the filled cells, row-major.
    pub fn filled(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.rows as usize).flat_map(move |r| {
            (0..self.cols as usize)
                .filter(move |&c| self.grid[r][c])
                .map(move |c| (c as i8, r as i8))
        })
    }
}

/// A piece instance: kind, current shape and board-relative origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub col: i8,
    pub row: i8,
}

impl Piece {
    /// A piece of `kind` horizontally centered with its top on row 0.
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = Shape::canonical(kind);
        Self {
            kind,
            shape,
            col: spawn_col(&shape),
            row: 0,
        }
    }

    /// Same origin and kind, shape rotated clockwise.
    pub fn rotate_cw(&self) -> Self {
        Self {
            shape: self.shape.rotate_cw(),
            ..*self
        }
    }

    /// Same shape, origin moved by `(dc, dr)`.
    pub fn shifted(&self, dc: i8, dr: i8) -> Self {
        Self {
            col: self.col + dc,
            row: self.row + dr,
            ..*self
        }
    }

    /// Absolute `(col, row)` of every filled cell.
    pub fn cells(&self) -> PieceCells {
        self.shape
            .filled()
            .map(|(dc, dr)| (self.col + dc, self.row + dr))
            .collect()
    }
}

/// Column that centers `shape` on the board.
pub fn spawn_col(shape: &Shape) -> i8 {
    ((BOARD_WIDTH - shape.cols()) / 2) as i8
}
