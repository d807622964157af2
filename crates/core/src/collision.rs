//! Collision rules
//!
//! [`is_legal`] is the one placement predicate. Movement, rotation, spawning
//! and the ghost projection all go through it.

use crate::board::Board;
use crate::piece::Piece;
use crate::types::BOARD_HEIGHT;

/// Whether `piece` may occupy its current pose on `board`.
///
/// Every filled cell must be within the side walls, above the floor, and on
/// an empty cell. Cells above row 0 are allowed and never collide.
pub fn is_legal(board: &Board, piece: &Piece) -> bool {
    piece.cells().iter().all(|&(col, row)| {
        if col < 0 || col >= board.width() as i8 || row >= BOARD_HEIGHT as i8 {
            return false;
        }
        row < 0 || !board.is_occupied(col, row)
    })
}

/// Whether `piece` shifted by `(dc, dr)` would be legal.
pub fn can_move(board: &Board, piece: &Piece, dc: i8, dr: i8) -> bool {
    is_legal(board, &piece.shifted(dc, dr))
}

/// Rows the piece can fall before the next step down would be illegal.
pub fn drop_distance(board: &Board, piece: &Piece) -> u8 {
    let mut distance = 0u8;
    while can_move(board, piece, 0, distance as i8 + 1) {
        distance += 1;
    }
    distance
}

/// The landing pose: `piece` moved straight down as far as it legally goes.
pub fn ghost(board: &Board, piece: &Piece) -> Piece {
    piece.shifted(0, drop_distance(board, piece) as i8)
}
