//! Rotation resolver with horizontal wall kicks
//!
//! A rotation is the clockwise matrix transform at the same origin. When that
//! pose collides, the rotated shape is nudged sideways by each entry of
//! [`KICK_OFFSETS`] in order and the first legal pose wins. There are no
//! vertical (floor) kicks.

use crate::collision::is_legal;
use crate::board::Board;
use crate::piece::Piece;
use crate::types::KICK_OFFSETS;

/// Rotate `piece` clockwise with wall kicks.
///
/// Returns `None` when neither the plain rotation nor any kick is legal; the
/// caller keeps the original piece in that case.
pub fn try_rotate(board: &Board, piece: &Piece) -> Option<Piece> {
    let rotated = piece.rotate_cw();
    if is_legal(board, &rotated) {
        return Some(rotated);
    }

    KICK_OFFSETS
        .iter()
        .map(|&dc| rotated.shifted(dc, 0))
        .find(|kicked| is_legal(board, kicked))
}
