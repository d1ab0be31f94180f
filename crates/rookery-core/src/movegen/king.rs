//! King move generation.

use crate::board::Board;
use crate::chess_move::Move;
use crate::coordinate::Coordinate;
use crate::geometry::KING_OFFSETS;
use crate::piece::Piece;

use super::{MoveList, is_open_to};

/// Generate the king's single steps. No castling, and no test for whether the
/// destination is attacked.
pub(super) fn gen_king(board: &Board, from: Coordinate, king: Piece, list: &mut MoveList) {
    for (dx, dy) in KING_OFFSETS {
        let to = from.offset(dx, dy);
        if is_open_to(board, king, to) {
            list.push(Move::new(from, to));
        }
    }
}
