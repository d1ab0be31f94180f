//! Knight move generation.

use crate::board::Board;
use crate::chess_move::Move;
use crate::coordinate::Coordinate;
use crate::geometry::KNIGHT_OFFSETS;
use crate::piece::Piece;

use super::{MoveList, is_open_to};

/// Generate knight jumps from `from`. Each offset is independent; nothing
/// blocks a jump except a friendly piece on the landing square.
pub(super) fn gen_knight(board: &Board, from: Coordinate, knight: Piece, list: &mut MoveList) {
    for (dx, dy) in KNIGHT_OFFSETS {
        let to = from.offset(dx, dy);
        if is_open_to(board, knight, to) {
            list.push(Move::new(from, to));
        }
    }
}
