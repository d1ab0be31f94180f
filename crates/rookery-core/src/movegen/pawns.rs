//! Pawn move generation.

use crate::board::Board;
use crate::chess_move::Move;
use crate::coordinate::Coordinate;
use crate::piece::Piece;

use super::MoveList;

/// Generate pawn moves: single push, double push from the starting row, then
/// diagonal captures toward -x and +x.
///
/// Pushes need empty squares; the double push also needs the square it passes
/// over. Captures need an enemy on the destination and are never generated
/// onto empty squares. No en passant, no promotion.
pub(super) fn gen_pawn(board: &Board, from: Coordinate, pawn: Piece, list: &mut MoveList) {
    let color = pawn.color();
    let dy = color.forward();

    let max_steps = if from.y == color.pawn_row() { 2 } else { 1 };
    let mut to = from;
    for _ in 0..max_steps {
        to = to.offset(0, dy);
        if !to.is_in_bounds() || board.piece_at(to).is_some() {
            break;
        }
        list.push(Move::new(from, to));
    }

    for dx in [-1, 1] {
        let to = from.offset(dx, dy);
        if !to.is_in_bounds() {
            continue;
        }
        if board.piece_at(to).is_some_and(|target| pawn.is_enemy_of(target)) {
            list.push(Move::new(from, to));
        }
    }
}
