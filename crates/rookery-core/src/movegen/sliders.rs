//! Sliding piece (rook, bishop, queen) move generation.

use crate::board::Board;
use crate::chess_move::Move;
use crate::coordinate::Coordinate;
use crate::geometry::{DIAGONAL, ORTHOGONAL, QUEEN_DIRECTIONS, Step, walk_ray};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;

use super::MoveList;

/// Generate moves along every ray the piece slides on. Queens take the rook
/// rays first, then the bishop rays.
pub(super) fn gen_slider(board: &Board, from: Coordinate, slider: Piece, list: &mut MoveList) {
    let directions: &[Step] = match slider.kind() {
        PieceKind::Rook => &ORTHOGONAL,
        PieceKind::Bishop => &DIAGONAL,
        PieceKind::Queen => &QUEEN_DIRECTIONS,
        _ => &[],
    };

    for &step in directions {
        walk_ray(board, from, step, |to, tile| match tile.piece() {
            None => list.push(Move::new(from, to)),
            Some(occupant) if slider.is_enemy_of(occupant) => list.push(Move::new(from, to)),
            Some(_) => {}
        });
    }
}
