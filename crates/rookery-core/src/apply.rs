//! Move application against a generated move set.

use tracing::debug;

use crate::board::Board;
use crate::chess_move::Move;
use crate::error::EngineError;
use crate::geometry::ensure_in_bounds;
use crate::movegen::LegalMoves;

/// Apply `mv` to `board` if it was generated for the piece on `mv.from`.
///
/// On success the origin is emptied and the moving piece is written to the
/// destination, replacing any occupant. No other tile changes.
///
/// # Errors
///
/// - [`EngineError::OutOfBounds`] if either endpoint is off the board. Checked
///   before the board is touched.
/// - [`EngineError::InvalidMove`] if `legal` has no such move for the origin,
///   including when the origin is empty. The board is left unchanged.
pub fn apply(board: &mut Board, legal: &LegalMoves, mv: Move) -> Result<(), EngineError> {
    ensure_in_bounds(mv.from)?;
    ensure_in_bounds(mv.to)?;

    if !legal.contains(mv) {
        debug!(%mv, "rejected move");
        return Err(EngineError::InvalidMove { mv });
    }

    let piece = board.clear(mv.from).ok_or(EngineError::InvalidMove { mv })?;
    let captured = board.piece_at(mv.to);
    board.place(mv.to, piece);
    debug!(%mv, ?piece, ?captured, "applied move");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::apply;
    use crate::board::Board;
    use crate::chess_move::Move;
    use crate::coordinate::Coordinate;
    use crate::error::EngineError;
    use crate::movegen::{LegalMoves, generate};
    use crate::piece::Piece;

    fn changed_tiles(before: &Board, after: &Board) -> Vec<Coordinate> {
        Coordinate::all()
            .filter(|&c| before.tile(c) != after.tile(c))
            .collect()
    }

    #[test]
    fn legal_move_changes_exactly_two_tiles() {
        let before = Board::starting_position();
        let mut board = before;
        let legal = generate(&board);
        let mv: Move = "e2e4".parse().unwrap();

        apply(&mut board, &legal, mv).unwrap();

        assert_eq!(changed_tiles(&before, &board), vec![mv.to, mv.from]);
        assert_eq!(board.piece_at(mv.from), None);
        assert_eq!(board.piece_at(mv.to), Some(Piece::WHITE_PAWN));
    }

    #[test]
    fn capture_replaces_occupant() {
        let mut board = Board::empty();
        let rook = Coordinate::new(0, 7);
        let target = Coordinate::new(0, 2);
        board.place(rook, Piece::WHITE_ROOK);
        board.place(target, Piece::BLACK_KNIGHT);
        let legal = generate(&board);

        apply(&mut board, &legal, Move::new(rook, target)).unwrap();
        assert_eq!(board.piece_at(target), Some(Piece::WHITE_ROOK));
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn illegal_move_leaves_board_untouched() {
        let before = Board::starting_position();
        let mut board = before;
        let legal = generate(&board);
        let mv: Move = "e2e5".parse().unwrap();

        assert_eq!(apply(&mut board, &legal, mv), Err(EngineError::InvalidMove { mv }));
        assert_eq!(board, before);
    }

    #[test]
    fn move_from_empty_square_is_invalid() {
        let before = Board::starting_position();
        let mut board = before;
        let legal = generate(&board);
        let mv: Move = "e4e5".parse().unwrap();

        assert!(matches!(apply(&mut board, &legal, mv), Err(EngineError::InvalidMove { .. })));
        assert_eq!(board, before);
    }

    #[test]
    fn destination_claimed_from_wrong_origin_is_invalid() {
        let before = Board::starting_position();
        let mut board = before;
        let legal = generate(&board);
        // e3 is reachable from e2, not from d2.
        let mv = Move::new(Coordinate::new(3, 6), Coordinate::new(4, 5));

        assert!(matches!(apply(&mut board, &legal, mv), Err(EngineError::InvalidMove { .. })));
        assert_eq!(board, before);
    }

    #[test]
    fn out_of_bounds_rejected_before_lookup() {
        let before = Board::starting_position();
        let mut board = before;
        let legal = generate(&board);

        let off_origin = Move::new(Coordinate::new(-1, 6), Coordinate::new(0, 5));
        assert_eq!(
            apply(&mut board, &legal, off_origin),
            Err(EngineError::OutOfBounds { x: -1, y: 6 })
        );
        let off_dest = Move::new(Coordinate::new(4, 6), Coordinate::new(4, 8));
        assert_eq!(
            apply(&mut board, &legal, off_dest),
            Err(EngineError::OutOfBounds { x: 4, y: 8 })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn nothing_applies_without_generation() {
        let before = Board::starting_position();
        let mut board = before;
        let mv: Move = "e2e4".parse().unwrap();
        assert!(apply(&mut board, &LegalMoves::none(), mv).is_err());
        assert_eq!(board, before);
    }
}
