//! Reply selection for auto-play.

use crate::chess_move::Move;
use crate::error::EngineError;
use crate::movegen::LegalMoves;

/// Return the first generated move of the first square, in row-major order,
/// that has any.
///
/// # Errors
///
/// Returns [`EngineError::NoLegalMoves`] if no square has a generated move.
pub fn select_any(legal: &LegalMoves) -> Result<Move, EngineError> {
    legal.moves().next().ok_or(EngineError::NoLegalMoves)
}
