//! Error types for move application, move parsing, and placement parsing.

use crate::chess_move::Move;

/// Errors raised by the rule engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The destination is not among the moves generated for the origin.
    #[error("invalid move: {mv}")]
    InvalidMove {
        /// The rejected move.
        mv: Move,
    },
    /// A coordinate lies outside `[0, 7]` on either axis.
    #[error("coordinate ({x},{y}) is off the board")]
    ///
    /// Axes are wider than [`Coordinate`](crate::Coordinate) so that wire
    /// input beyond its range reports here too.
    OutOfBounds { x: i64, y: i64 },
    /// No square on the board has any generated move.
    #[error("no legal moves available")]
    NoLegalMoves,
}

/// Errors from parsing algebraic squares and moves (`e2`, `e2e4`).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseMoveError {
    #[error("expected 2 characters per square, found {len}")]
    BadLength { len: usize },
    #[error("invalid file '{file}'")]
    BadFile { file: char },
    #[error("invalid rank '{rank}'")]
    BadRank { rank: char },
}

/// Errors from parsing a piece-placement string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    /// The placement does not have exactly 8 rows.
    #[error("expected 8 rows in placement, found {found}")]
    WrongRowCount { found: usize },
    /// A row describes more or fewer than 8 squares.
    #[error("row {row} describes {length} squares, expected 8")]
    BadRowLength {
        /// Zero-based row index, which is also the board's `y`.
        row: usize,
        length: usize,
    },
    /// An unrecognized character appeared in a row.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar { character: char },
}

#[cfg(test)]
mod tests {
    use super::{EngineError, PlacementError};
    use crate::chess_move::Move;
    use crate::coordinate::Coordinate;

    #[test]
    fn engine_error_display() {
        let mv = Move::new(Coordinate::new(4, 6), Coordinate::new(4, 3));
        assert_eq!(
            EngineError::InvalidMove { mv }.to_string(),
            "invalid move: e2e5"
        );
        assert_eq!(
            EngineError::OutOfBounds { x: 8, y: -1 }.to_string(),
            "coordinate (8,-1) is off the board"
        );
        assert_eq!(EngineError::NoLegalMoves.to_string(), "no legal moves available");
    }

    #[test]
    fn placement_error_display() {
        let err = PlacementError::BadRowLength { row: 3, length: 7 };
        assert_eq!(err.to_string(), "row 3 describes 7 squares, expected 8");
    }
}
