//! A single game: the board a session owns and the move cycle run on it.

use rookery_core::{
    Board, Coordinate, EngineError, LegalMoves, Move, MoveList, apply, generate, generate_for,
    select_any,
};

/// One game's board.
///
/// Moves are generated fresh from the current board on every call, so there
/// is no cached move set to go stale between requests.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Game {
    board: Board,
}

impl Game {
    /// Start a game from the standard layout.
    pub fn new() -> Game {
        Game::from_board(Board::starting_position())
    }

    /// Start a game from an arbitrary position.
    pub fn from_board(board: Board) -> Game {
        Game { board }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves for every piece in the current position.
    pub fn legal_moves(&self) -> LegalMoves {
        generate(&self.board)
    }

    /// Moves for the piece on `from` in the current position.
    pub fn moves_from(&self, from: Coordinate) -> Result<MoveList, EngineError> {
        rookery_core::geometry::ensure_in_bounds(from)?;
        Ok(generate_for(&self.board, from))
    }

    /// Apply `mv` if it is pseudo-legal in the current position.
    pub fn submit(&mut self, mv: Move) -> Result<(), EngineError> {
        let legal = self.legal_moves();
        apply(&mut self.board, &legal, mv)
    }

    /// Pick a move in the current position without playing it.
    pub fn suggest(&self) -> Result<Move, EngineError> {
        select_any(&self.legal_moves())
    }

    /// Apply `mv`, then suggest a reply on the updated board.
    ///
    /// If the move is rejected the board is unchanged. If the move is applied
    /// but nothing can reply, the move stays applied and
    /// [`EngineError::NoLegalMoves`] is returned.
    pub fn play(&mut self, mv: Move) -> Result<Move, EngineError> {
        self.submit(mv)?;
        self.suggest()
    }
}
