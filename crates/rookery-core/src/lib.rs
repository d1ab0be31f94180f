//! Rule engine for an 8x8 two-color board game: board state, pseudo-legal
//! move generation, move application, and reply selection.

mod apply;
mod board;
mod chess_move;
mod color;
mod coordinate;
mod error;
pub mod geometry;
mod movegen;
mod piece;
mod piece_kind;
mod placement;
mod select;

pub use apply::apply;
pub use board::{Board, PrettyBoard, Tile};
pub use chess_move::Move;
pub use color::Color;
pub use coordinate::{BOARD_SIZE, Coordinate};
pub use error::{EngineError, ParseMoveError, PlacementError};
pub use movegen::{LegalMoves, MAX_PIECE_MOVES, MoveList, generate, generate_for};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use placement::STARTING_PLACEMENT;
pub use select::select_any;
