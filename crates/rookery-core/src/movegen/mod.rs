//! Pseudo-legal move generation.
//!
//! [`generate`] runs one full pass over the board and returns a fresh
//! [`LegalMoves`]. Nothing is cached on the board or the pieces, so a result
//! describes exactly the position it was computed from.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::chess_move::Move;
use crate::coordinate::Coordinate;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;

use self::king::gen_king;
use self::knights::gen_knight;
use self::pawns::gen_pawn;
use self::sliders::gen_slider;

/// Most moves a single piece can have on an 8x8 board (a centralized queen).
pub const MAX_PIECE_MOVES: usize = 27;

/// Stack-allocated buffer for the moves of one piece.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct MoveList {
    moves: [Move; MAX_PIECE_MOVES],
    len: u8,
}

impl MoveList {
    /// Create an empty move list.
    pub const fn new() -> MoveList {
        MoveList {
            moves: [Move::NULL; MAX_PIECE_MOVES],
            len: 0,
        }
    }

    /// Push a move onto the list.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        debug_assert!((self.len as usize) < MAX_PIECE_MOVES);
        self.moves[self.len as usize] = mv;
        self.len += 1;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len as usize]
    }

    /// Return `true` if some move in the list lands on `to`.
    #[inline]
    pub fn reaches(&self, to: Coordinate) -> bool {
        self.as_slice().iter().any(|mv| mv.to == to)
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;
    #[inline]
    fn index(&self, index: usize) -> &Move {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// Generated moves for every square, in row-major order (`y * 8 + x`).
#[derive(Clone, PartialEq, Eq)]
pub struct LegalMoves {
    by_square: [MoveList; Coordinate::COUNT],
}

impl LegalMoves {
    /// A result with no moves on any square.
    pub const fn none() -> LegalMoves {
        LegalMoves {
            by_square: [MoveList::new(); Coordinate::COUNT],
        }
    }

    /// Moves generated for the piece on `from`. Empty for unoccupied or
    /// off-board squares.
    pub fn get(&self, from: Coordinate) -> &[Move] {
        match from.index() {
            Some(i) => self.by_square[i].as_slice(),
            None => &[],
        }
    }

    /// Return `true` if `mv.to` was generated for the piece on `mv.from`.
    pub fn contains(&self, mv: Move) -> bool {
        mv.from
            .index()
            .is_some_and(|i| self.by_square[i].reaches(mv.to))
    }

    /// Iterate over `(origin, moves)` for every square, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, &[Move])> + '_ {
        Coordinate::all().zip(self.by_square.iter().map(MoveList::as_slice))
    }

    /// Iterate over every generated move, in row-major then generation order.
    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.by_square.iter().flat_map(|list| list.as_slice().iter().copied())
    }

    /// Total number of generated moves.
    pub fn total(&self) -> usize {
        self.by_square.iter().map(MoveList::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_square.iter().all(MoveList::is_empty)
    }
}

impl Default for LegalMoves {
    fn default() -> Self {
        Self::none()
    }
}

impl std::fmt::Debug for LegalMoves {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.iter().filter(|(_, moves)| !moves.is_empty()))
            .finish()
    }
}

/// Generate pseudo-legal moves for every piece on the board.
pub fn generate(board: &Board) -> LegalMoves {
    let mut legal = LegalMoves::none();
    for (from, piece) in board.pieces() {
        if let Some(i) = from.index() {
            gen_piece(board, from, piece, &mut legal.by_square[i]);
        }
    }
    legal
}

/// Generate pseudo-legal moves for the piece on `from` only.
///
/// Returns an empty list for unoccupied or off-board squares.
pub fn generate_for(board: &Board, from: Coordinate) -> MoveList {
    let mut list = MoveList::new();
    if from.is_in_bounds()
        && let Some(piece) = board.piece_at(from)
    {
        gen_piece(board, from, piece, &mut list);
    }
    list
}

fn gen_piece(board: &Board, from: Coordinate, piece: Piece, list: &mut MoveList) {
    match piece.kind() {
        PieceKind::Pawn => gen_pawn(board, from, piece, list),
        PieceKind::Rook | PieceKind::Bishop | PieceKind::Queen => {
            gen_slider(board, from, piece, list)
        }
        PieceKind::Knight => gen_knight(board, from, piece, list),
        PieceKind::King => gen_king(board, from, piece, list),
    }
}

/// A square a non-pawn may land on: on the board, and empty or held by the
/// other side.
#[inline]
fn is_open_to(board: &Board, mover: Piece, to: Coordinate) -> bool {
    to.is_in_bounds()
        && board
            .piece_at(to)
            .is_none_or(|occupant| mover.is_enemy_of(occupant))
}
