//! The board: an 8x8 grid of tiles, stored row-major as `tiles[y][x]`.

use std::fmt;

use crate::color::Color;
use crate::coordinate::{BOARD_SIZE, Coordinate};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;

/// One square's contents: at most one piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Tile {
    piece: Option<Piece>,
}

impl Tile {
    /// An unoccupied tile.
    pub const EMPTY: Tile = Tile { piece: None };

    #[inline]
    pub const fn with(piece: Piece) -> Tile {
        Tile { piece: Some(piece) }
    }

    #[inline]
    pub const fn piece(self) -> Option<Piece> {
        self.piece
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.piece.is_none()
    }
}

/// Piece placement for one game.
///
/// The board performs no coordinate validation of its own: accessors index
/// the grid directly and panic on coordinates off the board. Callers check
/// bounds first (see [`geometry::tile_at`](crate::geometry::tile_at)).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    tiles: [[Tile; 8]; 8],
}

impl Board {
    /// Return a board with no pieces.
    pub const fn empty() -> Board {
        Board {
            tiles: [[Tile::EMPTY; 8]; 8],
        }
    }

    /// Return the standard starting layout.
    ///
    /// Black occupies rows 0 and 1, White rows 6 and 7; rows 2 to 5 are empty.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for color in Color::ALL {
            let back = color.back_row();
            let pawns = color.pawn_row();
            for (x, kind) in PieceKind::BACK_RANK.into_iter().enumerate() {
                let x = x as i8;
                board.place(Coordinate::new(x, back), Piece::new(kind, color));
                board.place(Coordinate::new(x, pawns), Piece::new(PieceKind::Pawn, color));
            }
        }
        board
    }

    /// Return the tile at `coord`.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is off the board.
    #[inline]
    pub fn tile(&self, coord: Coordinate) -> Tile {
        debug_assert!(coord.is_in_bounds(), "tile lookup off the board: {coord}");
        self.tiles[coord.y as usize][coord.x as usize]
    }

    /// Return the piece at `coord`, if any.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is off the board.
    #[inline]
    pub fn piece_at(&self, coord: Coordinate) -> Option<Piece> {
        self.tile(coord).piece()
    }

    /// Put `piece` on `coord`, replacing whatever was there.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is off the board.
    #[inline]
    pub fn place(&mut self, coord: Coordinate, piece: Piece) {
        debug_assert!(coord.is_in_bounds(), "place off the board: {coord}");
        self.tiles[coord.y as usize][coord.x as usize] = Tile::with(piece);
    }

    /// Empty the tile at `coord`, returning the piece that stood there.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is off the board.
    #[inline]
    pub fn clear(&mut self, coord: Coordinate) -> Option<Piece> {
        debug_assert!(coord.is_in_bounds(), "clear off the board: {coord}");
        let tile = &mut self.tiles[coord.y as usize][coord.x as usize];
        tile.piece.take()
    }

    /// Iterate over occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Coordinate, Piece)> + '_ {
        Coordinate::all().filter_map(|coord| self.piece_at(coord).map(|piece| (coord, piece)))
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.pieces().count()
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for printing a board as an 8x8 grid, row 0 at the top.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for y in 0..BOARD_SIZE {
            write!(f, "{}  ", BOARD_SIZE - y)?;
            for x in 0..BOARD_SIZE {
                let c = board
                    .piece_at(Coordinate::new(x, y))
                    .map_or('.', |piece| piece.symbol());
                if x < BOARD_SIZE - 1 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
