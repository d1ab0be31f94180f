//! Piece-placement notation for [`Board`].
//!
//! Uses the FEN piece-placement field: eight rows separated by `/`, digits
//! for runs of empty squares, uppercase for White. The first row written is
//! row 0 (Black's back rank).

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::coordinate::{BOARD_SIZE, Coordinate};
use crate::error::PlacementError;
use crate::piece::Piece;

/// Placement string of the standard starting layout.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

impl FromStr for Board {
    type Err = PlacementError;

    fn from_str(placement: &str) -> Result<Board, PlacementError> {
        let rows: Vec<&str> = placement.trim().split('/').collect();
        if rows.len() != BOARD_SIZE as usize {
            return Err(PlacementError::WrongRowCount { found: rows.len() });
        }

        let mut board = Board::empty();
        for (row, text) in rows.iter().enumerate() {
            let mut x: usize = 0;
            for c in text.chars() {
                if let Some(run) = c.to_digit(10) {
                    if !(1..=8).contains(&run) {
                        return Err(PlacementError::InvalidPieceChar { character: c });
                    }
                    x += run as usize;
                    continue;
                }

                let piece = Piece::from_symbol(c)
                    .ok_or(PlacementError::InvalidPieceChar { character: c })?;
                if x >= BOARD_SIZE as usize {
                    return Err(PlacementError::BadRowLength { row, length: x + 1 });
                }
                board.place(Coordinate::new(x as i8, row as i8), piece);
                x += 1;
            }

            if x != BOARD_SIZE as usize {
                return Err(PlacementError::BadRowLength { row, length: x });
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..BOARD_SIZE {
            let mut empty_run = 0u8;
            for x in 0..BOARD_SIZE {
                match self.piece_at(Coordinate::new(x, y)) {
                    Some(piece) => {
                        if empty_run > 0 {
                            write!(f, "{empty_run}")?;
                            empty_run = 0;
                        }
                        write!(f, "{}", piece.symbol())?;
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                write!(f, "{empty_run}")?;
            }
            if y < BOARD_SIZE - 1 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}
