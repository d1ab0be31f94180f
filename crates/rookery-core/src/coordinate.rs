//! Board coordinates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseMoveError;

/// Width and height of the board.
pub const BOARD_SIZE: i8 = 8;

/// A square on the board as `(x, y)`: `x` is the file (0 = a), `y` is the
/// row (0 = rank 8, Black's back rank; 7 = rank 1, White's back rank).
///
/// The type does not enforce range. Coordinates off the board are
/// representable so offset arithmetic can step past an edge; every consumer
/// checks [`is_in_bounds`](Coordinate::is_in_bounds) before indexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i8,
    pub y: i8,
}

impl Coordinate {
    /// Total number of on-board coordinates.
    pub const COUNT: usize = 64;

    #[inline]
    pub const fn new(x: i8, y: i8) -> Coordinate {
        Coordinate { x, y }
    }

    /// Return `true` iff both axes lie in `[0, 8)`.
    #[inline]
    pub const fn is_in_bounds(self) -> bool {
        self.x >= 0 && self.x < BOARD_SIZE && self.y >= 0 && self.y < BOARD_SIZE
    }

    /// Return this coordinate shifted by `(dx, dy)`. The result may be off the board.
    #[inline]
    pub const fn offset(self, dx: i8, dy: i8) -> Coordinate {
        Coordinate::new(self.x.wrapping_add(dx), self.y.wrapping_add(dy))
    }

    /// Row-major index (`y * 8 + x`), or `None` when off the board.
    #[inline]
    pub const fn index(self) -> Option<usize> {
        if self.is_in_bounds() {
            Some(self.y as usize * BOARD_SIZE as usize + self.x as usize)
        } else {
            None
        }
    }

    /// Inverse of [`index`](Coordinate::index).
    #[inline]
    pub const fn from_index(index: usize) -> Option<Coordinate> {
        if index < Self::COUNT {
            Some(Coordinate::new(
                (index % BOARD_SIZE as usize) as i8,
                (index / BOARD_SIZE as usize) as i8,
            ))
        } else {
            None
        }
    }

    /// Iterate over all 64 on-board coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..Self::COUNT).filter_map(Coordinate::from_index)
    }
}

impl fmt::Display for Coordinate {
    /// Algebraic form (`e2`) for on-board squares, `(x,y)` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_in_bounds() {
            let file = (b'a' + self.x as u8) as char;
            write!(f, "{}{}", file, BOARD_SIZE - self.y)
        } else {
            write!(f, "({},{})", self.x, self.y)
        }
    }
}

impl FromStr for Coordinate {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Coordinate, ParseMoveError> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(ParseMoveError::BadLength { len: bytes.len() });
        }
        let (file, rank) = (bytes[0], bytes[1]);
        if !(b'a'..=b'h').contains(&file) {
            return Err(ParseMoveError::BadFile { file: file as char });
        }
        if !(b'1'..=b'8').contains(&rank) {
            return Err(ParseMoveError::BadRank { rank: rank as char });
        }
        Ok(Coordinate::new(
            (file - b'a') as i8,
            BOARD_SIZE - (rank - b'0') as i8,
        ))
    }
}
