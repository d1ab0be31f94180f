//! Move representation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::error::ParseMoveError;

/// A single ply from one square to another.
///
/// Carries no capture, check, or promotion metadata. Serializes as the wire
/// descriptor `{"from":{"x":4,"y":6},"to":{"x":4,"y":4}}`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Coordinate,
    pub to: Coordinate,
}

impl Move {
    /// Placeholder (a8 to a8). Never generated.
    pub const NULL: Move = Move::new(Coordinate::new(0, 0), Coordinate::new(0, 0));

    #[inline]
    pub const fn new(from: Coordinate, to: Coordinate) -> Move {
        Move { from, to }
    }

    /// Return `true` if both endpoints are on the board.
    #[inline]
    pub const fn is_in_bounds(self) -> bool {
        self.from.is_in_bounds() && self.to.is_in_bounds()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self})")
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    /// Parse the four-character algebraic form, e.g. `e2e4`.
    fn from_str(s: &str) -> Result<Move, ParseMoveError> {
        if s.len() != 4 || !s.is_ascii() {
            return Err(ParseMoveError::BadLength { len: s.len() });
        }
        let from = s[..2].parse()?;
        let to = s[2..].parse()?;
        Ok(Move::new(from, to))
    }
}
