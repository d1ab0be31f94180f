//! Geometry primitives: bounds checks, tile lookup, rays, and step tables.
//!
//! All lookups use the board's `[y][x]` storage order through
//! [`Board::tile`]; nothing here indexes the grid any other way.

use crate::board::{Board, Tile};
use crate::coordinate::Coordinate;
use crate::error::EngineError;

/// A `(dx, dy)` step.
pub type Step = (i8, i8);

/// Rook directions, in generation order: +x, -x, +y, -y.
pub const ORTHOGONAL: [Step; 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Bishop directions, in generation order.
pub const DIAGONAL: [Step; 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Queen directions: the rook rays, then the bishop rays.
#[rustfmt::skip]
pub const QUEEN_DIRECTIONS: [Step; 8] = [
    ORTHOGONAL[0], ORTHOGONAL[1], ORTHOGONAL[2], ORTHOGONAL[3],
    DIAGONAL[0], DIAGONAL[1], DIAGONAL[2], DIAGONAL[3],
];

/// Knight jumps, in generation order.
#[rustfmt::skip]
pub const KNIGHT_OFFSETS: [Step; 8] = [
    (1, 2), (2, 1), (2, -1), (1, -2),
    (-1, -2), (-2, -1), (-2, 1), (-1, 2),
];

/// King steps, in generation order (row-major around the origin).
#[rustfmt::skip]
pub const KING_OFFSETS: [Step; 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Return `true` iff both axes of `coord` lie in `[0, 8)`.
#[inline]
pub fn is_in_bounds(coord: Coordinate) -> bool {
    coord.is_in_bounds()
}

/// Return `true` iff the tile holds no piece.
#[inline]
pub fn is_empty(tile: Tile) -> bool {
    tile.is_empty()
}

/// Bounds-checked tile lookup.
///
/// # Errors
///
/// Returns [`EngineError::OutOfBounds`] if `coord` is off the board.
#[inline]
pub fn tile_at(board: &Board, coord: Coordinate) -> Result<Tile, EngineError> {
    ensure_in_bounds(coord)?;
    Ok(board.tile(coord))
}

/// Reject a coordinate that is off the board.
#[inline]
pub fn ensure_in_bounds(coord: Coordinate) -> Result<(), EngineError> {
    if is_in_bounds(coord) {
        Ok(())
    } else {
        Err(EngineError::OutOfBounds {
            x: coord.x.into(),
            y: coord.y.into(),
        })
    }
}

/// The squares reached by repeatedly stepping from an origin, excluding the
/// origin itself. Ends at the board edge; obstruction is the caller's call.
#[derive(Debug, Clone)]
pub struct Ray {
    current: Coordinate,
    step: Step,
}

impl Ray {
    pub fn new(origin: Coordinate, step: Step) -> Ray {
        Ray {
            current: origin,
            step,
        }
    }
}

impl Iterator for Ray {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Coordinate> {
        let next = self.current.offset(self.step.0, self.step.1);
        if !is_in_bounds(next) {
            return None;
        }
        self.current = next;
        Some(next)
    }
}

/// Walk a ray until the first occupied square.
///
/// `visit` is called for every empty square and then once for the first
/// occupied square (with its tile), after which the walk stops.
pub fn walk_ray(
    board: &Board,
    origin: Coordinate,
    step: Step,
    mut visit: impl FnMut(Coordinate, Tile),
) {
    for coord in Ray::new(origin, step) {
        let tile = board.tile(coord);
        visit(coord, tile);
        if !is_empty(tile) {
            break;
        }
    }
}
