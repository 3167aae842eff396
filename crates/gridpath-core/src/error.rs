//! Errors raised by grid construction and mutation.

use crate::geom::{Coord, Dims};

/// Errors that can occur when building, parsing, or editing a [`Grid`](crate::Grid).
///
/// An unreachable finish is not an error: searches report it as an empty
/// path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// A coordinate lies outside the grid.
    #[error("coordinate {coord} is outside the {dims} grid")]
    InvalidCoordinate { coord: Coord, dims: Dims },
    /// The grid would have no cells.
    #[error("grid must have at least one row and one column")]
    EmptyGrid,
    /// Start and finish were given the same coordinate.
    #[error("start and finish cannot both be at {0}")]
    StartIsFinish(Coord),
    /// Attempt to place a wall on the start or finish node.
    #[error("cannot place a wall on the endpoint at {0}")]
    EndpointWall(Coord),
    /// A search endpoint is a wall.
    #[error("endpoint {0} is blocked by a wall")]
    Blocked(Coord),
    /// ASCII grid lines have different widths.
    #[error("line {line} has width {found}, expected {expected}")]
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// ASCII grid contains an unknown character.
    #[error("invalid character \u{201c}{ch}\u{201d} at {coord}")]
    InvalidChar { ch: char, coord: Coord },
    #[error("grid has no start node")]
    MissingStart,
    #[error("grid has no finish node")]
    MissingFinish,
    #[error("second start node at {0}")]
    DuplicateStart(Coord),
    #[error("second finish node at {0}")]
    DuplicateFinish(Coord),
}
