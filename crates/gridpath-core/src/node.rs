//! Grid cells and their per-run search metadata.

use crate::geom::Coord;

/// One grid cell.
///
/// Nodes are small values; toggling a wall replaces the node stored in the
/// grid rather than mutating shared state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub coord: Coord,
    pub is_start: bool,
    pub is_finish: bool,
    pub is_wall: bool,
}

impl Node {
    /// An open, non-endpoint node at `coord`.
    #[inline]
    pub const fn new(coord: Coord) -> Self {
        Self {
            coord,
            is_start: false,
            is_finish: false,
            is_wall: false,
        }
    }

    #[inline]
    pub const fn row(&self) -> i32 {
        self.coord.row
    }

    #[inline]
    pub const fn col(&self) -> i32 {
        self.coord.col
    }

    /// Whether this node is the start or the finish.
    #[inline]
    pub const fn is_endpoint(&self) -> bool {
        self.is_start || self.is_finish
    }

    /// Return a copy with the wall flag flipped.
    #[inline]
    #[must_use]
    pub const fn with_wall_toggled(self) -> Self {
        Self {
            is_wall: !self.is_wall,
            ..self
        }
    }
}

/// Search metadata a single algorithm run attaches to one node.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NodeSearch {
    /// Cost from the start. `f64::INFINITY` until reached.
    pub distance: f64,
    /// Estimated remaining cost to the finish (A* only).
    pub heuristic: f64,
    pub visited: bool,
    /// Predecessor on the discovered path.
    pub previous: Option<Coord>,
}

impl NodeSearch {
    /// Metadata of a node no search has touched.
    pub const UNSEARCHED: Self = Self {
        distance: f64::INFINITY,
        heuristic: f64::INFINITY,
        visited: false,
        previous: None,
    };
}

impl Default for NodeSearch {
    fn default() -> Self {
        Self::UNSEARCHED
    }
}
