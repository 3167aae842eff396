//! Geometry primitives: [`Coord`] and [`Dims`].
//!
//! Coordinates are `(row, col)` with rows growing down and columns growing
//! right. They are signed so neighbour arithmetic may step off the grid and
//! be rejected by a bounds check instead of wrapping.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A grid position.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Unit steps in neighbour order: up, down, left, right.
    pub const DIRS: [Coord; 4] = [
        Self::new(-1, 0),
        Self::new(1, 0),
        Self::new(0, -1),
        Self::new(0, 1),
    ];

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a coordinate shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four orthogonal neighbours (up, down, left, right), unchecked.
    #[inline]
    pub fn neighbors_4(self) -> [Coord; 4] {
        Self::DIRS.map(|d| self + d)
    }

    /// Manhattan (L1) distance.
    #[inline]
    pub fn manhattan(self, other: Coord) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }

    /// Whether `other` is one orthogonal step away.
    #[inline]
    pub fn is_adjacent(self, other: Coord) -> bool {
        self.manhattan(other) == 1
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Dims
// ---------------------------------------------------------------------------

/// Grid dimensions. Valid coordinates are `[0, rows) x [0, cols)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dims {
    pub rows: i32,
    pub cols: i32,
}

impl Dims {
    #[inline]
    pub const fn new(rows: i32, cols: i32) -> Self {
        Self { rows, cols }
    }

    /// Total number of cells.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.rows as usize) * (self.cols as usize)
    }

    /// Whether the grid has zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.rows <= 0 || self.cols <= 0
    }

    /// Whether `c` lies inside the grid.
    #[inline]
    pub fn contains(self, c: Coord) -> bool {
        c.row >= 0 && c.row < self.rows && c.col >= 0 && c.col < self.cols
    }

    /// Row-major flat index of `c`, or `None` if out of bounds.
    #[inline]
    pub fn index(self, c: Coord) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some(c.row as usize * self.cols as usize + c.col as usize)
    }

    /// Convert a flat index back to a coordinate.
    #[inline]
    pub fn coord(self, idx: usize) -> Coord {
        let cols = self.cols.max(1) as usize;
        Coord::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// Row-major iterator over every coordinate.
    #[inline]
    pub fn iter(self) -> DimsIter {
        DimsIter {
            dims: self,
            next: 0,
        }
    }
}

impl IntoIterator for Dims {
    type Item = Coord;
    type IntoIter = DimsIter;
    #[inline]
    fn into_iter(self) -> DimsIter {
        self.iter()
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

// ---------------------------------------------------------------------------
// DimsIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the coordinates of a [`Dims`].
#[derive(Clone, Debug)]
pub struct DimsIter {
    dims: Dims,
    next: usize,
}

impl Iterator for DimsIter {
    type Item = Coord;

    #[inline]
    fn next(&mut self) -> Option<Coord> {
        if self.next >= self.dims.len() {
            return None;
        }
        let c = self.dims.coord(self.next);
        self.next += 1;
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.dims.len().saturating_sub(self.next);
        (n, Some(n))
    }
}

impl ExactSizeIterator for DimsIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coord_arithmetic() {
        let a = Coord::new(1, 2);
        let b = Coord::new(3, 4);
        assert_eq!(a + b, Coord::new(4, 6));
        assert_eq!(b - a, Coord::new(2, 2));
        assert_eq!(a.shift(-1, 1), Coord::new(0, 3));
    }

    #[test]
    fn neighbor_order_is_up_down_left_right() {
        let n = Coord::new(5, 5).neighbors_4();
        assert_eq!(
            n,
            [
                Coord::new(4, 5),
                Coord::new(6, 5),
                Coord::new(5, 4),
                Coord::new(5, 6)
            ]
        );
    }

    #[test]
    fn manhattan_and_adjacency() {
        assert_eq!(Coord::new(0, 0).manhattan(Coord::new(2, 2)), 4);
        assert!(Coord::new(1, 1).is_adjacent(Coord::new(1, 2)));
        assert!(!Coord::new(1, 1).is_adjacent(Coord::new(2, 2)));
        assert!(!Coord::new(1, 1).is_adjacent(Coord::new(1, 1)));
    }

    #[test]
    fn coord_orders_row_major() {
        let mut v = vec![Coord::new(1, 0), Coord::new(0, 2), Coord::new(0, 1)];
        v.sort();
        assert_eq!(v, vec![Coord::new(0, 1), Coord::new(0, 2), Coord::new(1, 0)]);
    }

    #[test]
    fn dims_basics() {
        let d = Dims::new(2, 3);
        assert_eq!(d.len(), 6);
        assert!(d.contains(Coord::new(1, 2)));
        assert!(!d.contains(Coord::new(2, 0)));
        assert!(!d.contains(Coord::new(0, -1)));
        assert!(Dims::new(0, 5).is_empty());
        assert_eq!(Dims::new(-1, 5).len(), 0);
    }

    #[test]
    fn index_round_trips_through_coord() {
        let d = Dims::new(4, 7);
        for (i, c) in d.iter().enumerate() {
            assert_eq!(d.index(c), Some(i));
            assert_eq!(d.coord(i), c);
        }
        assert_eq!(d.index(Coord::new(4, 0)), None);
    }

    #[test]
    fn dims_iter_is_row_major() {
        let pts: Vec<_> = Dims::new(2, 3).iter().collect();
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[0], Coord::new(0, 0));
        assert_eq!(pts[3], Coord::new(1, 0));
        assert_eq!(pts[5], Coord::new(1, 2));
        assert_eq!(Dims::new(2, 3).iter().len(), 6);
    }
}
