//! Per-run search state, kept apart from the static grid.
//!
//! Every algorithm run starts from a fresh [`SearchState`], so metadata left
//! behind by one algorithm can never leak into the next.

use crate::geom::{Coord, Dims};
use crate::node::NodeSearch;

/// One [`NodeSearch`] record per grid cell, indexed row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchState {
    dims: Dims,
    nodes: Vec<NodeSearch>,
}

impl SearchState {
    /// Fresh state for a grid of the given dimensions.
    pub fn new(dims: Dims) -> Self {
        Self {
            dims,
            nodes: vec![NodeSearch::UNSEARCHED; dims.len()],
        }
    }

    /// Reset every record to [`NodeSearch::UNSEARCHED`].
    pub fn reset(&mut self) {
        self.nodes.fill(NodeSearch::UNSEARCHED);
    }

    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Record for `c`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, c: Coord) -> Option<&NodeSearch> {
        self.dims.index(c).map(|i| &self.nodes[i])
    }

    #[inline]
    pub fn get_mut(&mut self, c: Coord) -> Option<&mut NodeSearch> {
        self.dims.index(c).map(|i| &mut self.nodes[i])
    }

    /// Record by flat index.
    ///
    /// # Panics
    /// If `idx` is not below `dims().len()`.
    #[inline]
    pub fn at(&self, idx: usize) -> &NodeSearch {
        &self.nodes[idx]
    }

    /// Mutable record by flat index.
    ///
    /// # Panics
    /// If `idx` is not below `dims().len()`.
    #[inline]
    pub fn at_mut(&mut self, idx: usize) -> &mut NodeSearch {
        &mut self.nodes[idx]
    }

    /// Whether `c` was visited by the run that produced this state.
    #[inline]
    pub fn is_visited(&self, c: Coord) -> bool {
        self.get(c).is_some_and(|n| n.visited)
    }

    /// Number of visited nodes.
    pub fn visited_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.visited).count()
    }

    /// Row-major iterator over `(Coord, &NodeSearch)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &NodeSearch)> + '_ {
        let dims = self.dims;
        self.nodes
            .iter()
            .enumerate()
            .map(move |(i, n)| (dims.coord(i), n))
    }

    /// Reconstruct the path from `start` to `finish` by walking `previous`
    /// links backwards from `finish`.
    ///
    /// Returns an empty vector if the chain does not end at `start` (the
    /// finish was never reached). A chain that revisits a node is treated as
    /// unreachable.
    pub fn path_to(&self, start: Coord, finish: Coord) -> Vec<Coord> {
        let Some(mut ci) = self.dims.index(finish) else {
            return Vec::new();
        };
        if self.dims.index(start).is_none() {
            return Vec::new();
        }

        let mut seen = vec![false; self.nodes.len()];
        let mut path = Vec::new();
        loop {
            if seen[ci] {
                log::warn!("predecessor cycle through {}", self.dims.coord(ci));
                return Vec::new();
            }
            seen[ci] = true;
            let c = self.dims.coord(ci);
            path.push(c);
            if c == start {
                break;
            }
            match self.nodes[ci].previous.and_then(|p| self.dims.index(p)) {
                Some(pi) => ci = pi,
                None => return Vec::new(),
            }
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(state: &mut SearchState, links: &[(Coord, Coord)]) {
        for &(c, prev) in links {
            let n = state.get_mut(c).unwrap();
            n.previous = Some(prev);
            n.visited = true;
        }
    }

    #[test]
    fn path_follows_previous_links() {
        let mut s = SearchState::new(Dims::new(2, 2));
        chain(
            &mut s,
            &[
                (Coord::new(0, 1), Coord::new(0, 0)),
                (Coord::new(1, 1), Coord::new(0, 1)),
            ],
        );
        assert_eq!(
            s.path_to(Coord::new(0, 0), Coord::new(1, 1)),
            vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 1)]
        );
    }

    #[test]
    fn unreached_finish_gives_empty_path() {
        let s = SearchState::new(Dims::new(3, 3));
        assert!(s.path_to(Coord::new(0, 0), Coord::new(2, 2)).is_empty());
    }

    #[test]
    fn finish_equal_to_start_is_single_node() {
        let s = SearchState::new(Dims::new(3, 3));
        assert_eq!(
            s.path_to(Coord::new(1, 1), Coord::new(1, 1)),
            vec![Coord::new(1, 1)]
        );
    }

    #[test]
    fn cycle_is_rejected() {
        let mut s = SearchState::new(Dims::new(1, 3));
        chain(
            &mut s,
            &[
                (Coord::new(0, 1), Coord::new(0, 2)),
                (Coord::new(0, 2), Coord::new(0, 1)),
            ],
        );
        assert!(s.path_to(Coord::new(0, 0), Coord::new(0, 2)).is_empty());
    }

    #[test]
    fn reset_clears_everything() {
        let mut s = SearchState::new(Dims::new(2, 2));
        chain(&mut s, &[(Coord::new(0, 1), Coord::new(0, 0))]);
        s.get_mut(Coord::new(0, 0)).unwrap().distance = 0.0;
        assert_eq!(s.visited_count(), 1);
        s.reset();
        assert_eq!(s, SearchState::new(Dims::new(2, 2)));
    }
}
