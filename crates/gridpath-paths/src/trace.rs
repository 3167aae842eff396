use gridpath_core::{Coord, Grid, SearchState};

/// Raw result of one search: the visitation order plus the search state it
/// left behind.
#[derive(Clone, Debug)]
pub struct Trace {
    pub start: Coord,
    pub finish: Coord,
    /// Nodes in the order the algorithm examined them.
    pub visited: Vec<Coord>,
    pub state: SearchState,
}

impl Trace {
    pub(crate) fn empty(grid: &Grid, start: Coord, finish: Coord) -> Self {
        Self {
            start,
            finish,
            visited: Vec::new(),
            state: SearchState::new(grid.dims()),
        }
    }

    /// Whether the search examined the finish node.
    #[inline]
    pub fn reached(&self) -> bool {
        self.visited.last() == Some(&self.finish)
    }

    /// Path from start to finish along predecessor links, or empty if the
    /// finish was not reached.
    pub fn path(&self) -> Vec<Coord> {
        if !self.reached() {
            return Vec::new();
        }
        self.state.path_to(self.start, self.finish)
    }
}

/// Flat indices of `start` and `finish`, or `None` if either is off the grid
/// or the start is a wall.
pub(crate) fn endpoints(grid: &Grid, start: Coord, finish: Coord) -> Option<(usize, usize)> {
    let dims = grid.dims();
    let si = dims.index(start)?;
    let fi = dims.index(finish)?;
    if !grid.is_passable(start) {
        return None;
    }
    Some((si, fi))
}
