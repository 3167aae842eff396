//! The [`Grid`] type: a fixed-size board of [`Node`]s plus the search state
//! of the most recent run.
//!
//! A grid is a plain owned value. Editing requires `&mut`, so only one
//! writer (a wall toggle, a board clear, or an algorithm run) can touch it
//! at a time.

use crate::config::GridConfig;
use crate::error::GridError;
use crate::geom::{Coord, Dims};
use crate::node::{Node, NodeSearch};
use crate::search::SearchState;

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A rectangular board with exactly one start and one finish node.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    dims: Dims,
    nodes: Vec<Node>,
    start: Coord,
    finish: Coord,
    search: SearchState,
}

impl Grid {
    /// Build a `rows` x `cols` grid with no walls.
    ///
    /// Fails if the grid is empty, an endpoint is out of bounds, or
    /// `start == finish`.
    pub fn new(rows: i32, cols: i32, start: Coord, finish: Coord) -> Result<Self, GridError> {
        let dims = Dims::new(rows, cols);
        if dims.is_empty() {
            return Err(GridError::EmptyGrid);
        }
        for c in [start, finish] {
            if !dims.contains(c) {
                return Err(GridError::InvalidCoordinate { coord: c, dims });
            }
        }
        if start == finish {
            return Err(GridError::StartIsFinish(start));
        }

        let nodes = dims
            .iter()
            .map(|c| Node {
                is_start: c == start,
                is_finish: c == finish,
                ..Node::new(c)
            })
            .collect();

        Ok(Self {
            dims,
            nodes,
            start,
            finish,
            search: SearchState::new(dims),
        })
    }

    /// Build a grid from a [`GridConfig`].
    pub fn from_config(config: &GridConfig) -> Result<Self, GridError> {
        Self::new(config.rows, config.cols, config.start, config.finish)
    }

    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.dims.rows
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.dims.cols
    }

    #[inline]
    pub fn start(&self) -> Coord {
        self.start
    }

    #[inline]
    pub fn finish(&self) -> Coord {
        self.finish
    }

    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.dims.contains(c)
    }

    /// The node at `c`, or `None` if out of bounds.
    #[inline]
    pub fn node(&self, c: Coord) -> Option<&Node> {
        self.dims.index(c).map(|i| &self.nodes[i])
    }

    /// All nodes in row-major order.
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Whether `c` is in bounds and not a wall.
    #[inline]
    pub fn is_passable(&self, c: Coord) -> bool {
        self.node(c).is_some_and(|n| !n.is_wall)
    }

    /// Coordinates of every wall, row-major.
    pub fn walls(&self) -> impl Iterator<Item = Coord> + '_ {
        self.nodes.iter().filter(|n| n.is_wall).map(|n| n.coord)
    }

    // -----------------------------------------------------------------------
    // Walls
    // -----------------------------------------------------------------------

    fn checked_index(&self, c: Coord) -> Result<usize, GridError> {
        self.dims.index(c).ok_or(GridError::InvalidCoordinate {
            coord: c,
            dims: self.dims,
        })
    }

    /// Flip the wall flag at `c`, replacing the node. Returns the new node.
    ///
    /// The start and finish nodes cannot become walls.
    pub fn toggle_wall(&mut self, c: Coord) -> Result<Node, GridError> {
        let i = self.checked_index(c)?;
        if self.nodes[i].is_endpoint() {
            return Err(GridError::EndpointWall(c));
        }
        let node = self.nodes[i].with_wall_toggled();
        self.nodes[i] = node;
        log::trace!("wall at {c} -> {}", node.is_wall);
        Ok(node)
    }

    /// Return a copy of this grid with the wall at `c` flipped.
    pub fn with_wall_toggled(&self, c: Coord) -> Result<Self, GridError> {
        let mut g = self.clone();
        g.toggle_wall(c)?;
        Ok(g)
    }

    /// Set the wall flag at `c`. Returns whether the node changed.
    pub fn set_wall(&mut self, c: Coord, wall: bool) -> Result<bool, GridError> {
        let i = self.checked_index(c)?;
        if self.nodes[i].is_endpoint() {
            return Err(GridError::EndpointWall(c));
        }
        if self.nodes[i].is_wall == wall {
            return Ok(false);
        }
        self.nodes[i] = Node {
            is_wall: wall,
            ..self.nodes[i]
        };
        Ok(true)
    }

    /// Remove every wall.
    pub fn clear_walls(&mut self) {
        for n in self.nodes.iter_mut().filter(|n| n.is_wall) {
            *n = Node {
                is_wall: false,
                ..*n
            };
        }
        log::trace!("walls cleared");
    }

    // -----------------------------------------------------------------------
    // Search state
    // -----------------------------------------------------------------------

    /// Search state left by the most recent run.
    #[inline]
    pub fn search(&self) -> &SearchState {
        &self.search
    }

    /// Search metadata of the node at `c`.
    #[inline]
    pub fn search_at(&self, c: Coord) -> Option<&NodeSearch> {
        self.search.get(c)
    }

    /// Store the state produced by a run.
    ///
    /// # Panics
    /// If `state` was built for different dimensions.
    pub fn set_search(&mut self, state: SearchState) {
        assert_eq!(state.dims(), self.dims, "search state dimensions mismatch");
        self.search = state;
    }

    /// Reset distance, heuristic, visited and predecessor of every node.
    /// Walls and endpoints are untouched.
    pub fn clear_search_state(&mut self) {
        self.search.reset();
        log::trace!("search state cleared");
    }

    /// Return a copy with cleared search state.
    #[must_use]
    pub fn cleared(&self) -> Self {
        let mut g = self.clone();
        g.clear_search_state();
        g
    }

    // -----------------------------------------------------------------------
    // Neighbours
    // -----------------------------------------------------------------------

    /// In-bounds orthogonal neighbours of `c` (up, down, left, right).
    ///
    /// Walls and visited nodes are not filtered here.
    pub fn neighbors(&self, c: Coord) -> Result<Vec<Coord>, GridError> {
        self.checked_index(c)?;
        Ok(self.neighbors_iter(c).collect())
    }

    /// Iterator form of [`neighbors`](Self::neighbors). For an out-of-bounds
    /// `c` only the neighbours inside the grid are yielded.
    #[inline]
    pub fn neighbors_iter(&self, c: Coord) -> impl Iterator<Item = Coord> + '_ {
        let dims = self.dims;
        c.neighbors_4().into_iter().filter(move |&n| dims.contains(n))
    }
}

// ---------------------------------------------------------------------------
// Change detection
// ---------------------------------------------------------------------------

/// A node whose value differs between two grids.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeChange {
    pub before: Node,
    pub after: Node,
}

/// Nodes that differ between two same-sized grids, row-major.
///
/// Grids of different dimensions are compared over their common area.
pub fn diff(prev: &Grid, curr: &Grid) -> Vec<NodeChange> {
    curr.dims
        .iter()
        .filter_map(|c| {
            let before = *prev.node(c)?;
            let after = *curr.node(c)?;
            (before != after).then_some(NodeChange { before, after })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid3() -> Grid {
        Grid::new(3, 3, Coord::new(0, 0), Coord::new(2, 2)).unwrap()
    }

    #[test]
    fn new_marks_endpoints() {
        let g = grid3();
        assert_eq!(g.nodes().len(), 9);
        assert!(g.node(Coord::new(0, 0)).unwrap().is_start);
        assert!(g.node(Coord::new(2, 2)).unwrap().is_finish);
        assert_eq!(g.nodes().iter().filter(|n| n.is_start).count(), 1);
        assert_eq!(g.nodes().iter().filter(|n| n.is_finish).count(), 1);
        assert!(g.nodes().iter().all(|n| !n.is_wall));
        assert!(g.search_at(Coord::new(1, 1)).unwrap().distance.is_infinite());
    }

    #[test]
    fn new_rejects_degenerate_layouts() {
        let c = Coord::new(1, 1);
        assert_eq!(Grid::new(3, 3, c, c), Err(GridError::StartIsFinish(c)));
        assert_eq!(Grid::new(0, 3, c, Coord::ZERO), Err(GridError::EmptyGrid));
        assert!(matches!(
            Grid::new(3, 3, Coord::new(3, 0), c),
            Err(GridError::InvalidCoordinate { .. })
        ));
    }

    #[test]
    fn default_config_builds() {
        let g = Grid::from_config(&GridConfig::default()).unwrap();
        assert_eq!(g.dims(), Dims::new(20, 50));
        assert_eq!(g.start(), Coord::new(5, 1));
        assert_eq!(g.finish(), Coord::new(15, 49));
    }

    #[test]
    fn toggle_wall_is_an_involution() {
        let g = grid3();
        let once = g.with_wall_toggled(Coord::new(1, 1)).unwrap();
        assert!(once.node(Coord::new(1, 1)).unwrap().is_wall);
        let twice = once.with_wall_toggled(Coord::new(1, 1)).unwrap();
        assert_eq!(twice, g);
    }

    #[test]
    fn toggle_wall_rejects_endpoints_and_out_of_bounds() {
        let mut g = grid3();
        assert_eq!(
            g.toggle_wall(Coord::new(0, 0)),
            Err(GridError::EndpointWall(Coord::new(0, 0)))
        );
        assert_eq!(
            g.toggle_wall(Coord::new(2, 2)),
            Err(GridError::EndpointWall(Coord::new(2, 2)))
        );
        assert!(matches!(
            g.toggle_wall(Coord::new(-1, 0)),
            Err(GridError::InvalidCoordinate { .. })
        ));
        assert_eq!(g, grid3());
    }

    #[test]
    fn set_wall_reports_changes() {
        let mut g = grid3();
        assert_eq!(g.set_wall(Coord::new(0, 1), true), Ok(true));
        assert_eq!(g.set_wall(Coord::new(0, 1), true), Ok(false));
        assert_eq!(g.walls().collect::<Vec<_>>(), vec![Coord::new(0, 1)]);
        g.clear_walls();
        assert_eq!(g.walls().count(), 0);
    }

    #[test]
    fn clear_search_state_is_idempotent_and_keeps_walls() {
        let mut g = grid3();
        g.toggle_wall(Coord::new(1, 0)).unwrap();
        let mut state = SearchState::new(g.dims());
        let n = state.get_mut(Coord::new(0, 1)).unwrap();
        n.distance = 1.0;
        n.visited = true;
        n.previous = Some(Coord::new(0, 0));
        g.set_search(state);

        let once = g.cleared();
        let twice = once.cleared();
        assert_eq!(once, twice);
        assert_eq!(once.nodes(), g.nodes());
        assert!(!once.search().is_visited(Coord::new(0, 1)));
    }

    #[test]
    fn neighbors_stay_in_bounds() {
        let g = grid3();
        assert_eq!(
            g.neighbors(Coord::new(0, 0)).unwrap(),
            vec![Coord::new(1, 0), Coord::new(0, 1)]
        );
        assert_eq!(
            g.neighbors(Coord::new(1, 1)).unwrap(),
            vec![
                Coord::new(0, 1),
                Coord::new(2, 1),
                Coord::new(1, 0),
                Coord::new(1, 2)
            ]
        );
        assert!(g.neighbors(Coord::new(5, 5)).is_err());
    }

    #[test]
    fn neighbors_include_walls() {
        let mut g = grid3();
        g.toggle_wall(Coord::new(0, 1)).unwrap();
        assert!(g.neighbors(Coord::new(0, 0)).unwrap().contains(&Coord::new(0, 1)));
        assert!(!g.is_passable(Coord::new(0, 1)));
    }

    #[test]
    fn diff_lists_replaced_nodes() {
        let a = grid3();
        let b = a.with_wall_toggled(Coord::new(1, 2)).unwrap();
        let changes = diff(&a, &b);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].after.coord, Coord::new(1, 2));
        assert!(!changes[0].before.is_wall);
        assert!(changes[0].after.is_wall);
        assert!(diff(&a, &a).is_empty());
    }
}
