use gridpath_core::{Coord, Grid, SearchState};

use crate::trace::{Trace, endpoints};

/// Depth-first traversal from `start` until `finish` is popped.
///
/// The path it discovers is generally not the shortest. Neighbours are
/// pushed in up, down, left, right order, so the last one pushed (right) is
/// explored first. A node is marked visited and linked to its parent when
/// it is pushed, which keeps it from being pushed twice. Walls are never
/// pushed.
///
/// `distance` records depth in the DFS tree.
pub fn dfs(grid: &Grid, start: Coord, finish: Coord) -> Trace {
    let Some((si, fi)) = endpoints(grid, start, finish) else {
        return Trace::empty(grid, start, finish);
    };
    let dims = grid.dims();
    let mut state = SearchState::new(dims);
    let mut visited = Vec::new();

    {
        let s = state.at_mut(si);
        s.visited = true;
        s.distance = 0.0;
    }
    let mut stack = vec![si];

    while let Some(ci) = stack.pop() {
        let cp = dims.coord(ci);
        visited.push(cp);
        if ci == fi {
            break;
        }

        let depth = state.at(ci).distance + 1.0;
        for np in grid.neighbors_iter(cp) {
            if !grid.is_passable(np) {
                continue;
            }
            let Some(ni) = dims.index(np) else {
                continue;
            };
            let n = state.at_mut(ni);
            if n.visited {
                continue;
            }
            n.visited = true;
            n.previous = Some(cp);
            n.distance = depth;
            stack.push(ni);
        }
    }

    Trace {
        start,
        finish,
        visited,
        state,
    }
}
