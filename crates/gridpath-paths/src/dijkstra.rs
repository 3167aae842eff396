use gridpath_core::{Coord, Grid, SearchState};

use crate::frontier::Frontier;
use crate::trace::{Trace, endpoints};

/// Uniform-cost Dijkstra search from `start` to `finish`.
///
/// Every step between orthogonally adjacent open nodes costs 1; walls are
/// never entered. Nodes are appended to the trace as they are settled, in
/// ascending distance order with ties going to the node discovered first.
/// The search stops once `finish` is settled or the frontier is exhausted.
pub fn dijkstra(grid: &Grid, start: Coord, finish: Coord) -> Trace {
    let Some((si, fi)) = endpoints(grid, start, finish) else {
        return Trace::empty(grid, start, finish);
    };
    let dims = grid.dims();
    let mut state = SearchState::new(dims);
    let mut visited = Vec::new();

    state.at_mut(si).distance = 0.0;
    let mut open = Frontier::new();
    open.push(si, 0, 0);

    while let Some(current) = open.pop() {
        let ci = current.idx;
        // Skip stale entries.
        if state.at(ci).visited {
            continue;
        }
        let cp = dims.coord(ci);
        state.at_mut(ci).visited = true;
        visited.push(cp);
        if ci == fi {
            break;
        }

        let tentative = current.f + 1;
        for np in grid.neighbors_iter(cp) {
            if !grid.is_passable(np) {
                continue;
            }
            let Some(ni) = dims.index(np) else {
                continue;
            };
            let n = state.at_mut(ni);
            if n.visited || f64::from(tentative) >= n.distance {
                continue;
            }
            n.distance = f64::from(tentative);
            n.previous = Some(cp);
            open.push(ni, tentative, 0);
        }
    }

    Trace {
        start,
        finish,
        visited,
        state,
    }
}
