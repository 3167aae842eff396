use gridpath_core::{Coord, Grid, SearchState};

use crate::frontier::Frontier;
use crate::trace::{Trace, endpoints};

/// Compute the shortest path from `start` to `finish` using A*.
///
/// The open list is ordered by `distance + heuristic`, where the heuristic
/// is the Manhattan distance to `finish`. It is admissible and consistent
/// for 4-way unit-cost movement, so the returned path is optimal. Ties go
/// to the node closer to the finish, then to the one discovered first.
///
/// Each node's heuristic is computed the first time the search touches it
/// and recorded in its [`NodeSearch`](gridpath_core::NodeSearch).
pub fn astar(grid: &Grid, start: Coord, finish: Coord) -> Trace {
    let Some((si, fi)) = endpoints(grid, start, finish) else {
        return Trace::empty(grid, start, finish);
    };
    let dims = grid.dims();
    let mut state = SearchState::new(dims);
    let mut visited = Vec::new();

    let h0 = estimate(&mut state, si, start, finish);
    state.at_mut(si).distance = 0.0;
    let mut open = Frontier::new();
    open.push(si, h0, h0);

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

        let tentative_g = current.f - current.h + 1;
        for np in grid.neighbors_iter(cp) {
            if !grid.is_passable(np) {
                continue;
            }
            let Some(ni) = dims.index(np) else {
                continue;
            };
            let n = state.at(ni);
            if n.visited || f64::from(tentative_g) >= n.distance {
                continue;
            }
            let h = estimate(&mut state, ni, np, finish);
            let n = state.at_mut(ni);
            n.distance = f64::from(tentative_g);
            n.previous = Some(cp);
            open.push(ni, tentative_g + h, h);
        }
    }

    Trace {
        start,
        finish,
        visited,
        state,
    }
}

/// Manhattan estimate for the node at `idx`, cached in its search record.
fn estimate(state: &mut SearchState, idx: usize, p: Coord, finish: Coord) -> u32 {
    let n = state.at_mut(idx);
    if n.heuristic.is_infinite() {
        n.heuristic = f64::from(p.manhattan(finish));
    }
    n.heuristic as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dijkstra::dijkstra;

    #[test]
    fn open_3x3_path_has_five_nodes() {
        let g = Grid::from_ascii("S..\n...\n..F").unwrap();
        let t = astar(&g, g.start(), g.finish());
        assert_eq!(t.visited.first(), Some(&g.start()));
        assert_eq!(t.visited.last(), Some(&g.finish()));
        assert_eq!(t.path().len(), 5);
    }

    #[test]
    fn heuristic_is_manhattan_and_lazy() {
        let g = Grid::from_ascii("S....\n.....\n....F").unwrap();
        let t = astar(&g, g.start(), g.finish());
        assert_eq!(t.state.get(g.start()).unwrap().heuristic, 6.0);
        for (c, n) in t.state.iter() {
            if n.distance.is_finite() {
                assert_eq!(n.heuristic, f64::from(c.manhattan(g.finish())));
            } else {
                assert!(n.heuristic.is_infinite());
            }
        }
    }

    #[test]
    fn visits_no_more_than_dijkstra() {
        let g = Grid::from_ascii(
            "
            S.........
            ..######..
            ..#....#..
            ..#.F..#..
            ..........
            ",
        )
        .unwrap();
        let a = astar(&g, g.start(), g.finish());
        let d = dijkstra(&g, g.start(), g.finish());
        assert_eq!(a.path().len(), d.path().len());
        assert!(a.visited.len() <= d.visited.len());
    }

    #[test]
    fn isolated_finish_gives_empty_path() {
        let g = Grid::from_ascii("S#.\n##.\n..F").unwrap();
        let t = astar(&g, g.start(), g.finish());
        assert!(t.path().is_empty());
    }
}
