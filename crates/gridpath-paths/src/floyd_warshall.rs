//! All-pairs shortest paths, queried for a single start/finish pair.
//!
//! Floyd–Warshall builds dense `V x V` distance and successor matrices over
//! every node of the grid, so it costs O(V³) time and O(V²) memory. It is
//! only practical for boards of a few thousand cells.

use gridpath_core::{Coord, Grid, SearchState};

use crate::trace::{Trace, endpoints};

const INF: u32 = u32::MAX;
const NO_NEXT: u32 = u32::MAX;

/// Dense all-pairs tables for one grid.
struct Matrices {
    n: usize,
    dist: Vec<u32>,
    next: Vec<u32>,
}

impl Matrices {
    /// Unit edges between orthogonally adjacent open nodes. Wall nodes have
    /// no edges and not even a zero self-distance.
    fn adjacency(grid: &Grid) -> Self {
        let dims = grid.dims();
        let n = dims.len();
        let mut m = Self {
            n,
            dist: vec![INF; n * n],
            next: vec![NO_NEXT; n * n],
        };
        for i in 0..n {
            let c = dims.coord(i);
            if !grid.is_passable(c) {
                continue;
            }
            m.dist[i * n + i] = 0;
            for nc in grid.neighbors_iter(c) {
                if !grid.is_passable(nc) {
                    continue;
                }
                if let Some(j) = dims.index(nc) {
                    m.dist[i * n + j] = 1;
                    m.next[i * n + j] = j as u32;
                }
            }
        }
        m
    }

    fn relax(&mut self) {
        let n = self.n;
        for k in 0..n {
            for i in 0..n {
                let dik = self.dist[i * n + k];
                if dik == INF {
                    continue;
                }
                for j in 0..n {
                    let dkj = self.dist[k * n + j];
                    if dkj == INF {
                        continue;
                    }
                    let through = dik + dkj;
                    if through < self.dist[i * n + j] {
                        self.dist[i * n + j] = through;
                        self.next[i * n + j] = self.next[i * n + k];
                    }
                }
            }
        }
    }

    #[inline]
    fn dist(&self, i: usize, j: usize) -> u32 {
        self.dist[i * self.n + j]
    }

    #[inline]
    fn next(&self, i: usize, j: usize) -> Option<usize> {
        match self.next[i * self.n + j] {
            NO_NEXT => None,
            k => Some(k as usize),
        }
    }
}

/// Shortest path from `start` to `finish` via Floyd–Warshall.
///
/// After the matrices are built, the path is walked by following
/// `next[current][finish]`; every node on that walk is marked visited and
/// appended to the trace. When the finish is reachable the trace therefore
/// *is* the path. Otherwise the walk stops at the start and the path is
/// empty.
pub fn floyd_warshall(grid: &Grid, start: Coord, finish: Coord) -> Trace {
    let Some((si, fi)) = endpoints(grid, start, finish) else {
        return Trace::empty(grid, start, finish);
    };
    let dims = grid.dims();
    let mut m = Matrices::adjacency(grid);
    m.relax();

    let mut state = SearchState::new(dims);
    let mut visited = Vec::new();
    let mut ci = si;
    let mut prev = None;
    loop {
        let cp = dims.coord(ci);
        let s = state.at_mut(ci);
        s.visited = true;
        s.previous = prev;
        s.distance = f64::from(m.dist(si, ci));
        visited.push(cp);
        if ci == fi {
            break;
        }
        let Some(ni) = m.next(ci, fi) else {
            break;
        };
        if state.at(ni).visited {
            log::warn!("successor cycle at {} while walking to {finish}", dims.coord(ni));
            break;
        }
        prev = Some(cp);
        ci = ni;
    }

    Trace {
        start,
        finish,
        visited,
        state,
    }
}
