use std::time::{Duration, Instant};

use gridpath_core::{Coord, Grid, GridError};

use crate::algorithm::Algorithm;

/// Everything a visualizer needs to animate one run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Outcome {
    pub algorithm: Algorithm,
    /// Nodes in the order the algorithm examined them.
    pub visited: Vec<Coord>,
    /// Start-to-finish path, or empty if the finish is unreachable.
    pub path: Vec<Coord>,
    /// Time spent searching, excluding path reconstruction.
    pub elapsed: Duration,
}

impl Outcome {
    #[inline]
    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }

    /// Search time in fractional milliseconds.
    #[inline]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Run `kind` between the grid's own start and finish nodes.
///
/// Search metadata from earlier runs is discarded first; the new run's
/// metadata is left on the grid for inspection.
pub fn run_algorithm(kind: Algorithm, grid: &mut Grid) -> Outcome {
    let (start, finish) = (grid.start(), grid.finish());
    execute(kind, grid, start, finish)
}

/// Run `kind` between explicit endpoints.
///
/// Both endpoints must be in bounds, open, and distinct.
pub fn run_algorithm_between(
    kind: Algorithm,
    grid: &mut Grid,
    start: Coord,
    finish: Coord,
) -> Result<Outcome, GridError> {
    for c in [start, finish] {
        let node = grid.node(c).ok_or(GridError::InvalidCoordinate {
            coord: c,
            dims: grid.dims(),
        })?;
        if node.is_wall {
            return Err(GridError::Blocked(c));
        }
    }
    if start == finish {
        return Err(GridError::StartIsFinish(start));
    }
    Ok(execute(kind, grid, start, finish))
}

fn execute(kind: Algorithm, grid: &mut Grid, start: Coord, finish: Coord) -> Outcome {
    grid.clear_search_state();

    let began = Instant::now();
    let trace = kind.search(grid, start, finish);
    let elapsed = began.elapsed();

    let path = trace.path();
    log::debug!(
        "{kind}: {start} -> {finish}, visited {} nodes, path {} nodes, {:.3} ms",
        trace.visited.len(),
        path.len(),
        elapsed.as_secs_f64() * 1000.0,
    );

    let visited = trace.visited;
    grid.set_search(trace.state);
    Outcome {
        algorithm: kind,
        visited,
        path,
        elapsed,
    }
}
