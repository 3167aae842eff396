use std::fmt;
use std::str::FromStr;

use gridpath_core::{Coord, Grid};

use crate::trace::Trace;
use crate::{astar, dfs, dijkstra, floyd_warshall};

/// The search procedures a caller can run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Algorithm {
    Dijkstra,
    AStar,
    Dfs,
    FloydWarshall,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Dijkstra,
        Algorithm::AStar,
        Algorithm::Dfs,
        Algorithm::FloydWarshall,
    ];

    /// Whether the algorithm always returns a minimum-length path.
    pub const fn is_optimal(self) -> bool {
        !matches!(self, Algorithm::Dfs)
    }

    /// Run the search without timing it or touching the grid's stored state.
    pub fn search(self, grid: &Grid, start: Coord, finish: Coord) -> Trace {
        match self {
            Algorithm::Dijkstra => dijkstra(grid, start, finish),
            Algorithm::AStar => astar(grid, start, finish),
            Algorithm::Dfs => dfs(grid, start, finish),
            Algorithm::FloydWarshall => floyd_warshall(grid, start, finish),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar => "astar",
            Algorithm::Dfs => "dfs",
            Algorithm::FloydWarshall => "floyd-warshall",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown algorithm \u{201c}{0}\u{201d}")]
pub struct ParseAlgorithmError(pub String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" | "a*" | "a-star" => Ok(Algorithm::AStar),
            "dfs" => Ok(Algorithm::Dfs),
            "floyd-warshall" | "floydwarshall" | "fw" => Ok(Algorithm::FloydWarshall),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}
