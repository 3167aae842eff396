//! Shortest-path searches over a [`gridpath_core::Grid`].
//!
//! Four independent procedures, each producing an ordered visitation
//! [`Trace`] from which the start-to-finish path is reconstructed:
//!
//! - **Dijkstra** uniform-cost search ([`dijkstra`])
//! - **A\*** with a Manhattan heuristic ([`astar`])
//! - **Depth-first** traversal, not path-optimal ([`dfs`])
//! - **Floyd–Warshall** all-pairs tables queried for one pair ([`floyd_warshall`])
//!
//! Walls are impassable for all of them. [`run_algorithm`] dispatches on
//! [`Algorithm`], times the search and stores its metadata back on the grid;
//! [`Playback`] schedules the result for animation.
//!
//! | Algorithm | Optimal | Trace |
//! |---|---|---|
//! | Dijkstra | yes | settled nodes, ascending distance |
//! | A\* | yes | settled nodes, ascending `distance + heuristic` |
//! | DFS | no | pop order |
//! | Floyd–Warshall | yes | the path itself |

mod algorithm;
mod astar;
mod dfs;
mod dijkstra;
mod floyd_warshall;
mod frontier;
pub mod playback;
mod run;
mod trace;

pub use algorithm::{Algorithm, ParseAlgorithmError};
pub use astar::astar;
pub use dfs::dfs;
pub use dijkstra::dijkstra;
pub use floyd_warshall::floyd_warshall;
pub use playback::{Frame, FrameKind, Playback, PlaybackConfig};
pub use run::{Outcome, run_algorithm, run_algorithm_between};
pub use trace::Trace;
