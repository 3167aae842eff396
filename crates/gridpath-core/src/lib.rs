//! **gridpath-core** — grid model for the pathfinding visualizer.
//!
//! This crate provides the static board that the search algorithms in
//! `gridpath-paths` operate on: coordinates, nodes with wall and endpoint
//! flags, the [`Grid`] itself, and the per-run [`SearchState`] that records
//! distances, visitation and predecessor links.

pub mod ascii;
pub mod config;
pub mod error;
pub mod geom;
pub mod grid;
pub mod node;
pub mod search;

pub use config::{DEFAULT_COLS, DEFAULT_FINISH, DEFAULT_ROWS, DEFAULT_START, GridConfig};
pub use error::GridError;
pub use geom::{Coord, Dims};
pub use grid::{Grid, NodeChange, diff};
pub use node::{Node, NodeSearch};
pub use search::SearchState;
