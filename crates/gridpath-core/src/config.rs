//! Board layout configuration.

use crate::geom::Coord;

/// Rows of the default board.
pub const DEFAULT_ROWS: i32 = 20;
/// Columns of the default board.
pub const DEFAULT_COLS: i32 = 50;
/// Start node of the default board.
pub const DEFAULT_START: Coord = Coord::new(5, 1);
/// Finish node of the default board.
pub const DEFAULT_FINISH: Coord = Coord::new(15, 49);

/// Dimensions and endpoints used to build a [`Grid`](crate::Grid).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    pub rows: i32,
    pub cols: i32,
    pub start: Coord,
    pub finish: Coord,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            start: DEFAULT_START,
            finish: DEFAULT_FINISH,
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let c = GridConfig {
            rows: 3,
            cols: 4,
            start: Coord::new(0, 0),
            finish: Coord::new(2, 3),
        };
        let json = serde_json::to_string(&c).unwrap();
        let back: GridConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
