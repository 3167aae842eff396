//! Text form of a [`Grid`].
//!
//! Each line is one row. Characters:
//!
//! | char | meaning |
//! |---|---|
//! | `S` | start |
//! | `F` | finish |
//! | `#` | wall |
//! | `.` | open |
//!
//! [`Display`](std::fmt::Display) writes the same characters back, using `o`
//! for open nodes visited by the last run. [`Grid::render_path`] also marks a
//! path with `*`.

use std::fmt;

use crate::error::GridError;
use crate::geom::Coord;
use crate::grid::Grid;

pub const START: char = 'S';
pub const FINISH: char = 'F';
pub const WALL: char = '#';
pub const OPEN: char = '.';
pub const VISITED: char = 'o';
pub const PATH: char = '*';

impl Grid {
    /// Parse a grid from text.
    ///
    /// Leading and trailing whitespace of the whole string is trimmed, as is
    /// surrounding whitespace of each line, so indented literals work. All
    /// lines must have the same width and the text must hold exactly one
    /// start and one finish.
    pub fn from_ascii(s: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = s.trim().lines().map(str::trim).collect();
        let width = lines.first().map_or(0, |l| l.chars().count());
        if width == 0 {
            return Err(GridError::EmptyGrid);
        }

        let mut start = None;
        let mut finish = None;
        let mut walls = Vec::new();

        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(GridError::InconsistentWidth {
                    line: row,
                    expected: width,
                    found,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let c = Coord::new(row as i32, col as i32);
                match ch {
                    START => {
                        if start.replace(c).is_some() {
                            return Err(GridError::DuplicateStart(c));
                        }
                    }
                    FINISH => {
                        if finish.replace(c).is_some() {
                            return Err(GridError::DuplicateFinish(c));
                        }
                    }
                    WALL => walls.push(c),
                    OPEN => {}
                    _ => return Err(GridError::InvalidChar { ch, coord: c }),
                }
            }
        }

        let start = start.ok_or(GridError::MissingStart)?;
        let finish = finish.ok_or(GridError::MissingFinish)?;
        let mut grid = Grid::new(lines.len() as i32, width as i32, start, finish)?;
        for c in walls {
            grid.set_wall(c, true)?;
        }
        Ok(grid)
    }

    /// Render the grid with `path` overlaid as [`PATH`] characters.
    pub fn render_path(&self, path: &[Coord]) -> String {
        let mut out = String::with_capacity(self.dims().len() + self.rows() as usize);
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                let c = Coord::new(row, col);
                let ch = self.glyph(c);
                if (ch == OPEN || ch == VISITED) && path.contains(&c) {
                    out.push(PATH);
                } else {
                    out.push(ch);
                }
            }
            if row + 1 < self.rows() {
                out.push('\n');
            }
        }
        out
    }

    fn glyph(&self, c: Coord) -> char {
        match self.node(c) {
            Some(n) if n.is_start => START,
            Some(n) if n.is_finish => FINISH,
            Some(n) if n.is_wall => WALL,
            Some(_) if self.search().is_visited(c) => VISITED,
            _ => OPEN,
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_path(&[]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOARD: &str = "
        S.#.
        ..#.
        ...F
    ";

    #[test]
    fn parse_board() {
        let g = Grid::from_ascii(BOARD).unwrap();
        assert_eq!((g.rows(), g.cols()), (3, 4));
        assert_eq!(g.start(), Coord::new(0, 0));
        assert_eq!(g.finish(), Coord::new(2, 3));
        assert_eq!(
            g.walls().collect::<Vec<_>>(),
            vec![Coord::new(0, 2), Coord::new(1, 2)]
        );
    }

    #[test]
    fn display_round_trips() {
        let g = Grid::from_ascii(BOARD).unwrap();
        assert_eq!(g.to_string(), "S.#.\n..#.\n...F");
        assert_eq!(Grid::from_ascii(&g.to_string()).unwrap(), g);
    }

    #[test]
    fn render_path_marks_open_cells_only() {
        let g = Grid::from_ascii("S..\n...\n..F").unwrap();
        let path = [
            Coord::new(0, 0),
            Coord::new(0, 1),
            Coord::new(0, 2),
            Coord::new(1, 2),
            Coord::new(2, 2),
        ];
        assert_eq!(g.render_path(&path), "S**\n..*\n..F");
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            Grid::from_ascii("S.\n...F"),
            Err(GridError::InconsistentWidth {
                line: 1,
                expected: 2,
                found: 4
            })
        ));
        assert_eq!(
            Grid::from_ascii("S.x\n..F"),
            Err(GridError::InvalidChar {
                ch: 'x',
                coord: Coord::new(0, 2)
            })
        );
        assert_eq!(Grid::from_ascii("...\n..F"), Err(GridError::MissingStart));
        assert_eq!(Grid::from_ascii("S..\n..."), Err(GridError::MissingFinish));
        assert_eq!(
            Grid::from_ascii("S.S\n..F"),
            Err(GridError::DuplicateStart(Coord::new(0, 2)))
        );
        assert_eq!(Grid::from_ascii("   "), Err(GridError::EmptyGrid));
    }
}
