use crate::Coord;
use std::fmt;

/// A single board position with a fixed coordinate and a mutable alive state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    coord: Coord,
    alive: bool,
}

impl Cell {
    /// Creates a cell at the given position
    ///
    /// No range checking happens here, that belongs to the [`Grid`](crate::Grid) owning the cell.
    #[inline]
    pub fn new(row: usize, col: usize, alive: bool) -> Self {
        Self {
            coord: Coord { row, col },
            alive,
        }
    }

    #[inline]
    pub fn row(&self) -> usize {
        self.coord.row
    }
    #[inline]
    pub fn col(&self) -> usize {
        self.coord.col
    }
    #[inline]
    pub fn coord(&self) -> Coord {
        self.coord
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }
    #[inline]
    pub fn set_alive(&mut self, alive: bool) {
        self.alive = alive;
    }

    /// Single character form, `"1"` for alive and `"0"` for dead
    #[inline]
    pub fn render(&self) -> &'static str {
        if self.alive { "1" } else { "0" }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.render())
    }
}
