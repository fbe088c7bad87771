use crate::{Cell, Coord};

/// Offsets of the Moore neighborhood, excluding the center
const MOORE: [(isize, isize); 8] = [
    (-1, 0),
    (-1, -1),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// An iterator over the in-range Moore neighbors of a cell
///
/// Positions that fall off the board are skipped, so a corner yields 3 cells,
/// an edge 5, and an interior cell 8.
#[derive(Debug, Clone)]
pub struct Neighbors<'a> {
    cells: &'a [Cell],
    side: usize,
    center: Coord,
    next_offset: usize,
}

impl<'a> Neighbors<'a> {
    /// `center` must already be within `side`, the grid checks this before handing one out
    pub(super) fn new(cells: &'a [Cell], side: usize, center: Coord) -> Self {
        debug_assert!(center.within(side), "neighbors of an out of range cell");
        Self {
            cells,
            side,
            center,
            next_offset: 0,
        }
    }

    /// Number of neighbors that are alive
    pub fn alive(self) -> usize {
        self.filter(|cell| cell.is_alive()).count()
    }
}

impl<'a> Iterator for Neighbors<'a> {
    type Item = &'a Cell;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&(d_row, d_col)) = MOORE.get(self.next_offset) {
            self.next_offset += 1;
            if let Some(pos) = self.center.offset(d_row, d_col, self.side) {
                return Some(&self.cells[pos.index(self.side)]);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(MOORE.len() - self.next_offset))
    }
}
