use std::cmp::Ordering;

/// A (row, column) position on a square board, 0-indexed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}
impl Coord {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether this position lies on a board of the given side length
    #[inline]
    pub fn within(self, side: usize) -> bool {
        self.row < side && self.col < side
    }

    /// Shifts this position by a signed offset, clipped to a board of the given side length
    ///
    /// Returns [`None`] if the shifted position falls off either edge; there is no wraparound.
    #[inline]
    pub fn offset(self, d_row: isize, d_col: isize, side: usize) -> Option<Self> {
        let shifted = Self {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        };
        shifted.within(side).then_some(shifted)
    }

    /// Row-major index of this position on a board of the given side length
    #[inline]
    pub(crate) fn index(self, side: usize) -> usize {
        self.row * side + self.col
    }
    #[inline]
    pub(crate) fn from_index(index: usize, side: usize) -> Self {
        Self {
            row: index / side,
            col: index % side,
        }
    }
}
impl PartialOrd for Coord {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Coord {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        // compare row first, then column (row-major)
        Ord::cmp(&self.row, &other.row).then(Ord::cmp(&self.col, &other.col))
    }
}
