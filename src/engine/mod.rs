mod neighbors;
mod rule;

pub use self::neighbors::Neighbors;
use crate::{Cell, Coord, GridError, Render};
use rand::Rng;
use std::{fmt, io};

/// One generation of a square Game of Life board
///
/// The grid owns its N×N cells in row-major order. A cell's stored coordinate
/// always equals its position on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    side: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a grid by asking `alive` for the state of every position, row by row
    pub fn from_fn<F>(side: usize, mut alive: F) -> Result<Self, GridError>
    where
        F: FnMut(Coord) -> bool,
    {
        let len = match side.checked_mul(side) {
            Some(len) if len > 0 => len,
            _ => {
                return Err(GridError::InvalidShape {
                    rows: side,
                    cols: side,
                });
            }
        };
        let cells = (0..len)
            .map(|i| {
                let pos = Coord::from_index(i, side);
                Cell::new(pos.row, pos.col, alive(pos))
            })
            .collect();
        Ok(Self { side, cells })
    }

    /// Creates a grid where every cell is alive with probability one half
    pub fn random<R: Rng>(side: usize, rng: &mut R) -> Result<Self, GridError> {
        Self::from_fn(side, |_| rng.random_bool(0.5))
    }

    /// Creates a grid from a square matrix of `0`/`1` values
    ///
    /// Rejects empty, non-square, or ragged input and any value other than `0` or `1`.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GridError> {
        let side = check_square(rows)?;
        let mut states = Vec::with_capacity(side * side);
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.as_ref().iter().enumerate() {
                states.push(match value {
                    0 => false,
                    1 => true,
                    value => return Err(GridError::InvalidCellValue { row, col, value }),
                });
            }
        }
        Self::from_fn(side, |pos| states[pos.index(side)])
    }

    /// Creates a grid from a square matrix of alive/dead states
    pub fn from_states<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self, GridError> {
        let side = check_square(rows)?;
        Self::from_fn(side, |pos| rows[pos.row].as_ref()[pos.col])
    }

    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Iterator over every cell in row-major order
    #[inline]
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Iterator over the rows of the board, each a slice of `side` cells
    #[inline]
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.side)
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Cell, GridError> {
        let pos = self.check(row, col)?;
        Ok(self.cells[pos.index(self.side)])
    }

    /// Sets the alive state of the cell at `(row, col)`, its coordinate stays fixed
    pub fn set_alive(&mut self, row: usize, col: usize, alive: bool) -> Result<(), GridError> {
        let pos = self.check(row, col)?;
        self.cells[pos.index(self.side)].set_alive(alive);
        Ok(())
    }

    /// The in-range Moore neighbors of `(row, col)`, clipped at the edges
    pub fn neighbors(&self, row: usize, col: usize) -> Result<Neighbors<'_>, GridError> {
        let pos = self.check(row, col)?;
        Ok(Neighbors::new(&self.cells, self.side, pos))
    }

    /// Number of alive neighbors around the position of `cell`
    pub fn count_alive_neighbors(&self, cell: &Cell) -> Result<usize, GridError> {
        Ok(self.neighbors(cell.row(), cell.col())?.alive())
    }

    #[inline]
    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Whether every cell on the board is dead
    #[inline]
    pub fn is_extinct(&self) -> bool {
        !self.cells.iter().any(Cell::is_alive)
    }

    /// Computes the next generation without touching this one
    ///
    /// An all-dead board is returned as-is. Every other board, including still
    /// lifes, goes through the full rule.
    pub fn successor(&self) -> Grid {
        if self.is_extinct() {
            log::debug!("all {} cells dead, skipping generation", self.cells.len());
            return self.clone();
        }

        let cells = self
            .cells
            .iter()
            .map(|cell| {
                let neighbors = Neighbors::new(&self.cells, self.side, cell.coord()).alive();
                Cell::new(
                    cell.row(),
                    cell.col(),
                    rule::next_state(cell.is_alive(), neighbors),
                )
            })
            .collect();
        let next = Grid {
            side: self.side,
            cells,
        };
        log::trace!("next generation has {} alive", next.alive_count());
        next
    }

    /// Advances this grid by one generation
    ///
    /// The whole board is replaced at once, the previous generation is only read.
    pub fn step(&mut self) {
        *self = self.successor();
    }

    /// Steps `generations` times, handing the grid to `render` after each step
    pub fn run<R: Render + ?Sized>(&mut self, generations: usize, render: &mut R) -> io::Result<()> {
        for _ in 0..generations {
            self.step();
            render.render(self)?;
        }
        log::debug!("ran {} generations, {} alive", generations, self.alive_count());
        Ok(())
    }

    fn check(&self, row: usize, col: usize) -> Result<Coord, GridError> {
        let pos = Coord { row, col };
        if pos.within(self.side) {
            Ok(pos)
        } else {
            Err(GridError::OutOfBounds {
                row,
                col,
                side: self.side,
            })
        }
    }
}

/// Verifies that `rows` is a non-empty square matrix, returning its side length
fn check_square<T, R: AsRef<[T]>>(rows: &[R]) -> Result<usize, GridError> {
    let side = rows.len();
    if side == 0 {
        return Err(GridError::InvalidShape { rows: 0, cols: 0 });
    }
    match rows.iter().map(|r| r.as_ref().len()).find(|&len| len != side) {
        Some(cols) => Err(GridError::InvalidShape { rows: side, cols }),
        None => Ok(side),
    }
}

impl fmt::Display for Grid {
    /// Each row on its own line, cells separated by a tab
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str("\t")?;
                }
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    const BLINKER_V: [[u8; 3]; 3] = [[0, 1, 0], [0, 1, 0], [0, 1, 0]];
    const BLINKER_H: [[u8; 3]; 3] = [[0, 0, 0], [1, 1, 1], [0, 0, 0]];

    fn states(grid: &Grid) -> Vec<Vec<u8>> {
        grid.rows()
            .map(|row| row.iter().map(|c| u8::from(c.is_alive())).collect())
            .collect()
    }

    fn to_vecs<const N: usize>(rows: &[[u8; N]]) -> Vec<Vec<u8>> {
        rows.iter().map(|row| row.to_vec()).collect()
    }

    /// Keeps every rendered frame
    #[derive(Default)]
    struct Frames {
        frames: Vec<Grid>,
    }
    impl Render for Frames {
        fn render(&mut self, grid: &Grid) -> io::Result<()> {
            self.frames.push(grid.clone());
            Ok(())
        }
    }

    #[test]
    fn from_rows_reads_back_input() {
        let rows = [[1u8, 0, 0, 1], [0, 1, 1, 0], [0, 0, 0, 0], [1, 1, 1, 1]];
        let grid = Grid::from_rows(&rows).unwrap();

        assert_eq!(grid.side(), 4);
        assert_eq!(states(&grid), to_vecs(&rows));
        for cell in grid.cells() {
            assert_eq!(cell.is_alive(), rows[cell.row()][cell.col()] == 1);
        }
    }

    #[test]
    fn cell_coordinates_match_position() {
        let grid = Grid::random(5, &mut StdRng::seed_from_u64(7)).unwrap();

        for (row, cells) in grid.rows().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                assert_eq!((cell.row(), cell.col()), (row, col));
            }
        }
    }

    #[test]
    fn random_is_reproducible_with_seed() {
        let a = Grid::random(8, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = Grid::random(8, &mut StdRng::seed_from_u64(42)).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn random_is_roughly_fair() {
        let grid = Grid::random(64, &mut StdRng::seed_from_u64(1)).unwrap();
        let alive = grid.alive_count();

        // 4096 fair coins, far outside this range is practically impossible
        assert!((1600..2500).contains(&alive), "alive = {}", alive);
    }

    #[test]
    fn rejects_invalid_shapes() {
        let empty: [[u8; 0]; 0] = [];
        assert_eq!(
            Grid::from_rows(&empty),
            Err(GridError::InvalidShape { rows: 0, cols: 0 })
        );

        let wide = [[0u8, 1, 0], [1, 0, 1]];
        assert_eq!(
            Grid::from_rows(&wide),
            Err(GridError::InvalidShape { rows: 2, cols: 3 })
        );

        let ragged: Vec<Vec<u8>> = vec![vec![0, 1, 0], vec![1, 0], vec![0, 0, 0]];
        assert_eq!(
            Grid::from_rows(&ragged),
            Err(GridError::InvalidShape { rows: 3, cols: 2 })
        );

        assert!(matches!(
            Grid::random(0, &mut StdRng::seed_from_u64(0)),
            Err(GridError::InvalidShape { .. })
        ));
    }

    #[test]
    fn rejects_non_binary_values() {
        let rows = [[0u8, 1], [2, 0]];

        assert_eq!(
            Grid::from_rows(&rows),
            Err(GridError::InvalidCellValue {
                row: 1,
                col: 0,
                value: 2
            })
        );
    }

    #[test]
    fn from_states_matches_from_rows() {
        let states = [[false, true], [true, true]];
        let rows = [[0u8, 1], [1, 1]];

        assert_eq!(
            Grid::from_states(&states).unwrap(),
            Grid::from_rows(&rows).unwrap()
        );
    }

    #[test]
    fn neighbor_counts_by_position() {
        let grid = Grid::from_fn(4, |_| false).unwrap();
        let count = |row, col| grid.neighbors(row, col).unwrap().count();

        for (row, col) in [(0, 0), (0, 3), (3, 0), (3, 3)] {
            assert_eq!(count(row, col), 3);
        }
        for (row, col) in [(0, 1), (0, 2), (1, 0), (2, 3), (3, 1)] {
            assert_eq!(count(row, col), 5);
        }
        for (row, col) in [(1, 1), (1, 2), (2, 1), (2, 2)] {
            assert_eq!(count(row, col), 8);
        }
    }

    #[test]
    fn single_cell_has_no_neighbors() {
        let grid = Grid::from_rows(&[[1u8]]).unwrap();

        assert_eq!(grid.neighbors(0, 0).unwrap().count(), 0);
    }

    #[test]
    fn neighbors_are_distinct_and_adjacent() {
        let grid = Grid::from_fn(5, |_| true).unwrap();
        let mut coords: Vec<Coord> = grid.neighbors(2, 2).unwrap().map(Cell::coord).collect();
        coords.sort();
        coords.dedup();

        assert_eq!(coords.len(), 8);
        assert!(coords.iter().all(|c| c.row.abs_diff(2) <= 1 && c.col.abs_diff(2) <= 1));
        assert!(!coords.contains(&Coord::new(2, 2)));
    }

    #[test]
    fn out_of_bounds_queries_fail() {
        let grid = Grid::from_rows(&BLINKER_V).unwrap();
        let oob = GridError::OutOfBounds {
            row: 3,
            col: 0,
            side: 3,
        };

        assert_eq!(grid.get(3, 0), Err(oob.clone()));
        assert!(matches!(grid.neighbors(3, 0), Err(e) if e == oob));
        assert_eq!(
            grid.count_alive_neighbors(&Cell::new(0, 7, true)),
            Err(GridError::OutOfBounds {
                row: 0,
                col: 7,
                side: 3
            })
        );
    }

    #[test]
    fn blinker_counts() {
        let grid = Grid::from_rows(&BLINKER_V).unwrap();
        let count = |row, col| {
            let cell = grid.get(row, col).unwrap();
            grid.count_alive_neighbors(&cell).unwrap()
        };

        assert_eq!(count(1, 1), 2);
        assert_eq!(count(0, 1), 1);
        assert_eq!(count(1, 0), 3);
    }

    #[test]
    fn blinker_oscillates() {
        let mut grid = Grid::from_rows(&BLINKER_V).unwrap();

        grid.step();
        assert_eq!(grid, Grid::from_rows(&BLINKER_H).unwrap());

        grid.step();
        assert_eq!(grid, Grid::from_rows(&BLINKER_V).unwrap());
    }

    #[test]
    fn block_still_life_is_recomputed_unchanged() {
        let rows = [[0u8, 0, 0, 0], [0, 1, 1, 0], [0, 1, 1, 0], [0, 0, 0, 0]];
        let grid = Grid::from_rows(&rows).unwrap();

        assert_eq!(grid.successor(), grid);
    }

    #[test]
    fn overpopulation_kills_center() {
        let grid = Grid::from_fn(3, |_| true).unwrap();
        let next = grid.successor();

        // corners have 3 neighbors and survive, everything else has 5 or 8
        assert_eq!(states(&next), vec![vec![1, 0, 1], vec![0, 0, 0], vec![1, 0, 1]]);
    }

    #[test]
    fn successor_leaves_source_untouched() {
        let grid = Grid::from_rows(&BLINKER_V).unwrap();
        let _ = grid.successor();

        assert_eq!(states(&grid), to_vecs(&BLINKER_V));
    }

    #[test]
    fn extinct_grid_stays_extinct() {
        let mut grid = Grid::from_fn(6, |_| false).unwrap();
        for _ in 0..10 {
            grid.step();
            assert!(grid.is_extinct());
        }
    }

    #[test]
    fn run_renders_once_per_generation() {
        let mut grid = Grid::from_rows(&BLINKER_V).unwrap();
        let mut frames = Frames::default();
        grid.run(3, &mut frames).unwrap();

        assert_eq!(frames.frames.len(), 3);
        assert_eq!(frames.frames[0], Grid::from_rows(&BLINKER_H).unwrap());
        assert_eq!(frames.frames[1], Grid::from_rows(&BLINKER_V).unwrap());
        assert_eq!(grid, Grid::from_rows(&BLINKER_H).unwrap());
    }

    #[test]
    fn run_on_extinct_grid_renders_identical_frames() {
        for k in 0..4 {
            let mut grid = Grid::from_fn(3, |_| false).unwrap();
            let start = grid.clone();
            let mut frames = Frames::default();
            grid.run(k, &mut frames).unwrap();

            assert_eq!(frames.frames.len(), k);
            for frame in &frames.frames {
                assert_eq!(frame, &start);
                assert!(frame.rows().enumerate().all(|(row, cells)| {
                    cells
                        .iter()
                        .enumerate()
                        .all(|(col, c)| c.coord() == Coord::new(row, col))
                }));
            }
        }
    }

    #[test]
    fn clone_is_isolated() {
        let source = Grid::from_rows(&BLINKER_V).unwrap();
        let mut copy = source.clone();
        copy.set_alive(0, 1, false).unwrap();
        copy.set_alive(0, 0, true).unwrap();

        assert!(source.get(0, 1).unwrap().is_alive());
        assert!(!source.get(0, 0).unwrap().is_alive());
        assert_ne!(source, copy);
    }

    #[test]
    fn set_alive_keeps_coordinates_and_steps() {
        let mut grid = Grid::from_fn(3, |_| false).unwrap();
        for (row, col) in [(1, 0), (1, 1), (1, 2)] {
            grid.set_alive(row, col, true).unwrap();
        }

        let cell = grid.get(1, 0).unwrap();
        assert_eq!((cell.row(), cell.col()), (1, 0));
        assert!(cell.is_alive());

        grid.step();
        assert_eq!(grid, Grid::from_rows(&BLINKER_V).unwrap());
    }

    #[test]
    fn set_alive_out_of_bounds_fails() {
        let mut grid = Grid::from_fn(2, |_| false).unwrap();

        assert_eq!(
            grid.set_alive(2, 0, true),
            Err(GridError::OutOfBounds {
                row: 2,
                col: 0,
                side: 2
            })
        );
        assert!(grid.is_extinct());
    }

    #[test]
    fn read_back_for_small_sides() {
        assert_eq!(states(&Grid::from_rows(&[[0u8]]).unwrap()), vec![vec![0]]);
        assert_eq!(states(&Grid::from_rows(&[[1u8]]).unwrap()), vec![vec![1]]);

        let two = [[1u8, 0], [0, 1]];
        assert_eq!(states(&Grid::from_rows(&two).unwrap()), to_vecs(&two));

        let three = [[1u8, 1, 0], [0, 0, 1], [1, 0, 1]];
        assert_eq!(states(&Grid::from_rows(&three).unwrap()), to_vecs(&three));

        let five = [
            [0u8, 1, 1, 0, 1],
            [1, 0, 0, 0, 0],
            [0, 0, 1, 1, 1],
            [1, 1, 0, 1, 0],
            [0, 0, 0, 0, 1],
        ];
        assert_eq!(states(&Grid::from_rows(&five).unwrap()), to_vecs(&five));
    }

    #[test]
    fn constructed_coordinates_match_position() {
        let by_rows = Grid::from_rows(&[[0u8, 1, 0], [1, 1, 0], [0, 0, 1]]).unwrap();
        let by_states = Grid::from_states(&[[true, false], [false, true]]).unwrap();

        for grid in [&by_rows, &by_states] {
            for (row, cells) in grid.rows().enumerate() {
                for (col, cell) in cells.iter().enumerate() {
                    assert_eq!(cell.coord(), Coord::new(row, col));
                }
            }
        }
    }

    #[test]
    fn oversized_side_is_rejected() {
        let side = usize::MAX / 2;

        assert_eq!(
            Grid::from_fn(side, |_| false),
            Err(GridError::InvalidShape {
                rows: side,
                cols: side
            })
        );
    }

    #[test]
    fn displays_tab_separated_rows() {
        let grid = Grid::from_rows(&BLINKER_V).unwrap();

        assert_eq!(grid.to_string(), "0\t1\t0\n0\t1\t0\n0\t1\t0\n");
    }
}
