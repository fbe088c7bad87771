use crate::{Grid, GridError};
use regex::Regex;
use std::sync::OnceLock;

/// Textual literal for a starting grid: rows of `0`/`1` separated by `/`
///
/// `010/010/010` is the vertical blinker. Whitespace around rows is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    rows: Vec<Vec<u8>>,
}

fn row_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[01]+$").expect("valid row regex"))
}

impl Pattern {
    pub fn parse(value: &str) -> Result<Self, GridError> {
        let mut rows = Vec::new();
        for (i, row) in value.trim().split('/').map(str::trim).enumerate() {
            if !row_regex().is_match(row) {
                return Err(GridError::InvalidPattern(format!(
                    "row {} ({:?}) must be a run of 0 and 1",
                    i, row
                )));
            }
            rows.push(row.bytes().map(|b| b - b'0').collect());
        }
        Ok(Self { rows })
    }

    /// Encodes the alive states of `grid` back into a literal
    pub fn encode(grid: &Grid) -> String {
        grid.rows()
            .map(|row| row.iter().map(|cell| cell.render()).collect::<String>())
            .collect::<Vec<_>>()
            .join("/")
    }

    #[inline]
    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    pub fn to_grid(&self) -> Result<Grid, GridError> {
        Grid::from_rows(&self.rows)
    }
}

impl std::str::FromStr for Pattern {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
