use thiserror::Error;

/// Errors raised while building or querying a [`Grid`](crate::Grid)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The input is empty, not square, or has rows of differing length
    #[error("grid input must be a non-empty square matrix, got {rows} rows with a row of {cols} columns")]
    InvalidShape { rows: usize, cols: usize },
    /// A position outside `[0, side)` was queried
    #[error("position ({row}, {col}) is outside the {side}x{side} grid")]
    OutOfBounds { row: usize, col: usize, side: usize },
    /// A matrix entry other than 0 or 1
    #[error("cell ({row}, {col}) has value {value}, expected 0 or 1")]
    InvalidCellValue { row: usize, col: usize, value: u8 },
    /// A driver pattern literal that does not parse
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),
}

impl From<GridError> for std::io::Error {
    fn from(err: GridError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, err)
    }
}
