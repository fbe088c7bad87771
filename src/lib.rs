//! Core library for Conway's Game of Life on a fixed square board.

pub mod cell;
pub mod engine;
pub mod error;
pub mod pattern;
pub mod pos;
pub mod render;

pub use cell::Cell;
pub use engine::Grid;
pub use error::GridError;
pub use pattern::Pattern;
pub use pos::Coord;
pub use render::{Render, TextRender};
