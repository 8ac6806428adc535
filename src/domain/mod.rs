mod cell;
mod grid;

pub use cell::Cell;
pub use grid::{Grid, ROWS, COLS, DEFAULT_DENSITY, NEIGHBOR_OFFSETS};
