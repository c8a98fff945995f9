//! Conway's Game of Life on a fixed 75x75 grid without wraparound.
//!
//! [`engine`] holds the B3/S23 step, [`simulation`] the play/pause state a
//! UI drives frame by frame.

pub mod engine;
pub mod error;
pub mod grid;
pub mod rows;
pub mod seed;
pub mod simulation;

pub use engine::{count_neighbors, next_generation, next_row, next_state};
pub use error::LifeError;
pub use grid::{COLS, Grid, ROWS, create_empty_grid, create_initial_grid};
pub use rows::next_generation_by_rows;
pub use simulation::{MAX_SPEED, MIN_SPEED, STARTING_SPEED, Simulation, Speed};
