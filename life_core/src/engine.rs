// engine.rs - Neighbor counting and the B3/S23 step

use crate::grid::{COLS, Grid, ROWS, TRow};

// Moore neighborhood offsets, the cell itself excluded
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Counts live cells around `(row, col)`.
///
/// The grid does not wrap: positions past an edge are skipped, so corner
/// cells have three candidates and edge cells five.
pub fn count_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let cells = grid.rows();
    let mut count = 0;
    for &(dr, dc) in &NEIGHBORS {
        let (Some(nr), Some(nc)) = (row.checked_add_signed(dr), col.checked_add_signed(dc)) else {
            continue;
        };
        if nr < ROWS && nc < COLS && cells[nr][nc] { count += 1; }
    }
    count
}

pub fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 2) | (true, 3) => true,   // Survival
        (true, _)             => false,  // Under- or overpopulation
        (false, 3)            => true,   // Reproduction
        (false, _)            => false,  // Stays dead
    }
}

/// Next states for one row, read from the untouched `grid`.
pub fn next_row(grid: &Grid, row: usize) -> TRow {
    let mut row_result = [false; COLS];
    for (col, next) in row_result.iter_mut().enumerate() {
        *next = next_state(grid.rows()[row][col], count_neighbors(grid, row, col));
    }
    row_result
}

/// Builds the following generation into a fresh grid.
pub fn next_generation(grid: &Grid) -> Grid {
    let mut next = [[false; COLS]; ROWS];
    for (row, cells) in next.iter_mut().enumerate() {
        *cells = next_row(grid, row);
    }
    Grid::from_rows(next)
}
