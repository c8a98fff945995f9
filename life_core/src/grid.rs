// grid.rs - Grid type for Conway's Game of Life

use crate::error::LifeError;
use crate::seed::GLIDER;

// Compile-time grid size configuration
pub const ROWS: usize = 75;                           // Number of rows in the playing area
pub const COLS: usize = 75;                           // Number of cells per row

pub type TRow = [bool; COLS];
pub type TGrid = [TRow; ROWS];

/// One generation of cells, row-major and 0-indexed.
///
/// The backing array is fixed-size, so every grid is exactly `ROWS x COLS`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: TGrid,
}

impl Default for Grid {
    fn default() -> Self {
        create_empty_grid()
    }
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grid")
            .field("population", &self.population())
            .field("live", &self.live_cells().collect::<Vec<_>>())
            .finish()
    }
}

/// Grid holding the starting glider.
pub fn create_initial_grid() -> Grid {
    let mut grid = create_empty_grid();
    GLIDER.apply(&mut grid);
    grid
}

/// Grid with every cell dead.
pub fn create_empty_grid() -> Grid {
    Grid { cells: [[false; COLS]; ROWS] }
}

impl Grid {
    pub(crate) fn from_rows(cells: TGrid) -> Self {
        Self { cells }
    }

    pub const fn contains(row: usize, col: usize) -> bool {
        row < ROWS && col < COLS
    }

    /// Reads one cell. Panics when `(row, col)` lies outside the grid.
    pub fn get_cell(&self, row: usize, col: usize) -> bool {
        assert!(Self::contains(row, col), "cell ({row}, {col}) is outside the {ROWS}x{COLS} grid");
        self.cells[row][col]
    }

    /// Writes one cell. Panics when `(row, col)` lies outside the grid.
    pub fn set_cell(&mut self, row: usize, col: usize, alive: bool) {
        assert!(Self::contains(row, col), "cell ({row}, {col}) is outside the {ROWS}x{COLS} grid");
        self.cells[row][col] = alive;
    }

    pub fn try_set_cell(&mut self, row: usize, col: usize, alive: bool) -> Result<(), LifeError> {
        if !Self::contains(row, col) {
            return Err(LifeError::OutOfBounds { row, col });
        }
        self.cells[row][col] = alive;
        Ok(())
    }

    pub fn rows(&self) -> &TGrid {
        &self.cells
    }

    /// Live cells as `(row, col)` in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|&(_, &alive)| alive)
                .map(move |(col, _)| (row, col))
        })
    }

    pub fn population(&self) -> usize {
        self.cells.iter().map(|row| row.iter().filter(|&&alive| alive).count()).sum()
    }
}
