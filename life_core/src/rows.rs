// rows.rs - Generation step with one cooperative task per row

use crate::engine::{count_neighbors, next_state};
use crate::error::LifeError;
use crate::grid::{COLS, Grid, ROWS, TRow};

/// Row coroutine that computes a single row of the next generation
async fn process_row(row_index: usize, current_grid: Grid) -> (usize, TRow) {
    let mut row_result = [false; COLS];
    for (col, next) in row_result.iter_mut().enumerate() {
        let alive = current_grid.rows()[row_index][col];
        *next = next_state(alive, count_neighbors(&current_grid, row_index, col));

        tokio::task::yield_now().await;  // Cooperative yielding
    }
    (row_index, row_result)
}

/// Same step as [`crate::engine::next_generation`], spread over tokio tasks.
///
/// Each task gets its own copy of the snapshot; rows are put back by index,
/// so completion order does not matter. Must be called inside a runtime.
pub async fn next_generation_by_rows(grid: &Grid) -> Result<Grid, LifeError> {
    let snapshot = *grid;

    let handles: Vec<_> = (0..ROWS)
        .map(|row| tokio::spawn(process_row(row, snapshot)))
        .collect();

    let mut next = [[false; COLS]; ROWS];
    for handle in handles {
        let (row_index, completed_row) = handle.await?;
        next[row_index] = completed_row;
    }
    log::trace!("assembled {ROWS} rows from row tasks");
    Ok(Grid::from_rows(next))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::next_generation;
    use crate::grid::{create_empty_grid, create_initial_grid};

    #[tokio::test]
    async fn matches_sequential_step_for_the_seed() {
        let mut grid = create_initial_grid();
        for _ in 0..8 {
            let by_rows = next_generation_by_rows(&grid).await.unwrap();
            let sequential = next_generation(&grid);
            assert_eq!(by_rows, sequential);
            grid = sequential;
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn matches_sequential_step_on_multi_thread_runtime() {
        let mut grid = create_empty_grid();
        for (row, col) in [(10, 10), (10, 11), (10, 12), (0, 0), (0, 1), (1, 0), (74, 73), (74, 74), (73, 74)] {
            grid.set_cell(row, col, true);
        }
        let by_rows = next_generation_by_rows(&grid).await.unwrap();
        assert_eq!(by_rows, next_generation(&grid));
    }
}
