use life_core::{
    COLS, Grid, ROWS, Simulation, count_neighbors, create_empty_grid, create_initial_grid,
    next_generation,
};

fn grid_with(cells: &[(usize, usize)]) -> Grid {
    let mut grid = create_empty_grid();
    for &(row, col) in cells {
        grid.set_cell(row, col, true);
    }
    grid
}

fn live(grid: &Grid) -> Vec<(usize, usize)> {
    grid.live_cells().collect()
}

#[test]
fn every_constructor_yields_full_size_grids() {
    for grid in [
        create_initial_grid(),
        create_empty_grid(),
        next_generation(&create_initial_grid()),
    ] {
        assert_eq!(grid.rows().len(), ROWS);
        for row in grid.rows() {
            assert_eq!(row.len(), COLS);
        }
    }
}

#[test]
fn seed_is_fixed() {
    let grid = create_initial_grid();
    let mut expected = vec![(2, 1), (3, 2), (3, 3), (2, 3), (1, 3)];
    expected.sort();
    assert_eq!(live(&grid), expected);
}

#[test]
fn single_corner_cell_neighbor_counts() {
    let grid = grid_with(&[(0, 0)]);
    assert_eq!(count_neighbors(&grid, 0, 1), 1);
    assert_eq!(count_neighbors(&grid, ROWS - 1, COLS - 1), 0);
}

#[test]
fn neighbor_counts_never_exceed_eight() {
    let mut grid = create_initial_grid();
    for _ in 0..4 {
        for row in 0..ROWS {
            for col in 0..COLS {
                assert!(count_neighbors(&grid, row, col) <= 8);
            }
        }
        grid = next_generation(&grid);
    }
}

#[test]
fn empty_grid_stays_empty() {
    assert_eq!(next_generation(&create_empty_grid()), create_empty_grid());
}

#[test]
fn block_is_a_still_life() {
    let block = grid_with(&[(5, 5), (5, 6), (6, 5), (6, 6)]);
    assert_eq!(next_generation(&block), block);
}

#[test]
fn blinker_has_period_two() {
    let horizontal = grid_with(&[(20, 30), (20, 31), (20, 32)]);
    let vertical = next_generation(&horizontal);
    assert_eq!(live(&vertical), vec![(19, 31), (20, 31), (21, 31)]);
    assert_eq!(next_generation(&vertical), horizontal);
}

#[test]
fn blinker_against_the_edge_is_clipped() {
    // the vertical phase would need row -1, so the pattern decays instead
    let edge = grid_with(&[(0, 10), (0, 11), (0, 12)]);
    let next = next_generation(&edge);
    assert_eq!(live(&next), vec![(0, 11), (1, 11)]);
}

#[test]
fn glider_reappears_shifted_after_four_generations() {
    let mut grid = create_initial_grid();
    for _ in 0..4 {
        grid = next_generation(&grid);
    }
    let shifted: Vec<_> = live(&create_initial_grid())
        .into_iter()
        .map(|(row, col)| (row + 1, col + 1))
        .collect();
    assert_eq!(live(&grid), shifted);
}

#[test]
fn edited_blinker_oscillates() {
    let mut sim = Simulation::with_grid(create_empty_grid());
    for (row, col) in [(30, 10), (30, 11), (30, 12)] {
        assert!(sim.edit_cell(row, col).unwrap());
    }
    let horizontal = *sim.grid();

    sim.advance();
    assert_eq!(live(sim.grid()), vec![(29, 11), (30, 11), (31, 11)]);
    sim.advance();
    assert_eq!(*sim.grid(), horizontal);
    assert_eq!(sim.generation(), 2);
}
