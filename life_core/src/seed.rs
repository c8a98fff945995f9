use crate::grid::Grid;

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

/// Seed placed near the top-left corner at startup.
pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(2, 1), (3, 2), (3, 3), (2, 3), (1, 3)],
};

impl Pattern {
    /// Sets the pattern's cells alive, skipping any that fall outside the grid.
    pub fn apply(&self, grid: &mut Grid) {
        for &(row, col) in self.cells {
            if Grid::contains(row, col) {
                grid.set_cell(row, col, true);
            }
        }
    }
}
