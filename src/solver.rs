use crate::grid::{Grid, N};
use itertools::Itertools;

/// Can `value` legally occupy `(row, col)`? True iff the value appears
/// nowhere in the row, the column, or the 3x3 block containing the cell.
/// The cell itself is expected to hold 0 when this is called.
pub fn fits(grid: &Grid, row: usize, col: usize, value: u8) -> bool {
    for i in 0..N {
        if grid.get(row, i) == value || grid.get(i, col) == value {
            return false;
        }
    }
    let block_row = row - row % 3;
    let block_col = col - col % 3;
    (block_row..block_row + 3)
        .cartesian_product(block_col..block_col + 3)
        .all(|(i, j)| grid.get(i, j) != value)
}

/// Fills every empty cell by depth-first backtracking. Cells are visited in
/// row-major order and candidates tried 1 through 9 ascending, so the result
/// is deterministic. Returns true with the solution left in place, or false
/// with every tentative write undone.
pub fn solve(grid: &mut Grid) -> bool {
    let Some((row, col)) = grid.first_empty() else {
        return true;
    };
    for value in 1..=9 {
        if fits(grid, row, col, value) {
            grid.set(row, col, value);
            if solve(grid) {
                return true;
            }
            grid.clear(row, col);
        }
    }
    false
}
