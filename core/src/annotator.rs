use crate::*;

/// Replaces every empty cell with the number of mines among its up-to-8
/// Moore neighbors, in place. Mine cells are left untouched.
///
/// Counting only ever asks whether a neighbor is a mine, never for another
/// cell's count, so traversal order has no effect on the result.
pub fn annotate(grid: &mut Grid) {
    let (rows, cols) = grid.size();
    for row in 0..rows {
        for col in 0..cols {
            let coords = (row, col);
            if grid[coords] == Cell::Empty {
                let mines = grid.adjacent_mine_count(coords);
                grid[coords] = Cell::Count(mines);
            }
        }
    }
}
