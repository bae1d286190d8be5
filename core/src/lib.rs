#![no_std]

extern crate alloc;

use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use annotator::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod annotator;
mod cell;
mod dot;
mod error;
mod generator;
mod types;

/// Mine density applied by [`BoardConfig::with_standard_density`], as the
/// exact fraction 5/32 (0.15625).
pub const MINE_DENSITY: (u64, u64) = (5, 32);

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl BoardConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub fn new((rows, cols): Coord2, mines: CellCount) -> Self {
        let mines = mines.min(mult(rows, cols));
        Self::new_unchecked((rows, cols), mines)
    }

    /// Config for a `(rows, cols)` board with the standard 5/32 mine density.
    ///
    /// The mine count is `round(5/32 * cells)`, computed in integer
    /// arithmetic; a count ending in exactly .5 rounds up.
    pub fn with_standard_density(size: Coord2) -> Self {
        let cells = mult(size.0, size.1) as u64;
        let (num, den) = MINE_DENSITY;
        let mines = (cells * num + den / 2) / den;
        Self::new_unchecked(size, mines as CellCount)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

/// Rectangular minesweeper board, `size().0` rows by `size().1` columns,
/// stored row-major.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// Creates a board of the given `(rows, cols)` size with every cell empty.
    pub fn new(size: Coord2) -> Self {
        Self::from_cells(Array2::from_elem(size.to_nd_index(), Cell::Empty))
    }

    pub fn from_cells(cells: Array2<Cell>) -> Self {
        Self { cells }
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut grid = Self::new(size);

        for &coords in mine_coords {
            grid.set(coords, Cell::Mine)?;
        }

        Ok(grid)
    }

    pub fn config(&self) -> BoardConfig {
        BoardConfig::new_unchecked(self.size(), self.mine_count())
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(BoardError::OutOfBounds)
        }
    }

    /// Board size as `(rows, cols)`.
    pub fn size(&self) -> Coord2 {
        let dim = self.cells.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn height(&self) -> Coord {
        self.size().0
    }

    pub fn width(&self) -> Coord {
        self.size().1
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len().try_into().unwrap()
    }

    pub fn mine_count(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|cell| cell.is_mine())
            .count()
            .try_into()
            .unwrap()
    }

    pub fn get(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self[coords])
    }

    pub fn set(&mut self, coords: Coord2, cell: Cell) -> Result<()> {
        let coords = self.validate_coords(coords)?;
        self[coords] = cell;
        Ok(())
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords].is_mine()
    }

    /// Number of mines among the up-to-8 Moore neighbors of `coords`.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.cells
            .iter_neighbor_cells(coords)
            .filter(|cell| cell.is_mine())
            .count()
            .try_into()
            .unwrap()
    }

    pub(crate) fn as_cell_slice_mut(&mut self) -> Option<&mut [Cell]> {
        self.cells.as_slice_mut()
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, (row, col): Coord2) -> &Self::Output {
        &self.cells[(row as usize, col as usize)]
    }
}

impl IndexMut<Coord2> for Grid {
    fn index_mut(&mut self, (row, col): Coord2) -> &mut Self::Output {
        &mut self.cells[(row as usize, col as usize)]
    }
}
