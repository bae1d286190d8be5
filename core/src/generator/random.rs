use super::*;

/// Generation strategy that scatters the configured number of mines over the
/// board uniformly at random, without replacement.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: BoardConfig) -> Grid {
        use rand::prelude::*;

        let total_cells = config.total_cells();

        // optimize for full boards
        if config.mines >= total_cells {
            if config.mines > total_cells {
                log::warn!(
                    "Board already full, generated anyway, requested {} but only fits {}",
                    config.mines,
                    total_cells
                );
            }
            return Grid::from_cells(Array2::from_elem(config.size.to_nd_index(), Cell::Mine));
        }

        let mut grid = Grid::new(config.size);
        let mut free_cells = total_cells;
        let mut mines_placed = 0;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        {
            let cells = grid.as_cell_slice_mut().expect("layout should be standard");
            while mines_placed < config.mines {
                if free_cells == 0 {
                    break;
                }
                let mut place: CellCount = rng.random_range(0..free_cells);
                for (i, cell) in cells.iter_mut().enumerate() {
                    let i = i as CellCount;
                    if cell.is_mine() {
                        place += 1;
                    }
                    if i == place {
                        *cell = Cell::Mine;
                        mines_placed += 1;
                        free_cells -= 1;
                        break;
                    }
                }
            }
        }

        // double check mine count
        let count = grid.mine_count();
        if count != config.mines {
            log::warn!(
                "Generated board mine count mismatch, actual: {}, requested: {}",
                count,
                config.mines
            );
        }
        grid
    }
}
