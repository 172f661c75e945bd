use super::*;

/// Uniform placement: pick a random cell index, retry when it already holds a
/// mine, until the requested count is reached.
///
/// The mine count is checked against the board size up front so the retry
/// loop always has a free cell to land on.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMineGenerator {
    seed: u64,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(self, config: GameConfig) -> Result<MineLayout> {
        use rand::prelude::*;

        let size = validate_size(config.size)?;
        config.check_mine_count()?;

        let total_cells = usize::from(config.total_cells());
        let mut mines: Array2<bool> = Array2::default(grid_shape(size));
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mines_placed: CellCount = 0;
        let mut collisions = 0usize;

        while mines_placed < config.mines {
            let coords = coords_at(rng.random_range(0..total_cells), size);
            let cell = &mut mines[coords.to_nd_index()];
            if *cell {
                collisions += 1;
                continue;
            }
            *cell = true;
            mines_placed += 1;
        }

        log::trace!(
            "Placed {} mines on {}x{} with {} collisions",
            mines_placed,
            size.0,
            size.1,
            collisions
        );

        // double check mine count
        let layout = MineLayout::from_mine_mask(mines);
        if layout.mine_count() != config.mines {
            log::warn!(
                "Generated minefield count mismatch, actual: {}, requested: {}",
                layout.mine_count(),
                config.mines
            );
        }
        Ok(layout)
    }
}
