use ndarray::Array2;
use rand::rngs::SmallRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

use super::*;

/// Uniform placement: every set of `mines` distinct cells is equally likely.
#[derive(Clone, Debug)]
pub struct RandomMineGenerator<R = SmallRng> {
    rng: R,
}

impl RandomMineGenerator<SmallRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomMineGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> MineGenerator for RandomMineGenerator<R> {
    fn generate(&mut self, config: GameConfig) -> Result<MineLayout> {
        place_mines(config, &mut self.rng)
    }
}

/// Samples `config.mines` distinct flat indices without replacement and turns them into a layout.
pub fn place_mines<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<MineLayout> {
    config.validate()?;

    let total_cells = usize::from(config.total_cells());
    let cols = usize::from(config.cols);
    let mut mine_mask: Array2<bool> = Array2::default(config.size().to_nd_index());
    for flat_index in index::sample(rng, total_cells, config.mines.into()).iter() {
        mine_mask[[flat_index / cols, flat_index % cols]] = true;
    }

    let layout = MineLayout::from_mine_mask(mine_mask)?;
    if layout.mine_count() != config.mines {
        log::warn!(
            "Generated layout count mismatch, actual: {}, requested: {}",
            layout.mine_count(),
            config.mines
        );
    }
    log::debug!(
        "Placed {} mines on a {}x{} board",
        layout.mine_count(),
        config.rows,
        config.cols
    );
    Ok(layout)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_exact_mine_count() {
        let mut generator = RandomMineGenerator::from_seed(7);
        for mines in [0, 1, 10, 80] {
            let config = GameConfig::new(9, 9, mines).unwrap();
            let layout = generator.generate(config).unwrap();
            assert_eq!(layout.mine_count(), mines);
            assert_eq!(layout.iter_mines().count(), usize::from(mines));
            assert_eq!(layout.size(), (9, 9));
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let config = GameConfig::expert();
        let a = RandomMineGenerator::from_seed(42).generate(config).unwrap();
        let b = RandomMineGenerator::from_seed(42).generate(config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_invalid_config() {
        let mut generator = RandomMineGenerator::from_seed(1);
        assert_eq!(
            generator.generate(GameConfig::new_unchecked(2, 2, 4)),
            Err(GameError::InvalidConfiguration(ConfigIssue::TooManyMines {
                mines: 4,
                cells: 4
            }))
        );
    }

    #[test]
    fn closures_are_generators() {
        let mut fixed = |config: GameConfig| {
            MineLayout::from_mine_coords(config.size(), &[(0, 0)])
        };
        let layout = fixed.generate(GameConfig::new_unchecked(2, 2, 1)).unwrap();
        assert!(layout.contains_mine((0, 0)));
    }
}
