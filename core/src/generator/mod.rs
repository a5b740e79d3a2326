use crate::*;
pub use random::*;

mod random;

/// Source of mine layouts for new boards.
pub trait MineGenerator {
    fn generate(&mut self, config: GameConfig) -> Result<MineLayout>;
}

impl<F> MineGenerator for F
where
    F: FnMut(GameConfig) -> Result<MineLayout>,
{
    fn generate(&mut self, config: GameConfig) -> Result<MineLayout> {
        self(config)
    }
}
