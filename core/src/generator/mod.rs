use crate::*;
pub use random::*;

mod random;

/// Source of mine layouts for [`Board::reset`].
pub trait MineGenerator {
    fn generate(self, config: GameConfig) -> Result<MineLayout>;
}

/// A prepared layout used as-is, mostly for tests and replays.
impl MineGenerator for MineLayout {
    fn generate(self, config: GameConfig) -> Result<MineLayout> {
        if self.size() != config.size {
            return Err(GameError::InvalidSize);
        }
        self.game_config().check_mine_count()?;
        if self.mine_count() != config.mines {
            log::warn!(
                "Fixed layout has {} mines, requested {}, using the layout",
                self.mine_count(),
                config.mines
            );
        }
        Ok(self)
    }
}
