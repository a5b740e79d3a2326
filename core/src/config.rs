use serde::{Deserialize, Serialize};

use crate::*;

/// Grid dimensions and mine count for one game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        Self { rows, cols, mines }
    }

    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(rows, cols, mines);
        config.validate()?;
        Ok(config)
    }

    /// 9×9 with 10 mines.
    pub const fn beginner() -> Self {
        Self::new_unchecked(9, 9, 10)
    }

    /// 16×16 with 40 mines.
    pub const fn intermediate() -> Self {
        Self::new_unchecked(16, 16, 40)
    }

    /// 16 rows by 30 columns with 99 mines.
    pub const fn expert() -> Self {
        Self::new_unchecked(16, 30, 99)
    }

    /// A playable board has both dimensions non-zero and at least one safe cell.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigIssue::EmptyBoard.into());
        }
        let cells = self.total_cells();
        if self.mines >= cells {
            return Err(ConfigIssue::TooManyMines {
                mines: self.mines,
                cells,
            }
            .into());
        }
        Ok(())
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }

    /// Saturates to zero for configurations that fail validation.
    pub const fn total_safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(10, 10, 12)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_and_classic_configs_are_playable() {
        for config in [
            GameConfig::default(),
            GameConfig::beginner(),
            GameConfig::intermediate(),
            GameConfig::expert(),
        ] {
            assert_eq!(config.validate(), Ok(()), "{config:?}");
        }
    }

    #[test]
    fn rejects_zero_dimensions() {
        assert_eq!(
            GameConfig::new(0, 5, 0),
            Err(GameError::InvalidConfiguration(ConfigIssue::EmptyBoard))
        );
        assert_eq!(
            GameConfig::new(5, 0, 0),
            Err(GameError::InvalidConfiguration(ConfigIssue::EmptyBoard))
        );
    }

    #[test]
    fn rejects_board_without_safe_cell() {
        assert_eq!(
            GameConfig::new(3, 3, 9),
            Err(GameError::InvalidConfiguration(ConfigIssue::TooManyMines {
                mines: 9,
                cells: 9
            }))
        );
        assert!(GameConfig::new(3, 3, 8).is_ok());
    }

    #[test]
    fn zero_mines_is_valid() {
        let config = GameConfig::new(1, 1, 0).unwrap();
        assert_eq!(config.total_safe_cells(), 1);
    }

    #[test]
    fn deserializes_from_settings_json() {
        let config: GameConfig =
            serde_json::from_str(r#"{"rows": 8, "cols": 12, "mines": 15}"#).unwrap();
        assert_eq!(config, GameConfig::new_unchecked(8, 12, 15));
        assert_eq!(config.total_safe_cells(), 81);
    }
}
