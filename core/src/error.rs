use thiserror::Error;

use crate::{CellCount, GameConfig};

/// Why a grid configuration cannot produce a playable board.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigIssue {
    #[error("board needs at least one row and one column")]
    EmptyBoard,
    #[error("{mines} mines leave no safe cell on a board of {cells} cells")]
    TooManyMines { mines: CellCount, cells: CellCount },
    #[error("generator produced {generated:?} for requested {requested:?}")]
    LayoutMismatch {
        requested: GameConfig,
        generated: GameConfig,
    },
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigIssue),
    #[error("Coordinates out of bounds")]
    OutOfBounds,
}

pub type Result<T> = core::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn config_issue_display_names_the_counts() {
        let err = GameError::from(ConfigIssue::TooManyMines { mines: 9, cells: 9 });
        assert_eq!(
            err.to_string(),
            "Invalid configuration: 9 mines leave no safe cell on a board of 9 cells"
        );
    }

    #[test]
    fn out_of_bounds_display() {
        assert_eq!(GameError::OutOfBounds.to_string(), "Coordinates out of bounds");
    }
}
