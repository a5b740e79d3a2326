use serde::{Deserialize, Serialize};

/// Player-facing state of a cell as stored by the board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    #[default]
    Hidden,
    Flagged,
    Revealed,
}

impl CellState {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }
}

/// What the presentation layer should draw for a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Flagged,
    RevealedSafe(u8),
    RevealedMine,
}

impl CellView {
    // whether the cell is visually closed
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }
}

/// End-of-game marking for mines and flags.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Debrief {
    /// The mine whose reveal lost the game
    Exploded,
    /// A mine that was never flagged
    Mine,
    /// A mine that was correctly flagged
    FlaggedMine,
    /// A flag placed on a safe cell
    IncorrectFlag,
}
