use alloc::vec;
use alloc::vec::Vec;

use ndarray::Array2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Result of revealing a single cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The cell was flagged or already revealed
    AlreadyResolved,
    HitMine,
    /// Every cell revealed by the call, starting with the target
    Revealed(Vec<Coord2>),
}

impl RevealOutcome {
    /// Whether this outcome could have caused an update to the board
    pub const fn has_update(&self) -> bool {
        !matches!(self, Self::AlreadyResolved)
    }

    pub fn revealed_count(&self) -> usize {
        match self {
            Self::Revealed(cells) => cells.len(),
            _ => 0,
        }
    }
}

/// Result of toggling a flag.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    Flagged,
    Unflagged,
    /// Revealed cells cannot carry a flag
    Ineffective,
}

impl FlagOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Ineffective)
    }
}

/// Mine layout plus per-cell player state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    mine_layout: MineLayout,
    cells: Array2<CellState>,
    revealed_safe_count: CellCount,
    flagged_count: CellCount,
}

impl Board {
    /// Random board drawn from `rng`.
    pub fn new<R: Rng + ?Sized>(
        rows: Coord,
        cols: Coord,
        mines: CellCount,
        rng: &mut R,
    ) -> Result<Self> {
        let config = GameConfig::new_unchecked(rows, cols, mines);
        Ok(Self::from_layout(place_mines(config, rng)?))
    }

    /// Board from `generator`, which must honour the requested size and mine count.
    pub fn create<G: MineGenerator + ?Sized>(config: GameConfig, generator: &mut G) -> Result<Self> {
        config.validate()?;
        let layout = generator.generate(config)?;
        let generated = layout.game_config();
        if generated != config {
            log::warn!("Generator returned {:?} for requested {:?}", generated, config);
            return Err(ConfigIssue::LayoutMismatch {
                requested: config,
                generated,
            }
            .into());
        }
        Ok(Self::from_layout(layout))
    }

    pub fn from_layout(mine_layout: MineLayout) -> Self {
        let size = mine_layout.size();
        Self {
            mine_layout,
            cells: Array2::default(size.to_nd_index()),
            revealed_safe_count: 0,
            flagged_count: 0,
        }
    }

    pub fn mine_layout(&self) -> &MineLayout {
        &self.mine_layout
    }

    pub fn config(&self) -> GameConfig {
        self.mine_layout.game_config()
    }

    pub fn size(&self) -> Coord2 {
        self.mine_layout.size()
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn cols(&self) -> Coord {
        self.size().1
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_layout.mine_count()
    }

    pub fn total_safe_count(&self) -> CellCount {
        self.mine_layout.safe_cell_count()
    }

    pub fn revealed_safe_count(&self) -> CellCount {
        self.revealed_safe_count
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        self.mine_layout.validate_coords(coords)
    }

    pub fn state_at(&self, coords: Coord2) -> Result<CellState> {
        let coords = self.validate_coords(coords)?;
        Ok(self.cells[coords.to_nd_index()])
    }

    pub fn has_mine_at(&self, coords: Coord2) -> Result<bool> {
        let coords = self.validate_coords(coords)?;
        Ok(self.mine_layout.contains_mine(coords))
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> Result<u8> {
        let coords = self.validate_coords(coords)?;
        Ok(self.mine_layout.adjacent_mine_count(coords))
    }

    pub fn view_at(&self, coords: Coord2) -> Result<CellView> {
        let coords = self.validate_coords(coords)?;
        Ok(match self.cells[coords.to_nd_index()] {
            CellState::Hidden => CellView::Hidden,
            CellState::Flagged => CellView::Flagged,
            CellState::Revealed if self.mine_layout.contains_mine(coords) => CellView::RevealedMine,
            CellState::Revealed => {
                CellView::RevealedSafe(self.mine_layout.adjacent_mine_count(coords))
            }
        })
    }

    pub fn is_cleared(&self) -> bool {
        self.revealed_safe_count == self.total_safe_count()
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        use CellState::*;

        let coords = self.validate_coords(coords)?;
        let cell = &mut self.cells[coords.to_nd_index()];

        Ok(match *cell {
            Hidden => {
                *cell = Flagged;
                self.flagged_count += 1;
                FlagOutcome::Flagged
            }
            Flagged => {
                *cell = Hidden;
                self.flagged_count -= 1;
                FlagOutcome::Unflagged
            }
            Revealed => FlagOutcome::Ineffective,
        })
    }

    /// Reveals a hidden cell, flood-filling outward from zero-count cells.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.validate_coords(coords)?;

        if !self.cells[coords.to_nd_index()].is_hidden() {
            return Ok(RevealOutcome::AlreadyResolved);
        }

        if self.mine_layout.contains_mine(coords) {
            self.cells[coords.to_nd_index()] = CellState::Revealed;
            log::debug!("Revealed mine at {:?}", coords);
            return Ok(RevealOutcome::HitMine);
        }

        let mut revealed = vec![coords];
        let mut to_expand = Vec::new();
        if self.open_safe_cell(coords) == 0 {
            to_expand.push(coords);
        }

        // a cell enters the worklist only as it turns Revealed, so each is expanded once
        while let Some(expand_coords) = to_expand.pop() {
            for pos in self.mine_layout.iter_neighbors(expand_coords) {
                if !self.cells[pos.to_nd_index()].is_hidden() || self.mine_layout.contains_mine(pos)
                {
                    continue;
                }
                revealed.push(pos);
                if self.open_safe_cell(pos) == 0 {
                    to_expand.push(pos);
                }
            }
        }

        log::trace!(
            "Flood fill from {:?} revealed {} cells",
            coords,
            revealed.len()
        );
        Ok(RevealOutcome::Revealed(revealed))
    }

    fn open_safe_cell(&mut self, coords: Coord2) -> u8 {
        self.cells[coords.to_nd_index()] = CellState::Revealed;
        self.revealed_safe_count += 1;
        self.mine_layout.adjacent_mine_count(coords)
    }
}
