use alloc::boxed::Box;
use alloc::vec;
use serde::{Deserialize, Serialize};

use crate::event::Observers;
use crate::*;

/// Cadence at which the presentation layer is expected to call `tick`.
pub const TICK_INTERVAL_MS: u64 = 1000;

/// Valid transitions:
/// - NotStarted -> InProgress
/// - InProgress -> Won
/// - InProgress -> Lost
///
/// `new_game` returns any state to NotStarted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::NotStarted)
    }

    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One player's game from start to finish, replayable via `new_game`.
#[derive(Debug)]
pub struct GameSession<G = RandomMineGenerator> {
    board: Board,
    status: GameStatus,
    elapsed_ms: u64,
    triggered_mine: Option<Coord2>,
    generator: G,
    observers: Observers,
}

impl GameSession<RandomMineGenerator> {
    /// Session drawing layouts from a seeded generator, starting on the default board.
    pub fn with_seed(seed: u64) -> Result<Self> {
        Self::new(RandomMineGenerator::from_seed(seed))
    }
}

impl<G: MineGenerator> GameSession<G> {
    pub fn new(generator: G) -> Result<Self> {
        Self::with_config(GameConfig::default(), generator)
    }

    pub fn with_config(config: GameConfig, mut generator: G) -> Result<Self> {
        let board = Board::create(config, &mut generator)?;
        Ok(Self {
            board,
            status: GameStatus::NotStarted,
            elapsed_ms: 0,
            triggered_mine: None,
            generator,
            observers: Observers::default(),
        })
    }

    /// Starts over on a fresh random board. On error the current game is kept.
    pub fn new_game(&mut self, rows: Coord, cols: Coord, mines: CellCount) -> Result<()> {
        self.new_game_with_config(GameConfig::new(rows, cols, mines)?)
    }

    pub fn new_game_with_config(&mut self, config: GameConfig) -> Result<()> {
        let board = Board::create(config, &mut self.generator)?;
        self.reset(board);
        Ok(())
    }

    /// Starts over with a fixed mine layout.
    pub fn new_game_with_layout(&mut self, layout: MineLayout) {
        self.reset(Board::from_layout(layout));
    }

    /// New random board with the current dimensions and mine count.
    pub fn restart(&mut self) -> Result<()> {
        self.new_game_with_config(self.config())
    }

    fn reset(&mut self, board: Board) {
        log::debug!("New game: {:?}", board.config());
        self.board = board;
        self.status = GameStatus::NotStarted;
        self.elapsed_ms = 0;
        self.triggered_mine = None;
    }

    pub fn subscribe<O: GameObserver + 'static>(&mut self, observer: O) -> SubscriptionId {
        self.observers.subscribe(Box::new(observer))
    }

    /// Returns false when `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Reveals a cell, returning the status after the move. Moves after the end are ignored.
    pub fn uncover(&mut self, coords: Coord2) -> Result<GameStatus> {
        let coords = self.board.validate_coords(coords)?;
        if self.status.is_finished() {
            log::debug!("Ignoring uncover at {:?}, game is {:?}", coords, self.status);
            return Ok(self.status);
        }

        let outcome = self.board.reveal(coords)?;
        if !outcome.has_update() {
            return Ok(self.status);
        }
        self.mark_started();

        match outcome {
            RevealOutcome::HitMine => {
                self.triggered_mine = Some(coords);
                self.end_game(GameStatus::Lost);
                self.observers.emit(GameEvent::GameLost { trigger: coords });
            }
            RevealOutcome::Revealed(changed_cells) => {
                let cleared = self.board.is_cleared();
                if cleared {
                    self.end_game(GameStatus::Won);
                }
                self.observers.emit(GameEvent::CellsUpdated { changed_cells });
                if cleared {
                    self.observers.emit(GameEvent::GameWon);
                }
            }
            RevealOutcome::AlreadyResolved => {}
        }
        Ok(self.status)
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        let coords = self.board.validate_coords(coords)?;
        if self.status.is_finished() {
            return Ok(FlagOutcome::Ineffective);
        }

        let outcome = self.board.toggle_flag(coords)?;
        if outcome.has_update() {
            log::trace!("{:?} at {:?}", outcome, coords);
            self.observers.emit(GameEvent::CellsUpdated {
                changed_cells: vec![coords],
            });
        }
        Ok(outcome)
    }

    /// Advances the clock; frozen unless the game is in progress.
    pub fn tick(&mut self, increment_ms: u64) {
        if matches!(self.status, GameStatus::InProgress) {
            self.elapsed_ms = self.elapsed_ms.saturating_add(increment_ms);
        }
    }

    /// Checks if the state is initial and changes to in-progress
    fn mark_started(&mut self) {
        if self.status.is_ready() {
            log::debug!("Game started");
            self.status = GameStatus::InProgress;
            self.observers.emit(GameEvent::GameStarted);
        }
    }

    fn end_game(&mut self, status: GameStatus) {
        if self.status.is_finished() {
            return;
        }
        log::debug!("Game ended: {:?} after {} ms", status, self.elapsed_ms);
        self.status = status;
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> GameConfig {
        self.board.config()
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn cell_view(&self, coords: Coord2) -> Result<CellView> {
        self.board.view_at(coords)
    }

    pub fn revealed_safe_count(&self) -> CellCount {
        self.board.revealed_safe_count()
    }

    pub fn total_safe_count(&self) -> CellCount {
        self.board.total_safe_count()
    }

    pub fn flagged_count(&self) -> CellCount {
        self.board.flagged_count()
    }

    /// Flag counter as displayed to the player, capped at the mine count.
    pub fn displayed_flag_count(&self) -> CellCount {
        self.flagged_count().min(self.mine_count())
    }

    /// How many mines have not been flagged yet; negative when over-flagged
    pub fn mines_left(&self) -> i32 {
        i32::from(self.mine_count()) - i32::from(self.flagged_count())
    }

    pub fn mine_count(&self) -> CellCount {
        self.board.mine_count()
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_ms / 1000
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// End-of-game marking for mines and misplaced flags, `None` while the game runs.
    pub fn debrief(&self, coords: Coord2) -> Result<Option<Debrief>> {
        let state = self.board.state_at(coords)?;
        if !self.status.is_finished() {
            return Ok(None);
        }

        let has_mine = self.board.has_mine_at(coords)?;
        Ok(match (state, has_mine) {
            (CellState::Revealed, true) => Some(Debrief::Exploded),
            (CellState::Flagged, true) => Some(Debrief::FlaggedMine),
            (CellState::Hidden, true) => Some(Debrief::Mine),
            (CellState::Flagged, false) => Some(Debrief::IncorrectFlag),
            (_, false) => None,
        })
    }
}
