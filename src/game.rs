//! Game session: strike rules, counters and win/loss state on top of a
//! [`Board`].

use crate::{
    board::{Board, Grid},
    common::{BoardError, ShotOutcome},
    config::{GameConfig, BOARD_SIZE, MISSES_PER_STRIKE, STRIKES_TO_LOSE, TOTAL_SHIP_CELLS},
};
use log::{debug, info};
use rand::{rngs::SmallRng, SeedableRng};

const GRID_SIZE: usize = BOARD_SIZE as usize;

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Per-game counters shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Counters {
    /// Misses since the last hit or the last strike.
    pub consecutive_misses: u32,
    pub strikes: u32,
    pub total_hits: u32,
    pub total_misses: u32,
}

/// What the player sees for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellMark {
    #[default]
    Untouched,
    Hit,
    Miss,
}

/// Everything a presentation layer needs after one accepted shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotReport {
    pub row: usize,
    pub col: usize,
    pub outcome: ShotOutcome,
    pub counters: Counters,
    /// The hit completed a ship.
    pub sunk: bool,
    pub status: GameStatus,
}

/// Serializable view of a session for rendering or saving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionSnapshot {
    pub status: GameStatus,
    pub counters: Counters,
    pub cells: [[CellMark; GRID_SIZE]; GRID_SIZE],
}

/// One single-player game against a randomly placed fleet.
///
/// The session owns its RNG so that [`GameSession::new_game`] needs no
/// arguments; seed it with [`GameSession::from_seed`] for reproducible games.
pub struct GameSession {
    config: GameConfig,
    rng: SmallRng,
    board: Board,
    hits: Grid,
    misses: Grid,
    counters: Counters,
    status: GameStatus,
}

impl GameSession {
    /// Start a game with the default configuration and an OS-seeded RNG.
    #[cfg(feature = "std")]
    pub fn new() -> Result<Self, BoardError> {
        Self::with_config(GameConfig::default())
    }

    /// Start a game with `config` and an OS-seeded RNG.
    #[cfg(feature = "std")]
    pub fn with_config(config: GameConfig) -> Result<Self, BoardError> {
        let mut seed_rng = rand::rng();
        Self::with_rng(config, SmallRng::from_rng(&mut seed_rng))
    }

    /// Start a reproducible game: the same seed and config always produce the
    /// same sequence of boards.
    pub fn from_seed(config: GameConfig, seed: u64) -> Result<Self, BoardError> {
        Self::with_rng(config, SmallRng::seed_from_u64(seed))
    }

    /// Start a game drawing placements from `rng`.
    pub fn with_rng(config: GameConfig, rng: SmallRng) -> Result<Self, BoardError> {
        let mut session = GameSession {
            config,
            rng,
            board: Board::new(config),
            hits: Grid::new(),
            misses: Grid::new(),
            counters: Counters::default(),
            status: GameStatus::InProgress,
        };
        session.new_game()?;
        Ok(session)
    }

    /// Throw away the current game and start a fresh one on a newly placed
    /// board. Valid from any status.
    pub fn new_game(&mut self) -> Result<(), BoardError> {
        let mut board = Board::new(self.config);
        board.reset(&mut self.rng)?;
        self.board = board;
        self.hits = Grid::new();
        self.misses = Grid::new();
        self.counters = Counters::default();
        self.status = GameStatus::InProgress;
        info!("new game started with {} ship cells", self.board.occupied_cells());
        Ok(())
    }

    /// Fire at (`row`, `col`).
    ///
    /// Returns `None` without touching any state when the game is over, the
    /// cell was already fired upon, or the cell is off the grid.
    pub fn fire_at(&mut self, row: usize, col: usize) -> Option<ShotReport> {
        if self.status.is_over() {
            debug!("shot at ({}, {}) ignored: game is {:?}", row, col, self.status);
            return None;
        }
        match self.is_fired(row, col) {
            Ok(false) => {}
            Ok(true) => {
                debug!("shot at ({}, {}) ignored: already fired", row, col);
                return None;
            }
            Err(e) => {
                debug!("shot at ({}, {}) ignored: {}", row, col, e);
                return None;
            }
        }
        let outcome = self.board.fire_at(row, col).ok()?;

        let mut sunk = false;
        match outcome {
            ShotOutcome::Hit => {
                self.hits.set(row, col).ok()?;
                self.counters.total_hits += 1;
                self.counters.consecutive_misses = 0;
                sunk = self.board.is_ship_fully_sunk(row, col, &self.hits);
            }
            ShotOutcome::Miss => {
                self.misses.set(row, col).ok()?;
                self.counters.total_misses += 1;
                self.counters.consecutive_misses += 1;
                if self.counters.consecutive_misses == MISSES_PER_STRIKE {
                    self.counters.consecutive_misses = 0;
                    self.counters.strikes += 1;
                    debug!("strike {} recorded", self.counters.strikes);
                }
            }
        }

        self.status = self.evaluate();
        debug!("shot at ({}, {}): {:?}, sunk={}", row, col, outcome, sunk);
        if self.status.is_over() {
            info!("game over: {:?} with {:?}", self.status, self.counters);
        }

        Some(ShotReport {
            row,
            col,
            outcome,
            counters: self.counters,
            sunk,
            status: self.status,
        })
    }

    fn evaluate(&self) -> GameStatus {
        if self.counters.strikes >= STRIKES_TO_LOSE {
            GameStatus::Lost
        } else if self.counters.total_hits as usize >= TOTAL_SHIP_CELLS {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    /// Whether (`row`, `col`) has already been fired upon this game.
    pub fn is_fired(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        Ok(self.hits.get(row, col)? || self.misses.get(row, col)?)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn counters(&self) -> Counters {
        self.counters
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// Read access to the hidden board, e.g. for revealing it after a loss.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cells fired upon that hit a ship.
    pub fn hits(&self) -> Grid {
        self.hits
    }

    /// Cells fired upon that hit open water.
    pub fn misses(&self) -> Grid {
        self.misses
    }

    /// Generate a snapshot of what the player can see.
    pub fn snapshot(&self) -> SessionSnapshot {
        let mut cells = [[CellMark::Untouched; GRID_SIZE]; GRID_SIZE];
        for (r, c) in self.hits.cells() {
            cells[r][c] = CellMark::Hit;
        }
        for (r, c) in self.misses.cells() {
            cells[r][c] = CellMark::Miss;
        }
        SessionSnapshot {
            status: self.status,
            counters: self.counters,
            cells,
        }
    }
}
