//! Commonly used types for ease of import.

pub use crate::{
    Board, BoardError, Counters, GameConfig, GameSession, GameStatus, ShotOutcome, ShotReport,
};

#[cfg(feature = "std")]
pub use crate::{cli::GameArgs, init_logging};
