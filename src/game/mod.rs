//! Game engine
//!
//! Answer selection, guess validation, scoring and win/loss tracking for a
//! single game.

mod engine;
mod error;
mod state;

pub use engine::{Game, HistoryEntry, Input, QUIT_SENTINEL, select_answer};
pub use error::GameError;
pub use state::GameState;
