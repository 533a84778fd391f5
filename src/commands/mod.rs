//! Command implementations

pub mod play;

pub use play::{DEFAULT_NUM_CHARS, GameSummary, PlayConfig, run_game, run_play};
