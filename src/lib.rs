//! Wordle Game
//!
//! A command-line word-guessing game with a configurable word length.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::game::{Game, GameState, Input};
//! use wordle_game::wordlists::CandidateSet;
//!
//! let candidates = CandidateSet::from_words(5, ["apple", "angle", "maple"]);
//! let mut game = Game::with_answer(candidates, "apple").unwrap();
//!
//! if let Input::Guess(word) = game.validate_input("Angle").unwrap() {
//!     let pattern = game.score_guess(word).unwrap();
//!     assert_eq!(pattern.to_string(), "GBBGG");
//! }
//! assert!(!game.check_won());
//! assert_eq!(game.state(), GameState::InProgress);
//! ```

// Core domain types
pub mod core;

// Game engine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Logger setup
pub mod logging;
