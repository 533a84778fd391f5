//! Game errors

use std::fmt;

/// Errors raised by the game engine
///
/// `EmptyCandidateSet` is fatal at startup. `InvalidGuessLength` and
/// `UnknownWord` are reported to the player and the round is retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    EmptyCandidateSet { num_chars: usize },
    InvalidGuessLength { expected: usize, actual: usize },
    UnknownWord(String),
    GameOver,
}

impl GameError {
    /// Whether the input loop can simply ask again
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidGuessLength { .. } | Self::UnknownWord(_)
        )
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCandidateSet { num_chars } => {
                write!(f, "No words of {num_chars} characters in the dictionary")
            }
            Self::InvalidGuessLength { expected, .. } => {
                write!(f, "Please enter a word of {expected} characters.")
            }
            Self::UnknownWord(_) => write!(f, "Word not in dictionary. Please try again."),
            Self::GameOver => write!(f, "The game is already over"),
        }
    }
}

impl std::error::Error for GameError {}
