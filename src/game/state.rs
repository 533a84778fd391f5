//! Game lifecycle state

use std::fmt;

/// Where a game stands
///
/// `Won` and `Lost` are terminal: once reached, the state never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl GameState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::InProgress => "in_progress",
            Self::Won => "won",
            Self::Lost => "lost",
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
