//! Core domain types for the game
//!
//! Pure, dependency-free types: words and the feedback patterns produced by
//! scoring one word against another.

mod pattern;
mod word;

pub use pattern::{Mark, Pattern};
pub use word::{Word, WordError};
