//! Formatting utilities for terminal output

use crate::core::{Mark, Pattern, Word};
use colored::{ColoredString, Colorize};

/// Format one letter as a colored tile
#[must_use]
pub fn letter_tile(letter: char, mark: Mark) -> ColoredString {
    let tile = format!(" {} ", letter.to_ascii_uppercase());
    match mark {
        Mark::Exact => tile.black().on_green().bold(),
        Mark::Present => tile.black().on_yellow().bold(),
        Mark::Absent => tile.white().on_bright_black(),
    }
}

/// Format a whole guess as a row of colored tiles
#[must_use]
pub fn word_tiles(word: &Word, pattern: &Pattern) -> String {
    word.chars()
        .iter()
        .zip(pattern.marks())
        .map(|(&b, &mark)| letter_tile(char::from(b), mark).to_string())
        .collect()
}

/// Color a mark's explanation text to match its tile
#[must_use]
pub fn explanation(mark: Mark) -> ColoredString {
    let text = mark.explanation();
    match mark {
        Mark::Exact => text.green(),
        Mark::Present => text.yellow(),
        Mark::Absent => text.bright_black(),
    }
}

/// Shareable emoji grid, one line per guess
#[must_use]
pub fn emoji_grid<'a, I>(patterns: I) -> String
where
    I: IntoIterator<Item = &'a Pattern>,
{
    patterns
        .into_iter()
        .map(Pattern::to_emoji)
        .collect::<Vec<_>>()
        .join("\n")
}
