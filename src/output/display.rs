//! Display functions for the game transcript
//!
//! Everything is written to a caller-supplied writer so the game loop can be
//! driven against stdout or an in-memory buffer.

use super::formatters::{emoji_grid, explanation, letter_tile, word_tiles};
use crate::game::{Game, GameError, GameState, HistoryEntry, QUIT_SENTINEL};
use colored::Colorize;
use std::io::{self, Write};

const RULE_WIDTH: usize = 50;

/// Print the startup banner and dictionary statistics
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn print_banner<W: Write>(
    out: &mut W,
    num_chars: usize,
    total_words: usize,
    candidate_words: usize,
) -> io::Result<()> {
    writeln!(
        out,
        "\nStarted a Wordle instance of {num_chars} characters.\n"
    )?;
    writeln!(
        out,
        "Randomly selecting a {num_chars} characters word from the corpus."
    )?;
    writeln!(out, "All English words = {total_words}")?;
    writeln!(out, "Candidate words = {candidate_words}")?;
    writeln!(out, "{}", "Done. Ready to start Wordle.".bright_green())
}

/// Print the header for a round
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn print_round_header<W: Write>(out: &mut W, round: usize) -> io::Result<()> {
    writeln!(out, "\n{}", "=".repeat(RULE_WIDTH).cyan())?;
    writeln!(out, "{}\n", format!("ROUND {round}").bright_cyan().bold())
}

/// Print the guess prompt without a trailing newline
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn print_prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "Enter Guess ({QUIT_SENTINEL} to end game): ")?;
    out.flush()
}

/// Tell the player why their input was not accepted
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn print_rejection<W: Write>(out: &mut W, error: &GameError) -> io::Result<()> {
    writeln!(out, "{}\n", error.to_string().red())
}

/// Print one round: the tiles, then one explanation line per letter
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn print_entry<W: Write>(out: &mut W, entry: &HistoryEntry<'_>) -> io::Result<()> {
    writeln!(
        out,
        "\n{}  {}",
        entry.guess,
        word_tiles(entry.guess, entry.pattern)
    )?;

    for (letter, mark) in entry.explain() {
        writeln!(out, "{}: {}", letter_tile(letter, mark), explanation(mark))?;
    }

    Ok(())
}

/// Print every round played so far
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn print_history<W: Write>(out: &mut W, game: &Game) -> io::Result<()> {
    for entry in game.history() {
        print_entry(out, &entry)?;
    }
    Ok(())
}

/// Print the end-of-game summary
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn print_summary<W: Write>(out: &mut W, game: &Game) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(out, "\n{}\n", rule.cyan())?;

    let state = game.state().to_string();
    let state = if game.state() == GameState::Won {
        state.bright_green().bold()
    } else {
        state.red().bold()
    };

    writeln!(out, "Final Game State = {state}")?;
    writeln!(out, "Number of Rounds = {}", game.rounds())?;
    writeln!(
        out,
        "Correct Answer = {}",
        game.answer().text().bright_yellow().bold()
    )?;

    if game.rounds() > 0 {
        writeln!(out, "\n{}", emoji_grid(game.results()))?;
    }

    writeln!(out, "\n{}\n", rule.cyan())
}
