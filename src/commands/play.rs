//! Interactive play mode
//!
//! The blocking read-validate-retry loop that runs one game over any line
//! based input and writer.

use crate::core::Word;
use crate::game::{Game, GameState, Input};
use crate::output::{
    print_banner, print_history, print_prompt, print_rejection, print_round_header, print_summary,
};
use crate::wordlists::WordSource;
use anyhow::{Context, Result};
use log::info;
use std::io::{BufRead, Write};

/// Default word length
pub const DEFAULT_NUM_CHARS: usize = 5;

/// Configuration for a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayConfig {
    pub num_chars: usize,
}

impl PlayConfig {
    #[must_use]
    pub const fn new(num_chars: usize) -> Self {
        Self { num_chars }
    }
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self::new(DEFAULT_NUM_CHARS)
    }
}

/// Outcome of a finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub state: GameState,
    pub rounds: usize,
    pub answer: String,
}

impl From<&Game> for GameSummary {
    fn from(game: &Game) -> Self {
        Self {
            state: game.state(),
            rounds: game.rounds(),
            answer: game.answer().text().to_string(),
        }
    }
}

/// Build a game from a word source and play it to the end
///
/// # Errors
///
/// Returns an error if no word of the configured length exists, or on I/O
/// failure while reading input or writing output.
pub fn run_play<S, R, W>(
    config: PlayConfig,
    source: &S,
    input: R,
    out: &mut W,
) -> Result<GameSummary>
where
    S: WordSource + ?Sized,
    R: BufRead,
    W: Write,
{
    let candidates = source.candidates(config.num_chars);
    print_banner(out, config.num_chars, source.total(), candidates.len())?;

    let mut game = Game::start(candidates, &mut rand::rng())
        .with_context(|| format!("Cannot start a game of {} characters", config.num_chars))?;

    run_game(&mut game, input, out)
}

/// Play an already started game until it is won or abandoned
///
/// Invalid guesses are reported and the round is retried. The quit sentinel,
/// or running out of input, ends the game as lost.
///
/// # Errors
///
/// Returns an error on I/O failure.
pub fn run_game<R, W>(game: &mut Game, mut input: R, out: &mut W) -> Result<GameSummary>
where
    R: BufRead,
    W: Write,
{
    while game.state() == GameState::InProgress {
        print_round_header(out, game.rounds() + 1)?;

        let Some(guess) = read_guess(game, &mut input, out)? else {
            game.quit();
            break;
        };

        game.score_guess(guess)?;
        print_history(out, game)?;
        game.check_won();
    }

    print_summary(out, game)?;
    Ok(GameSummary::from(&*game))
}

/// Prompt until a valid guess arrives; `None` means the player quit
fn read_guess<R, W>(game: &Game, input: &mut R, out: &mut W) -> Result<Option<Word>>
where
    R: BufRead,
    W: Write,
{
    loop {
        print_prompt(out)?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .context("Failed to read guess")?;
        if read == 0 {
            info!("Input closed, ending game");
            writeln!(out)?;
            return Ok(None);
        }

        match game.validate_input(&line) {
            Ok(Input::Guess(word)) => return Ok(Some(word)),
            Ok(Input::Quit) => return Ok(None),
            Err(e) if e.is_recoverable() => print_rejection(out, &e)?,
            Err(e) => return Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::CandidateSet;
    use std::io::Cursor;

    const WORDS: &[&str] = &["apple", "angle", "ample", "maple", "plead"];

    fn game(answer: &str) -> Game {
        let candidates = CandidateSet::from_words(5, WORDS.iter().copied());
        Game::with_answer(candidates, answer).unwrap()
    }

    fn play(answer: &str, input: &str) -> (Game, GameSummary, String) {
        let mut game = game(answer);
        let mut out = Vec::new();
        let summary = run_game(&mut game, Cursor::new(input), &mut out).unwrap();
        (game, summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn win_on_first_guess() {
        let (game, summary, out) = play("apple", "apple\n");

        assert_eq!(summary.state, GameState::Won);
        assert_eq!(summary.rounds, 1);
        assert_eq!(summary.answer, "apple");
        assert_eq!(game.results()[0].to_string(), "GGGGG");
        assert!(out.contains("ROUND 1"));
        assert!(out.contains("Number of Rounds = 1"));
    }

    #[test]
    fn win_after_miss() {
        let (game, summary, out) = play("apple", "angle\napple\n");

        assert_eq!(summary.state, GameState::Won);
        assert_eq!(summary.rounds, 2);
        assert_eq!(game.results()[0].to_string(), "GBBGG");
        assert!(out.contains("ROUND 2"));
        assert!(!out.contains("ROUND 3"));
    }

    #[test]
    fn quit_immediately() {
        let (game, summary, out) = play("apple", "-1\n");

        assert_eq!(summary.state, GameState::Lost);
        assert_eq!(summary.rounds, 0);
        assert!(game.results().is_empty());
        assert!(out.contains("apple"));
    }

    #[test]
    fn quit_stops_further_scoring() {
        let (game, summary, _) = play("apple", "angle\n-1\napple\n");

        assert_eq!(summary.state, GameState::Lost);
        assert_eq!(summary.rounds, 1);
        assert_eq!(game.guesses().len(), game.results().len());
    }

    #[test]
    fn invalid_input_retries_same_round() {
        let (game, summary, out) = play("apple", "hi\nzebra\napple\n");

        assert_eq!(summary.state, GameState::Won);
        assert_eq!(summary.rounds, 1);
        assert_eq!(game.guesses().len(), 1);
        assert!(out.contains("Please enter a word of 5 characters."));
        assert!(out.contains("Word not in dictionary. Please try again."));
        assert!(!out.contains("ROUND 2"));
    }

    #[test]
    fn end_of_input_loses() {
        let (_, summary, _) = play("apple", "angle\n");
        assert_eq!(summary.state, GameState::Lost);
        assert_eq!(summary.rounds, 1);
    }

    #[test]
    fn finished_game_only_prints_summary() {
        let mut game = game("apple");
        game.quit();

        let mut out = Vec::new();
        let summary = run_game(&mut game, Cursor::new("apple\n"), &mut out).unwrap();
        assert_eq!(summary.state, GameState::Lost);
        assert_eq!(summary.rounds, 0);

        let out = String::from_utf8(out).unwrap();
        assert!(!out.contains("ROUND 1"));
        assert!(out.contains("Number of Rounds = 0"));
    }

    #[test]
    fn run_play_with_injected_words() {
        let source: &[&str] = &["apple"];
        let mut out = Vec::new();

        let summary = run_play(
            PlayConfig::default(),
            source,
            Cursor::new("apple\n"),
            &mut out,
        )
        .unwrap();

        assert_eq!(summary.state, GameState::Won);
        assert_eq!(summary.answer, "apple");
        let out = String::from_utf8(out).unwrap();
        let banner = [
            "Started a Wordle instance of 5 characters.",
            "Randomly selecting a 5 characters word from the corpus.",
            "All English words = 1",
            "Candidate words = 1",
            "Done. Ready to start Wordle.",
        ];
        let positions: Vec<usize> = banner.iter().map(|line| out.find(line).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn run_play_without_candidates_fails() {
        let source: &[&str] = &["apple", "angle"];
        let mut out = Vec::new();

        let err = run_play(PlayConfig::new(6), source, Cursor::new(""), &mut out).unwrap_err();
        assert_eq!(
            err.downcast_ref::<crate::game::GameError>(),
            Some(&crate::game::GameError::EmptyCandidateSet { num_chars: 6 })
        );
    }
}
