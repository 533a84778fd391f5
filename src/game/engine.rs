//! The game engine
//!
//! Owns the answer, the candidate set and the parallel guess/result
//! histories, and drives the `InProgress -> Won | Lost` state machine.

use super::{GameError, GameState};
use crate::core::{Mark, Pattern, Word};
use crate::wordlists::CandidateSet;
use log::{debug, info, trace};
use rand::CryptoRng;

/// Input that ends the game when entered at the prompt
pub const QUIT_SENTINEL: &str = "-1";

/// A validated line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Guess(Word),
    Quit,
}

/// One round of history: a guess and its score
#[derive(Debug, Clone, Copy)]
pub struct HistoryEntry<'a> {
    pub round: usize,
    pub guess: &'a Word,
    pub pattern: &'a Pattern,
}

impl HistoryEntry<'_> {
    /// Each guessed letter with its mark, left to right
    pub fn explain(&self) -> impl Iterator<Item = (char, Mark)> + '_ {
        self.guess
            .chars()
            .iter()
            .map(|&b| char::from(b))
            .zip(self.pattern.marks().iter().copied())
    }
}

/// Pick the answer for a new game
///
/// # Errors
///
/// Returns `GameError::EmptyCandidateSet` if there is nothing to choose from.
pub fn select_answer<R: CryptoRng + ?Sized>(
    candidates: &CandidateSet,
    rng: &mut R,
) -> Result<Word, GameError> {
    let answer = candidates
        .choose(rng)
        .cloned()
        .ok_or(GameError::EmptyCandidateSet {
            num_chars: candidates.num_chars(),
        })?;

    info!(
        "Selected a {}-letter answer from {} candidates",
        candidates.num_chars(),
        candidates.len()
    );
    trace!("Answer: {answer}");

    Ok(answer)
}

/// A single game
#[derive(Debug, Clone)]
pub struct Game {
    candidates: CandidateSet,
    answer: Word,
    guesses: Vec<Word>,
    results: Vec<Pattern>,
    state: GameState,
}

impl Game {
    /// Start a game with a randomly selected answer
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyCandidateSet` if `candidates` is empty.
    pub fn start<R: CryptoRng + ?Sized>(
        candidates: CandidateSet,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let answer = select_answer(&candidates, rng)?;
        Ok(Self::new_unchecked(candidates, answer))
    }

    /// Start a game with a known answer
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyCandidateSet` if `candidates` is empty,
    /// `InvalidGuessLength` if the answer has the wrong length, and
    /// `UnknownWord` if it is not a candidate.
    pub fn with_answer(candidates: CandidateSet, answer: &str) -> Result<Self, GameError> {
        if candidates.is_empty() {
            return Err(GameError::EmptyCandidateSet {
                num_chars: candidates.num_chars(),
            });
        }

        let answer = match candidates.get(answer) {
            Some(word) => word.clone(),
            None if answer.chars().count() != candidates.num_chars() => {
                return Err(GameError::InvalidGuessLength {
                    expected: candidates.num_chars(),
                    actual: answer.chars().count(),
                });
            }
            None => return Err(GameError::UnknownWord(answer.to_string())),
        };

        Ok(Self::new_unchecked(candidates, answer))
    }

    fn new_unchecked(candidates: CandidateSet, answer: Word) -> Self {
        Self {
            candidates,
            answer,
            guesses: Vec::new(),
            results: Vec::new(),
            state: GameState::InProgress,
        }
    }

    #[inline]
    #[must_use]
    pub const fn num_chars(&self) -> usize {
        self.candidates.num_chars()
    }

    #[inline]
    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    #[inline]
    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    #[must_use]
    pub fn results(&self) -> &[Pattern] {
        &self.results
    }

    /// Number of scored rounds so far
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.guesses.len()
    }

    /// Check one line of player input
    ///
    /// The line is trimmed and lowercased. [`QUIT_SENTINEL`] yields
    /// `Input::Quit`; the caller decides whether to act on it with
    /// [`Game::quit`]. Nothing is recorded here.
    ///
    /// # Errors
    ///
    /// - `GameOver` if the game has already finished
    /// - `InvalidGuessLength` if the input is not `num_chars` characters
    /// - `UnknownWord` if the input is not a candidate word
    pub fn validate_input(&self, raw: &str) -> Result<Input, GameError> {
        if self.state.is_terminal() {
            return Err(GameError::GameOver);
        }

        let guess = raw.trim().to_lowercase();

        if guess == QUIT_SENTINEL {
            return Ok(Input::Quit);
        }

        let actual = guess.chars().count();
        if actual != self.num_chars() {
            debug!("Rejected {guess:?}: expected {} characters", self.num_chars());
            return Err(GameError::InvalidGuessLength {
                expected: self.num_chars(),
                actual,
            });
        }

        match self.candidates.get(&guess) {
            Some(word) => Ok(Input::Guess(word.clone())),
            None => {
                debug!("Rejected {guess:?}: not in dictionary");
                Err(GameError::UnknownWord(guess))
            }
        }
    }

    /// Score a validated guess and record it
    ///
    /// The guess and its result are appended together, so both histories
    /// always have the same length.
    ///
    /// # Errors
    ///
    /// Returns `GameOver` if the game has finished, and the same validation
    /// errors as [`Game::validate_input`] if the word is not a candidate.
    pub fn score_guess(&mut self, guess: Word) -> Result<&Pattern, GameError> {
        if self.state.is_terminal() {
            return Err(GameError::GameOver);
        }
        if guess.len() != self.num_chars() {
            return Err(GameError::InvalidGuessLength {
                expected: self.num_chars(),
                actual: guess.len(),
            });
        }
        if !self.candidates.contains(guess.text()) {
            return Err(GameError::UnknownWord(guess.text().to_string()));
        }

        let pattern = Pattern::calculate(&guess, &self.answer);
        debug!("Round {}: {guess} -> {pattern}", self.guesses.len() + 1);

        self.guesses.push(guess);
        self.results.push(pattern);

        Ok(&self.results[self.results.len() - 1])
    }

    /// Whether the latest result is all exact; moves the game to `Won` if so
    pub fn check_won(&mut self) -> bool {
        let won = self.results.last().is_some_and(Pattern::is_perfect);

        if won && self.state == GameState::InProgress {
            self.state = GameState::Won;
            info!("Game won in {} rounds", self.rounds());
        }

        won && self.state == GameState::Won
    }

    /// Give up; moves an in-progress game to `Lost`
    pub fn quit(&mut self) {
        if self.state == GameState::InProgress {
            self.state = GameState::Lost;
            info!("Game lost after {} rounds", self.rounds());
        }
    }

    /// Read-only view of every round so far, oldest first
    pub fn history(&self) -> impl Iterator<Item = HistoryEntry<'_>> {
        self.guesses
            .iter()
            .zip(&self.results)
            .enumerate()
            .map(|(i, (guess, pattern))| HistoryEntry {
                round: i + 1,
                guess,
                pattern,
            })
    }
}
