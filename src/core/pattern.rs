//! Feedback pattern calculation and representation
//!
//! A pattern holds one [`Mark`] per letter of a guess:
//! - `G` = Exact (letter in correct position)
//! - `Y` = Present (letter in word, wrong position)
//! - `B` = Absent (letter not in word)
//!
//! Scoring uses simple membership for `Present`: a letter that appears anywhere
//! in the answer is marked `Present` on every non-exact occurrence, however many
//! times it appears in the guess.

use super::Word;
use std::fmt;

/// Feedback for a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Exact,
    Present,
    Absent,
}

impl Mark {
    /// Single-letter code used in result strings
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Exact => 'G',
            Self::Present => 'Y',
            Self::Absent => 'B',
        }
    }

    /// Human-readable explanation printed in the round history
    #[must_use]
    pub const fn explanation(self) -> &'static str {
        match self {
            Self::Exact => "Green, Position and Value both correct.",
            Self::Present => "Yellow, Value is correct, Position is incorrect.",
            Self::Absent => "Black, neither Position nor Value is correct.",
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }
}

/// Feedback pattern for a guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern(Vec<Mark>);

impl Pattern {
    /// Calculate the pattern when `guess` is guessed and `answer` is the target
    ///
    /// Each position is judged on its own, left to right. There is no
    /// bookkeeping of letters already matched elsewhere.
    ///
    /// Callers must pass words of equal length; positions past the shorter
    /// word are not scored.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Pattern, Word};
    ///
    /// let guess = Word::new("angle").unwrap();
    /// let answer = Word::new("apple").unwrap();
    /// assert_eq!(Pattern::calculate(&guess, &answer).to_string(), "GBBGG");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        debug_assert_eq!(guess.len(), answer.len(), "words must be equal length");

        let marks = guess
            .chars()
            .iter()
            .zip(answer.chars())
            .map(|(&g, &a)| {
                if g == a {
                    Mark::Exact
                } else if answer.has_letter(g) {
                    Mark::Present
                } else {
                    Mark::Absent
                }
            })
            .collect();

        Self(marks)
    }

    /// The marks, one per letter
    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if this is a perfect match (all exact)
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&m| m == Mark::Exact)
    }

    /// Convert pattern to emoji string like "🟩⬛⬛🟩🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|m| m.emoji()).collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(guess: &str, answer: &str) -> String {
        let guess = Word::new(guess).unwrap();
        let answer = Word::new(answer).unwrap();
        Pattern::calculate(&guess, &answer).to_string()
    }

    #[test]
    fn pattern_worked_example() {
        assert_eq!(score("angle", "apple"), "GBBGG");
    }

    #[test]
    fn pattern_all_exact() {
        let word = Word::new("apple").unwrap();
        let pattern = Pattern::calculate(&word, &word);

        assert!(pattern.is_perfect());
        assert_eq!(pattern.marks(), [Mark::Exact; 5]);
        assert_eq!(pattern.to_string(), "GGGGG");
    }

    #[test]
    fn pattern_all_absent() {
        let guess = Word::new("fghij").unwrap();
        let answer = Word::new("abcde").unwrap();
        let pattern = Pattern::calculate(&guess, &answer);

        assert_eq!(pattern.to_string(), "BBBBB");
        assert!(!pattern.is_perfect());
        assert!(pattern.marks().iter().all(|&m| m == Mark::Absent));
    }

    #[test]
    fn pattern_present_letters() {
        // every letter of "ate" appears in "tea", none in place
        assert_eq!(score("ate", "tea"), "YYY");
    }

    #[test]
    fn pattern_duplicate_letters_not_consumed() {
        // "apple" has a single 'e' yet both guessed 'e's are marked
        assert_eq!(score("eerie", "apple"), "YYBBG");
        // "apple" has one 'a'; the extra 'a's still count as present
        assert_eq!(score("llama", "apple"), "YYYBY");
        // three guessed 'p's against the two in "apple"
        assert_eq!(score("puppy", "apple"), "YBGYB");
    }

    #[test]
    fn pattern_reflexive_for_many_lengths() {
        for word in ["a", "ox", "cat", "tree", "apple", "strand", "keyboard"] {
            let w = Word::new(word).unwrap();
            assert!(Pattern::calculate(&w, &w).is_perfect());
        }
    }

    #[test]
    fn pattern_length_and_alphabet() {
        let pairs = [("crane", "slate"), ("robot", "floor"), ("speed", "erase")];
        for (guess, answer) in pairs {
            let result = score(guess, answer);
            assert_eq!(result.len(), answer.len());
            assert!(result.chars().all(|c| matches!(c, 'G' | 'Y' | 'B')));
        }
    }

    #[test]
    fn perfect_implies_equal() {
        let words = ["apple", "angle", "ample", "maple", "plead"];
        for guess in words {
            for answer in words {
                let g = Word::new(guess).unwrap();
                let a = Word::new(answer).unwrap();
                if Pattern::calculate(&g, &a).is_perfect() {
                    assert_eq!(g, a);
                }
            }
        }
    }

    #[test]
    fn pattern_display_and_emoji() {
        let guess = Word::new("ate").unwrap();
        let answer = Word::new("axe").unwrap();
        let pattern = Pattern::calculate(&guess, &answer);

        assert_eq!(pattern.marks(), [Mark::Exact, Mark::Absent, Mark::Exact]);
        assert_eq!(pattern.to_string(), "GBG");
        assert_eq!(pattern.to_emoji(), "🟩⬛🟩");
        assert_eq!(pattern.len(), 3);
    }

    #[test]
    fn mark_symbols() {
        assert_eq!(Mark::Exact.symbol(), 'G');
        assert_eq!(Mark::Present.symbol(), 'Y');
        assert_eq!(Mark::Absent.symbol(), 'B');
        assert_eq!(Mark::Present.emoji(), '🟨');
    }

    #[test]
    fn mark_explanations() {
        assert_eq!(
            Mark::Exact.explanation(),
            "Green, Position and Value both correct."
        );
        assert_eq!(
            Mark::Present.explanation(),
            "Yellow, Value is correct, Position is incorrect."
        );
        assert_eq!(
            Mark::Absent.explanation(),
            "Black, neither Position nor Value is correct."
        );
    }
}
