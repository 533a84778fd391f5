//! Word representation
//!
//! A Word is a non-empty, lowercase ASCII alphabetic string. Its length is not
//! fixed here; the game decides which lengths are playable.

use std::borrow::Borrow;
use std::fmt;

/// A lowercase alphabetic word
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word, normalizing to lowercase
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty, contains non-ASCII characters,
    /// or contains anything other than letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("Apple").unwrap();
    /// assert_eq!(word.text(), "apple");
    ///
    /// assert!(Word::new("ap ple").is_err());
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Never true for a constructed Word
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the word contains a specific letter anywhere
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.chars().contains(&letter)
    }
}

impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("apple").unwrap();
        assert_eq!(word.text(), "apple");
        assert_eq!(word.chars(), b"apple");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        assert_eq!(Word::new("APPLE").unwrap().text(), "apple");
        assert_eq!(Word::new("ApPlE").unwrap().text(), "apple");
    }

    #[test]
    fn word_any_length() {
        assert_eq!(Word::new("a").unwrap().len(), 1);
        assert_eq!(Word::new("strength").unwrap().len(), 8);
    }

    #[test]
    fn word_creation_invalid() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("café"), Err(WordError::NonAscii));
        assert_eq!(Word::new("app1e"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("ap le"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("-1"), Err(WordError::InvalidCharacters));
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("apple").unwrap();
        assert!(word.has_letter(b'a'));
        assert!(word.has_letter(b'p'));
        assert!(!word.has_letter(b'z'));
    }

    #[test]
    fn word_hash_lookup_by_str() {
        let mut set = rustc_hash::FxHashSet::default();
        set.insert(Word::new("apple").unwrap());
        assert!(set.contains("apple"));
        assert!(!set.contains("angle"));
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "crane");
    }
}
