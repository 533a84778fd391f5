//! Candidate sets
//!
//! The words of one length that may be guessed or chosen as the answer.

use crate::core::Word;
use rand::CryptoRng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// Deduplicated words of a single length
///
/// Keeps insertion order for selection and a hash set for membership tests.
#[derive(Debug, Clone)]
pub struct CandidateSet {
    num_chars: usize,
    words: Vec<Word>,
    lookup: FxHashSet<Word>,
}

impl CandidateSet {
    /// Create an empty set for words of `num_chars` letters
    #[must_use]
    pub fn new(num_chars: usize) -> Self {
        Self {
            num_chars,
            words: Vec::new(),
            lookup: FxHashSet::default(),
        }
    }

    /// Build a set from raw dictionary entries
    ///
    /// Entries are trimmed and lowercased. Anything that is not purely ASCII
    /// letters, or whose length differs from `num_chars`, is skipped.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::wordlists::CandidateSet;
    ///
    /// let set = CandidateSet::from_words(5, ["apple", "Angle", "pear", "it's", "apple"]);
    /// assert_eq!(set.len(), 2);
    /// assert!(set.contains("angle"));
    /// ```
    pub fn from_words<'a, I>(num_chars: usize, words: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut set = Self::new(num_chars);
        for raw in words {
            if let Ok(word) = Word::new(raw.trim()) {
                set.insert(word);
            }
        }
        set
    }

    /// Add a word, returning false if it has the wrong length or is already present
    pub fn insert(&mut self, word: Word) -> bool {
        if word.len() != self.num_chars || self.lookup.contains(&word) {
            return false;
        }
        self.lookup.insert(word.clone());
        self.words.push(word);
        true
    }

    /// Word length shared by every member
    #[inline]
    #[must_use]
    pub const fn num_chars(&self) -> usize {
        self.num_chars
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Exact membership test on already-normalized text
    #[inline]
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.lookup.contains(text)
    }

    /// Look up the stored word for some text
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Word> {
        self.lookup.get(text)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    /// Pick one member uniformly at random
    ///
    /// Only cryptographically secure generators are accepted, so the answer
    /// cannot be predicted from earlier output.
    pub fn choose<R: CryptoRng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.words.choose(rng)
    }
}
