//! Word sources for the game
//!
//! A [`WordSource`] supplies raw dictionary entries; the game only ever sees
//! the [`CandidateSet`] filtered from it for a particular word length.

mod candidates;
mod embedded;
pub mod loader;

pub use candidates::CandidateSet;
pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::{WordFile, load_from_file};

/// Supplier of dictionary entries
///
/// Implementors only provide the raw entries. Filtering to a word length and
/// to lowercase ASCII letters is shared.
pub trait WordSource {
    /// Raw entries, possibly of mixed length, case and validity
    fn words(&self) -> Box<dyn Iterator<Item = &str> + '_>;

    /// Number of raw entries
    fn total(&self) -> usize {
        self.words().count()
    }

    /// Words of exactly `num_chars` letters
    fn candidates(&self, num_chars: usize) -> CandidateSet {
        CandidateSet::from_words(num_chars, self.words())
    }
}

/// The dictionary compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedWords;

impl WordSource for EmbeddedWords {
    fn words(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(WORDS.iter().copied())
    }

    fn total(&self) -> usize {
        WORDS_COUNT
    }
}

impl WordSource for [&str] {
    fn words(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.iter().copied())
    }

    fn total(&self) -> usize {
        self.len()
    }
}

impl WordSource for Vec<String> {
    fn words(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.iter().map(String::as_str))
    }

    fn total(&self) -> usize {
        self.len()
    }
}
