//! Word list loading utilities
//!
//! Loads a newline-delimited dictionary from disk.

use super::WordSource;
use std::fs;
use std::io;
use std::path::Path;

/// Dictionary entries read from a file
#[derive(Debug, Clone, Default)]
pub struct WordFile {
    words: Vec<String>,
}

impl WordFile {
    /// Parse file contents, one entry per line
    ///
    /// Blank lines are dropped; everything else is kept verbatim (trimmed) and
    /// filtered later when candidates are built.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let words = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        Self { words }
    }
}

impl WordSource for WordFile {
    fn words(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.words.iter().map(String::as_str))
    }

    fn total(&self) -> usize {
        self.words.len()
    }
}

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::{WordSource, load_from_file};
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} five-letter words", words.candidates(5).len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<WordFile> {
    let content = fs::read_to_string(path)?;
    Ok(WordFile::parse(&content))
}
