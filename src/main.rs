//! Wordle Game - CLI
//!
//! Guess a randomly chosen word; every guess is scored letter by letter.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use wordle_game::{
    commands::{DEFAULT_NUM_CHARS, PlayConfig, run_play},
    logging,
    wordlists::{EmbeddedWords, WordSource, load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "A simple implementation of the word-guessing game Wordle",
    version,
    author
)]
struct Cli {
    /// Number of chars in the word
    #[arg(long = "num_chars", default_value_t = DEFAULT_NUM_CHARS)]
    num_chars: usize,

    /// Path to a newline-delimited word list (default: built-in dictionary)
    #[arg(short = 'w', long)]
    wordlist: Option<PathBuf>,

    /// Log more detail to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

/// Pick the dictionary based on the -w flag
fn load_source(wordlist: Option<&PathBuf>) -> Result<Box<dyn WordSource>> {
    match wordlist {
        Some(path) => {
            let words = load_from_file(path)
                .with_context(|| format!("Failed to read word list {}", path.display()))?;
            Ok(Box::new(words))
        }
        None => Ok(Box::new(EmbeddedWords)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose).context("Failed to initialise logging")?;

    if cli.no_color {
        colored::control::set_override(false);
    }

    let source = load_source(cli.wordlist.as_ref())?;
    let config = PlayConfig::new(cli.num_chars);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_play(config, source.as_ref(), stdin.lock(), &mut stdout)?;

    Ok(())
}
