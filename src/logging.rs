//! Logging setup
//!
//! Logs go to stderr through `env_logger` so the game transcript on stdout
//! stays clean. `RUST_LOG` is honoured unless a `-v` flag asks for more.

use env_logger::{Builder, Env, Target};
use log::{LevelFilter, SetLoggerError};

/// Map a `-v` count to a level filter
#[must_use]
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger
///
/// # Errors
///
/// Returns an error if a logger has already been installed.
pub fn init(verbosity: u8) -> Result<(), SetLoggerError> {
    let mut builder = Builder::new();
    builder
        .filter_level(LevelFilter::Warn)
        .parse_env(Env::default());

    if verbosity > 0 {
        builder.filter_level(level_for(verbosity));
    }

    builder
        .format_timestamp(None)
        .target(Target::Stderr)
        .try_init()
}
