//! Terminal output formatting
//!
//! Display utilities for the game transcript and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_banner, print_history, print_prompt, print_rejection, print_round_header, print_summary,
};
