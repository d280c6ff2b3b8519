//! Input and parsing helper functions for the CLI.

mod parsing;

pub use parsing::{parse_count, split_words, FormFields};
