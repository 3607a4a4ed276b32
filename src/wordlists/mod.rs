//! Word lists for reverse hangman
//!
//! The dictionary is read from a plain-text file at startup.

pub mod loader;

pub use loader::{DictionaryError, load_from_file, words_from_lines, words_of_length};

/// Dictionary file looked up in the working directory by default
pub const DEFAULT_WORDLIST: &str = "wordBank.txt";

