//! Core domain types for reverse hangman
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! Everything here is pure and independently testable.

mod letters;
mod partial;
mod positions;
mod word;

pub use letters::{ALPHABET_SIZE, LetterCounts, LetterSet, index_of, letter_at};
pub use partial::{BLANK, PartialWord, RevealError};
pub use positions::{PositionError, Positions};
pub use word::{Word, WordError};
