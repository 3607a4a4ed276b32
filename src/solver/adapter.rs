//! The user-facing capabilities the game needs
//!
//! Production code talks to a terminal; tests and self-play answer from a
//! script or a known word.

use crate::core::{PartialWord, Positions, Word};
use std::fmt;
use std::io;

/// The user's answer to "is this letter in your word?"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Present,
    Absent,
}

/// Failure to obtain an answer from the user
#[derive(Debug)]
pub enum AdapterError {
    /// Input ended before an answer arrived
    InputClosed,
    Io(io::Error),
}

impl fmt::Display for AdapterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputClosed => write!(f, "Input ended before an answer was given"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for AdapterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InputClosed => None,
            Self::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for AdapterError {
    fn from(e: io::Error) -> Self {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            Self::InputClosed
        } else {
            Self::Io(e)
        }
    }
}

/// Questions and announcements exchanged with the user
///
/// Letters are lowercase ASCII bytes. Positions are zero-based; an
/// implementation must only return positions inside the word.
pub trait Adapter {
    /// Ask for the length of the secret word
    fn ask_length(&mut self) -> Result<usize, AdapterError>;

    /// Ask whether `letter` is in the secret word
    fn ask_letter_confirmation(&mut self, letter: u8) -> Result<Presence, AdapterError>;

    /// Ask where `letter` occurs in a word of `length` letters
    fn ask_positions(&mut self, letter: u8, length: usize) -> Result<Positions, AdapterError>;

    /// Ask whether `word` is the secret word
    fn ask_final_word_confirmation(&mut self, word: &Word) -> Result<bool, AdapterError>;

    fn announce_guess(&mut self, letter: u8) -> Result<(), AdapterError>;

    fn announce_wrong_count(&mut self, wrong: usize, max_wrong: usize)
    -> Result<(), AdapterError>;

    fn announce_remaining(&mut self, remaining: usize) -> Result<(), AdapterError>;

    fn announce_partial(&mut self, partial: &PartialWord) -> Result<(), AdapterError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unexpected_eof_maps_to_input_closed() {
        let err: AdapterError = io::Error::from(io::ErrorKind::UnexpectedEof).into();
        assert!(matches!(err, AdapterError::InputClosed));
    }

    #[test]
    fn other_io_errors_are_kept() {
        let err: AdapterError = io::Error::from(io::ErrorKind::BrokenPipe).into();
        assert!(matches!(err, AdapterError::Io(_)));
        assert!(err.to_string().starts_with("I/O error"));
    }
}
