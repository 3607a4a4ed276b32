//! Dictionary word representation
//!
//! A Word stores a lowercase Latin word of any positive length together with
//! the set of letters it contains, so presence checks during pruning are a
//! single bit test.

use super::LetterSet;
use std::fmt;

/// A lowercase Latin-alphabet word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: LetterSet,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty
    /// - Contains non-ASCII characters
    /// - Contains anything other than the letters a-z
    ///
    /// # Examples
    /// ```
    /// use reverse_hangman::core::Word;
    ///
    /// let word = Word::new("Cat").unwrap();
    /// assert_eq!(word.text(), "cat");
    /// assert_eq!(word.len(), 3);
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("c4t").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let letters = text.bytes().collect();

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false: a `Word` holds at least one letter
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a position, or `None` past the end
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> Option<u8> {
        self.bytes().get(position).copied()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letters.contains(letter)
    }

    /// Distinct letters of the word
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> LetterSet {
        self.letters
    }

    /// All positions where a letter appears, in ascending order
    pub fn positions_of(&self, letter: u8) -> impl Iterator<Item = usize> + '_ {
        self.bytes()
            .iter()
            .enumerate()
            .filter(move |&(_, &b)| b == letter)
            .map(|(i, _)| i)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("hangman").unwrap();
        assert_eq!(word.text(), "hangman");
        assert_eq!(word.bytes(), b"hangman");
        assert_eq!(word.len(), 7);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CAT").unwrap();
        assert_eq!(word.text(), "cat");

        let word2 = Word::new("cAt").unwrap();
        assert_eq!(word2, word);
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("c4t"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("ca t"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("can't"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("café"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_letter_at() {
        let word = Word::new("dog").unwrap();
        assert_eq!(word.letter_at(0), Some(b'd'));
        assert_eq!(word.letter_at(2), Some(b'g'));
        assert_eq!(word.letter_at(3), None);
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("bat").unwrap();
        assert!(word.has_letter(b'b'));
        assert!(word.has_letter(b't'));
        assert!(!word.has_letter(b'c'));
        assert_eq!(word.letters().len(), 3);
    }

    #[test]
    fn word_positions_of_duplicates() {
        let word = Word::new("letter").unwrap();
        assert_eq!(word.positions_of(b'e').collect::<Vec<_>>(), vec![1, 4]);
        assert_eq!(word.positions_of(b't').collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(word.positions_of(b'z').count(), 0);
    }

    #[test]
    fn word_display() {
        let word = Word::new("rat").unwrap();
        assert_eq!(format!("{word}"), "rat");
    }
}
