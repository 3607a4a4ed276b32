//! Candidate set and pruning constraints
//!
//! The candidate set only ever shrinks. Each prune builds the next set by
//! filtering the current one against a [`Constraint`] and swaps it in.

use crate::core::{LetterCounts, LetterSet, Positions, Word};
use rayon::prelude::*;

/// How a confirmed letter's positions restrict the candidates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PositionMode {
    /// Words must have the letter at every listed index; other indices are unconstrained
    #[default]
    Listed,
    /// Words must have the letter at exactly the listed indices and nowhere else
    Exact,
}

impl PositionMode {
    /// Parse a mode name ("listed" or "exact")
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "listed" => Some(Self::Listed),
            "exact" => Some(Self::Exact),
            _ => None,
        }
    }
}

/// A fact learned from one round of feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// The letter does not occur in the secret word
    Absent(u8),
    /// The letter occurs at (at least) the given positions
    Present {
        letter: u8,
        positions: Positions,
        mode: PositionMode,
    },
}

impl Constraint {
    /// Check whether a word is still possible under this constraint
    ///
    /// An empty position set admits every word.
    ///
    /// # Examples
    /// ```
    /// use reverse_hangman::core::{Positions, Word};
    /// use reverse_hangman::solver::{Constraint, PositionMode};
    ///
    /// let present = Constraint::Present {
    ///     letter: b'a',
    ///     positions: Positions::new([1], 3).unwrap(),
    ///     mode: PositionMode::Listed,
    /// };
    /// assert!(present.admits(&Word::new("cat").unwrap()));
    /// assert!(!present.admits(&Word::new("dog").unwrap()));
    ///
    /// assert!(!Constraint::Absent(b'o').admits(&Word::new("dog").unwrap()));
    /// ```
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        match self {
            Self::Absent(letter) => !word.has_letter(*letter),
            Self::Present {
                letter,
                positions,
                mode,
            } => {
                if positions.is_empty() {
                    return true;
                }
                let listed_match = positions
                    .as_slice()
                    .iter()
                    .all(|&i| word.letter_at(i) == Some(*letter));
                match mode {
                    PositionMode::Listed => listed_match,
                    PositionMode::Exact => {
                        listed_match && word.positions_of(*letter).all(|i| positions.contains(i))
                    }
                }
            }
        }
    }
}

/// The set of words still consistent with every answer so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    words: Vec<Word>,
}

impl CandidateSet {
    #[must_use]
    pub const fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The only remaining word, when exactly one is left
    #[must_use]
    pub fn sole_member(&self) -> Option<&Word> {
        match self.words.as_slice() {
            [word] => Some(word),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    /// Occurrences of each unguessed letter across all candidates
    ///
    /// Every occurrence counts, so "tee" adds 2 to 'e'. Letters in `guessed`
    /// report zero.
    #[must_use]
    pub fn letter_frequencies(&self, guessed: LetterSet) -> LetterCounts {
        let mut counts = self
            .words
            .par_iter()
            .fold(LetterCounts::default, |mut counts, word| {
                for &letter in word.bytes() {
                    counts.add(letter, 1);
                }
                counts
            })
            .reduce(LetterCounts::default, |left, right| left.merge(&right));
        for letter in guessed.iter() {
            counts.clear(letter);
        }
        counts
    }

    /// Number of candidates containing each unguessed letter at least once
    #[must_use]
    pub fn letter_coverage(&self, guessed: LetterSet) -> LetterCounts {
        let mut counts = self
            .words
            .par_iter()
            .fold(LetterCounts::default, |mut counts, word| {
                for letter in word.letters().iter() {
                    counts.add(letter, 1);
                }
                counts
            })
            .reduce(LetterCounts::default, |left, right| left.merge(&right));
        for letter in guessed.iter() {
            counts.clear(letter);
        }
        counts
    }

    /// The candidates admitted by `constraint`, leaving `self` untouched
    #[must_use]
    pub fn filtered(&self, constraint: &Constraint) -> Self {
        Self {
            words: self
                .words
                .iter()
                .filter(|word| constraint.admits(word))
                .cloned()
                .collect(),
        }
    }

    /// Replace the set with the words admitted by `constraint`
    ///
    /// Returns how many words were removed.
    pub fn apply(&mut self, constraint: &Constraint) -> usize {
        let next = self.filtered(constraint);
        let removed = self.len() - next.len();
        *self = next;
        removed
    }

    /// Remove every word containing `letter`
    pub fn prune_absent(&mut self, letter: u8) -> usize {
        self.apply(&Constraint::Absent(letter))
    }

    /// Remove every word lacking `letter` at one of `positions`
    pub fn prune_positional(
        &mut self,
        letter: u8,
        positions: Positions,
        mode: PositionMode,
    ) -> usize {
        self.apply(&Constraint::Present {
            letter,
            positions,
            mode,
        })
    }
}

impl FromIterator<Word> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
