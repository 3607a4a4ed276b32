//! Letter selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::CandidateSet;
use crate::core::LetterSet;

/// A strategy for choosing the next letter to guess
pub trait Strategy {
    /// Select an unguessed letter from the current candidates
    ///
    /// Returns `None` when no unguessed letter occurs in any candidate.
    fn select_letter(&self, candidates: &CandidateSet, guessed: LetterSet) -> Option<u8>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Total occurrence count (default)
    Frequency(FrequencyStrategy),
    /// Number of candidate words containing the letter
    Coverage(CoverageStrategy),
}

impl Strategy for StrategyType {
    fn select_letter(&self, candidates: &CandidateSet, guessed: LetterSet) -> Option<u8> {
        match self {
            Self::Frequency(s) => s.select_letter(candidates, guessed),
            Self::Coverage(s) => s.select_letter(candidates, guessed),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "frequency", "coverage".
    /// Defaults to frequency if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "coverage" | "words" => Self::Coverage(CoverageStrategy),
            _ => Self::Frequency(FrequencyStrategy),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Frequency(_) => "frequency",
            Self::Coverage(_) => "coverage",
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Frequency(FrequencyStrategy)
    }
}

/// Greedy occurrence-count maximization
///
/// Picks the unguessed letter with the most occurrences across all
/// candidates; ties go to the alphabetically first letter.
///
/// # Examples
/// ```
/// use reverse_hangman::core::{LetterSet, Word};
/// use reverse_hangman::solver::{CandidateSet, FrequencyStrategy, Strategy};
///
/// let candidates: CandidateSet = ["cat", "dog", "bat", "rat"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// // 'a' and 't' both occur 3 times; 'a' wins the tie
/// assert_eq!(FrequencyStrategy.select_letter(&candidates, LetterSet::EMPTY), Some(b'a'));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrequencyStrategy;

impl Strategy for FrequencyStrategy {
    fn select_letter(&self, candidates: &CandidateSet, guessed: LetterSet) -> Option<u8> {
        candidates.letter_frequencies(guessed).max_letter()
    }
}

/// Word-coverage maximization
///
/// Counts each letter once per word, so a guess is rated by how many
/// candidates it would confirm. Same tie-break as [`FrequencyStrategy`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoverageStrategy;

impl Strategy for CoverageStrategy {
    fn select_letter(&self, candidates: &CandidateSet, guessed: LetterSet) -> Option<u8> {
        candidates.letter_coverage(guessed).max_letter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn set(words: &[&str]) -> CandidateSet {
        words.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn frequency_picks_most_common_letter() {
        let candidates = set(&["tee", "see", "bee"]);
        let letter = FrequencyStrategy.select_letter(&candidates, LetterSet::EMPTY);
        assert_eq!(letter, Some(b'e'));
    }

    #[test]
    fn frequency_tie_breaks_alphabetically() {
        let candidates = set(&["ab", "ba"]);
        let letter = FrequencyStrategy.select_letter(&candidates, LetterSet::EMPTY);
        assert_eq!(letter, Some(b'a'));
    }

    #[test]
    fn frequency_never_repeats_a_guess() {
        let candidates = set(&["cat", "bat", "rat"]);
        let guessed: LetterSet = [b'a'].into_iter().collect();
        let letter = FrequencyStrategy.select_letter(&candidates, guessed);
        assert_eq!(letter, Some(b't'));
    }

    #[test]
    fn frequency_dominates_every_other_unguessed_letter() {
        let candidates = set(&["apple", "ample", "maple", "lapse", "plead"]);
        let guessed: LetterSet = [b'p'].into_iter().collect();
        let counts = candidates.letter_frequencies(guessed);

        let letter = FrequencyStrategy.select_letter(&candidates, guessed).unwrap();
        assert!(!guessed.contains(letter));
        for (other, count) in counts.iter() {
            assert!(counts.get(letter) >= count);
            if counts.get(letter) == count {
                assert!(letter <= other);
            }
        }
    }

    #[test]
    fn frequency_returns_none_when_exhausted() {
        let candidates = set(&["ab"]);
        let guessed: LetterSet = [b'a', b'b'].into_iter().collect();
        assert_eq!(FrequencyStrategy.select_letter(&candidates, guessed), None);
        assert_eq!(
            FrequencyStrategy.select_letter(&CandidateSet::default(), LetterSet::EMPTY),
            None
        );
    }

    #[test]
    fn coverage_differs_from_frequency_on_repeated_letters() {
        // 'e' occurs 4 times but in only 2 words; 'a' is in 3 words
        let candidates = set(&["eel", "eye", "bad", "sad", "lad"]);
        assert_eq!(
            FrequencyStrategy.select_letter(&candidates, LetterSet::EMPTY),
            Some(b'e')
        );
        assert_eq!(
            CoverageStrategy.select_letter(&candidates, LetterSet::EMPTY),
            Some(b'a')
        );
    }

    #[test]
    fn strategy_type_from_name() {
        assert_eq!(
            StrategyType::from_name("coverage"),
            StrategyType::Coverage(CoverageStrategy)
        );
        assert_eq!(
            StrategyType::from_name("frequency"),
            StrategyType::Frequency(FrequencyStrategy)
        );
        assert_eq!(StrategyType::from_name("unknown"), StrategyType::default());
        assert_eq!(StrategyType::default().name(), "frequency");
    }
}
