//! Fixed-size letter tables over the 26-letter Latin alphabet
//!
//! Letters are ASCII bytes `b'a'..=b'z'`; each maps to the slot `letter - b'a'`.

use std::fmt;

/// Number of letters in the alphabet
pub const ALPHABET_SIZE: usize = 26;

/// Slot index for a lowercase letter
///
/// # Panics
/// Panics in debug mode if `letter` is not in `b'a'..=b'z'`
#[inline]
#[must_use]
pub const fn index_of(letter: u8) -> usize {
    debug_assert!(letter.is_ascii_lowercase(), "letter must be a-z");
    (letter - b'a') as usize
}

/// Lowercase letter for a slot index
#[inline]
#[must_use]
pub const fn letter_at(index: usize) -> u8 {
    debug_assert!(index < ALPHABET_SIZE, "index must be < 26");
    b'a' + index as u8
}

/// A set of letters stored as a 26-bit mask
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Add a letter, returning `true` if it was not already present
    #[inline]
    pub fn insert(&mut self, letter: u8) -> bool {
        let bit = 1 << index_of(letter);
        let added = self.0 & bit == 0;
        self.0 |= bit;
        added
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0 & (1 << index_of(letter)) != 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..ALPHABET_SIZE)
            .map(letter_at)
            .filter(move |&letter| self.contains(letter))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, letter) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", char::from(letter))?;
        }
        Ok(())
    }
}

/// Occurrence count per letter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterCounts([usize; ALPHABET_SIZE]);

impl LetterCounts {
    #[inline]
    #[must_use]
    pub const fn get(&self, letter: u8) -> usize {
        self.0[index_of(letter)]
    }

    #[inline]
    pub fn add(&mut self, letter: u8, count: usize) {
        self.0[index_of(letter)] += count;
    }

    /// Zero out a letter's count
    #[inline]
    pub fn clear(&mut self, letter: u8) {
        self.0[index_of(letter)] = 0;
    }

    /// Sum two tables slot by slot
    #[must_use]
    pub fn merge(mut self, other: &Self) -> Self {
        for (mine, theirs) in self.0.iter_mut().zip(other.0.iter()) {
            *mine += theirs;
        }
        self
    }

    /// Letter with the highest positive count
    ///
    /// Ties go to the alphabetically first letter. Returns `None` when
    /// every count is zero.
    ///
    /// # Examples
    /// ```
    /// use reverse_hangman::core::LetterCounts;
    ///
    /// let mut counts = LetterCounts::default();
    /// assert_eq!(counts.max_letter(), None);
    ///
    /// counts.add(b't', 3);
    /// counts.add(b'a', 3);
    /// counts.add(b'c', 1);
    /// assert_eq!(counts.max_letter(), Some(b'a'));
    /// ```
    #[must_use]
    pub fn max_letter(&self) -> Option<u8> {
        let mut best: Option<(usize, usize)> = None;
        for (index, &count) in self.0.iter().enumerate() {
            if count > best.map_or(0, |(_, c)| c) {
                best = Some((index, count));
            }
        }
        best.map(|(index, _)| letter_at(index))
    }

    /// Iterate `(letter, count)` pairs with a positive count
    pub fn iter(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(index, &count)| (letter_at(index), count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trip_bounds() {
        assert_eq!(index_of(b'a'), 0);
        assert_eq!(index_of(b'z'), 25);
        assert_eq!(letter_at(0), b'a');
        assert_eq!(letter_at(25), b'z');
    }

    #[test]
    fn letter_set_insert_and_contains() {
        let mut set = LetterSet::EMPTY;
        assert!(set.is_empty());
        assert!(set.insert(b'e'));
        assert!(!set.insert(b'e'));
        assert!(set.insert(b'a'));

        assert!(set.contains(b'a'));
        assert!(set.contains(b'e'));
        assert!(!set.contains(b'z'));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn letter_set_iterates_alphabetically() {
        let set: LetterSet = b"zebra".iter().copied().collect();
        assert_eq!(set.iter().collect::<Vec<_>>(), b"aberz".to_vec());
        assert_eq!(set.to_string(), "a b e r z");
    }

    #[test]
    fn counts_max_prefers_highest() {
        let mut counts = LetterCounts::default();
        counts.add(b'e', 5);
        counts.add(b'a', 2);
        counts.add(b'z', 4);
        assert_eq!(counts.max_letter(), Some(b'e'));
    }

    #[test]
    fn counts_max_ties_break_alphabetically() {
        let mut counts = LetterCounts::default();
        counts.add(b'q', 2);
        counts.add(b'b', 2);
        counts.add(b'x', 2);
        assert_eq!(counts.max_letter(), Some(b'b'));
    }

    #[test]
    fn counts_clear_removes_letter_from_contention() {
        let mut counts = LetterCounts::default();
        counts.add(b'a', 9);
        counts.add(b'b', 1);
        counts.clear(b'a');
        assert_eq!(counts.get(b'a'), 0);
        assert_eq!(counts.max_letter(), Some(b'b'));
    }

    #[test]
    fn counts_merge_sums_slots() {
        let mut left = LetterCounts::default();
        left.add(b'a', 1);
        let mut right = LetterCounts::default();
        right.add(b'a', 2);
        right.add(b'c', 1);

        let merged = left.merge(&right);
        assert_eq!(merged.get(b'a'), 3);
        assert_eq!(merged.get(b'c'), 1);
        assert_eq!(merged.iter().count(), 2);
    }
}
