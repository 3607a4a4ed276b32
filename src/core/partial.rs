//! Partially revealed word shown to the user

use std::fmt;

/// Placeholder rendered for an unrevealed slot
pub const BLANK: char = '_';

/// Positions passed to [`PartialWord::reveal`] that could not be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealError {
    /// Positions `>= length`
    pub rejected: Vec<usize>,
    /// Positions already showing a different letter
    pub conflicting: Vec<usize>,
    pub length: usize,
}

impl RevealError {
    /// True if some slot already held another letter
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        !self.conflicting.is_empty()
    }
}

impl fmt::Display for RevealError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.rejected.is_empty() {
            write!(
                f,
                "Ignored positions {:?} outside a word of {} letters",
                self.rejected, self.length
            )?;
            if self.is_conflict() {
                write!(f, "; ")?;
            }
        }
        if self.is_conflict() {
            write!(
                f,
                "Positions {:?} already show a different letter",
                self.conflicting
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for RevealError {}

/// Length-L buffer of revealed letters and blanks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialWord {
    slots: Vec<Option<u8>>,
}

impl PartialWord {
    /// An all-blank word of `length` slots
    #[must_use]
    pub fn new(length: usize) -> Self {
        Self {
            slots: vec![None; length],
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Letter revealed at a slot, if any
    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Option<u8> {
        self.slots.get(position).copied().flatten()
    }

    /// True once every slot holds a letter
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Write `letter` into each listed slot
    ///
    /// A revealed slot never changes: positions out of range or already
    /// showing another letter are skipped and reported back. Every other
    /// listed slot is written.
    ///
    /// # Errors
    /// Returns `RevealError` listing every position that was `>= len()` or
    /// held a different letter.
    ///
    /// # Examples
    /// ```
    /// use reverse_hangman::core::PartialWord;
    ///
    /// let mut partial = PartialWord::new(3);
    /// partial.reveal(b'a', &[1]).unwrap();
    /// assert_eq!(partial.render(), "_a_");
    ///
    /// assert!(partial.reveal(b't', &[2, 9]).is_err());
    /// assert_eq!(partial.render(), "_at");
    ///
    /// let err = partial.reveal(b'o', &[1]).unwrap_err();
    /// assert!(err.is_conflict());
    /// assert_eq!(partial.render(), "_at");
    /// ```
    pub fn reveal(&mut self, letter: u8, positions: &[usize]) -> Result<(), RevealError> {
        let mut rejected = Vec::new();
        let mut conflicting = Vec::new();
        for &position in positions {
            match self.slots.get_mut(position) {
                Some(Some(shown)) if *shown != letter => conflicting.push(position),
                Some(slot) => *slot = Some(letter),
                None => rejected.push(position),
            }
        }

        if rejected.is_empty() && conflicting.is_empty() {
            Ok(())
        } else {
            Err(RevealError {
                rejected,
                conflicting,
                length: self.slots.len(),
            })
        }
    }

    /// Display string with [`BLANK`] for unrevealed slots
    #[must_use]
    pub fn render(&self) -> String {
        self.slots
            .iter()
            .map(|slot| slot.map_or(BLANK, char::from))
            .collect()
    }
}

impl fmt::Display for PartialWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_blank() {
        let partial = PartialWord::new(4);
        assert_eq!(partial.render(), "____");
        assert_eq!(partial.len(), 4);
        assert!(!partial.is_complete());
    }

    #[test]
    fn reveal_writes_every_position() {
        let mut partial = PartialWord::new(6);
        partial.reveal(b'e', &[1, 4]).unwrap();
        assert_eq!(partial.render(), "_e__e_");
        assert_eq!(partial.get(1), Some(b'e'));
        assert_eq!(partial.get(0), None);
    }

    #[test]
    fn reveal_empty_positions_is_noop() {
        let mut partial = PartialWord::new(3);
        partial.reveal(b'x', &[]).unwrap();
        assert_eq!(partial.render(), "___");
    }

    #[test]
    fn reveal_out_of_range_keeps_valid_slots() {
        let mut partial = PartialWord::new(3);
        let err = partial.reveal(b'o', &[3, 1, 10]).unwrap_err();
        assert_eq!(err.rejected, vec![3, 10]);
        assert!(!err.is_conflict());
        assert_eq!(err.length, 3);
        assert_eq!(partial.render(), "_o_");
    }

    #[test]
    fn revealed_slot_never_changes() {
        let mut partial = PartialWord::new(3);
        partial.reveal(b'a', &[1]).unwrap();

        let err = partial.reveal(b'o', &[1, 2]).unwrap_err();

        assert_eq!(err.conflicting, vec![1]);
        assert!(err.rejected.is_empty());
        assert_eq!(partial.get(1), Some(b'a'));
        assert_eq!(partial.render(), "_ao");
    }

    #[test]
    fn revealing_same_letter_again_is_fine() {
        let mut partial = PartialWord::new(3);
        partial.reveal(b'e', &[0]).unwrap();
        partial.reveal(b'e', &[0, 2]).unwrap();
        assert_eq!(partial.render(), "e_e");
    }

    #[test]
    fn complete_after_all_revealed() {
        let mut partial = PartialWord::new(2);
        partial.reveal(b'a', &[0]).unwrap();
        partial.reveal(b'b', &[1]).unwrap();
        assert!(partial.is_complete());
        assert_eq!(partial.to_string(), "ab");
    }
}
