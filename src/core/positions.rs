//! Validated zero-based letter positions

use std::fmt;

/// Error for a position outside the word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionError {
    pub position: usize,
    pub length: usize,
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Position {} is outside a word of {} letters",
            self.position + 1,
            self.length
        )
    }
}

impl std::error::Error for PositionError {}

/// A sorted, duplicate-free set of indices, all within `[0, length)`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Positions(Vec<usize>);

impl Positions {
    /// Build a position set for a word of `length` letters
    ///
    /// # Errors
    /// Returns the first index that is `>= length`.
    ///
    /// # Examples
    /// ```
    /// use reverse_hangman::core::Positions;
    ///
    /// let positions = Positions::new([2, 0, 2], 3).unwrap();
    /// assert_eq!(positions.as_slice(), &[0, 2]);
    ///
    /// assert!(Positions::new([3], 3).is_err());
    /// ```
    pub fn new(
        indices: impl IntoIterator<Item = usize>,
        length: usize,
    ) -> Result<Self, PositionError> {
        let mut positions = Vec::new();
        for position in indices {
            if position >= length {
                return Err(PositionError { position, length });
            }
            positions.push(position);
        }
        positions.sort_unstable();
        positions.dedup();
        Ok(Self(positions))
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, position: usize) -> bool {
        self.0.binary_search(&position).is_ok()
    }
}

impl fmt::Display for Positions {
    /// One-based, comma separated
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, position) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", position + 1)?;
        }
        Ok(())
    }
}
