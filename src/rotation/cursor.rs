// SPDX-License-Identifier: MPL-2.0
//! Bounded cyclic index.

use std::num::NonZeroUsize;

/// Index into a fixed-length sequence that wraps to zero after the last element.
///
/// The length is a [`NonZeroUsize`], so the index is always in `[0, len)`
/// and there is no empty-sequence case to handle at advance time.
///
/// # Example
///
/// ```
/// use fimbrow_site::rotation::CyclicCursor;
/// use std::num::NonZeroUsize;
///
/// let mut cursor = CyclicCursor::new(NonZeroUsize::new(3).unwrap());
/// cursor.advance();
/// cursor.advance();
/// assert_eq!(cursor.advance(), 0); // wrapped
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CyclicCursor {
    index: usize,
    len: NonZeroUsize,
}

impl CyclicCursor {
    /// Creates a cursor positioned on the first element.
    #[must_use]
    pub fn new(len: NonZeroUsize) -> Self {
        Self { index: 0, len }
    }

    /// Creates a cursor positioned on `index`, reduced modulo `len`.
    #[must_use]
    pub fn starting_at(len: NonZeroUsize, index: usize) -> Self {
        Self {
            index: index % len.get(),
            len,
        }
    }

    #[must_use]
    pub fn index(self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(self) -> NonZeroUsize {
        self.len
    }

    /// Moves one step forward and returns the new index.
    pub fn advance(&mut self) -> usize {
        self.advance_by(1)
    }

    /// Moves `steps` forward and returns the new index.
    ///
    /// Equivalent to calling [`advance`](Self::advance) `steps` times.
    pub fn advance_by(&mut self, steps: usize) -> usize {
        let len = self.len.get();
        // Reduce first so the addition cannot overflow for huge step counts.
        self.index = (self.index + steps % len) % len;
        self.index
    }

    /// Moves back to the first element.
    pub fn reset(&mut self) {
        self.index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn len(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn new_starts_at_zero() {
        assert_eq!(CyclicCursor::new(len(4)).index(), 0);
    }

    #[test]
    fn advance_wraps_after_last_element() {
        let mut cursor = CyclicCursor::new(len(3));
        assert_eq!(cursor.advance(), 1);
        assert_eq!(cursor.advance(), 2);
        assert_eq!(cursor.advance(), 0);
    }

    #[test]
    fn single_element_sequence_stays_on_zero() {
        let mut cursor = CyclicCursor::new(len(1));
        for _ in 0..5 {
            assert_eq!(cursor.advance(), 0);
        }
    }

    #[test]
    fn starting_at_reduces_modulo_len() {
        assert_eq!(CyclicCursor::starting_at(len(6), 8).index(), 2);
    }

    #[test]
    fn advance_by_handles_usize_max() {
        let mut cursor = CyclicCursor::starting_at(len(7), 6);
        let expected = (6 + usize::MAX % 7) % 7;
        assert_eq!(cursor.advance_by(usize::MAX), expected);
    }

    #[test]
    fn reset_returns_to_first_element() {
        let mut cursor = CyclicCursor::starting_at(len(5), 3);
        cursor.reset();
        assert_eq!(cursor.index(), 0);
    }
}
