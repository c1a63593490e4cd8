// SPDX-License-Identifier: MPL-2.0
//! Cyclic rotation primitives shared by the hero components.
//!
//! Both hero components are "an external trigger advances a bounded cyclic
//! index": the headline rotator is triggered by a wall-clock interval, the
//! media sequencer by the end of each clip. This module holds the pieces they
//! have in common:
//!
//! - [`CyclicCursor`]: the bounded index itself
//! - [`Rotation`]: a fixed, non-empty sequence paired with a cursor
//! - [`Lifecycle`] / [`MountToken`]: mount-scoped cancellation
//! - [`IntervalSchedule`]: wall-clock to tick-count conversion

mod cursor;
mod lifecycle;
mod schedule;

pub use cursor::CyclicCursor;
pub use lifecycle::{Lifecycle, MountToken};
pub use schedule::IntervalSchedule;

use std::num::NonZeroUsize;

/// A fixed, non-empty ordered sequence with a cyclic cursor into it.
///
/// The items are never mutated after construction; only the cursor moves.
#[derive(Debug, Clone)]
pub struct Rotation<T> {
    items: Box<[T]>,
    cursor: CyclicCursor,
}

impl<T> Rotation<T> {
    /// Builds a rotation positioned on the first item.
    ///
    /// Returns `None` for an empty list: an empty rotation has no valid index.
    #[must_use]
    pub fn new(items: Vec<T>) -> Option<Self> {
        let len = NonZeroUsize::new(items.len())?;
        Some(Self {
            items: items.into_boxed_slice(),
            cursor: CyclicCursor::new(len),
        })
    }

    #[must_use]
    pub fn current(&self) -> &T {
        // The cursor is bounded by `items.len()` at construction.
        &self.items[self.cursor.index()]
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.cursor.index()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; present for API symmetry with slices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Advances one step and returns the new current item.
    pub fn advance(&mut self) -> &T {
        self.cursor.advance();
        self.current()
    }

    /// Advances `steps` and returns the new current item.
    pub fn advance_by(&mut self, steps: usize) -> &T {
        self.cursor.advance_by(steps);
        self.current()
    }

    /// Moves back to the first item.
    pub fn rewind(&mut self) {
        self.cursor.reset();
    }
}
