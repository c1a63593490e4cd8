// SPDX-License-Identifier: MPL-2.0
//! Hero headline rotation.
//!
//! The hero shows one (headline, subheadline) pair at a time and moves to the
//! next pair on a fixed wall-clock period, wrapping after the last pair.

mod headline;
mod interval;
mod rotator;

pub use headline::{shipped_headlines, HeadlineEntry, HEADLINE_COUNT};
pub use interval::HeadlineInterval;
pub use rotator::HeadlineRotator;
