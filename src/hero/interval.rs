// SPDX-License-Identifier: MPL-2.0
//! Headline interval domain type.

use crate::config::{
    DEFAULT_HEADLINE_INTERVAL_MS, MAX_HEADLINE_INTERVAL_MS, MIN_HEADLINE_INTERVAL_MS,
};
use std::time::Duration;

/// Period between two hero headlines, in milliseconds.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (1–60 seconds).
///
/// # Example
///
/// ```
/// use fimbrow_site::hero::HeadlineInterval;
///
/// let interval = HeadlineInterval::new(4000);
/// assert_eq!(interval.value(), 4000);
///
/// // Values outside range are clamped
/// let too_fast = HeadlineInterval::new(10);
/// assert_eq!(too_fast.value(), 1000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadlineInterval(u64);

impl HeadlineInterval {
    /// Creates a new interval, clamping to valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_HEADLINE_INTERVAL_MS, MAX_HEADLINE_INTERVAL_MS))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for HeadlineInterval {
    fn default() -> Self {
        Self(DEFAULT_HEADLINE_INTERVAL_MS)
    }
}
