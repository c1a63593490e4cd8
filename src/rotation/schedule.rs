// SPDX-License-Identifier: MPL-2.0
//! Wall-clock interval bookkeeping for timer-driven rotation.
//!
//! The host timer delivers `Instant`s that are only approximately one period
//! apart. [`IntervalSchedule`] turns those instants into a count of whole
//! periods, so a tick that arrives a little early or late neither drops nor
//! doubles an advance. Tests drive it with synthetic instants instead of a
//! real clock.
//!
//! The schedule anchors on the first tick it sees rather than on the moment
//! it was created: a host timer starts counting only once the runtime picks
//! it up, which can be well after the rotating component was mounted.

use std::time::{Duration, Instant};

/// Fraction of a period a tick may arrive early and still count.
const JITTER_TOLERANCE_DIVISOR: u32 = 4;

#[derive(Debug, Clone, Copy)]
pub struct IntervalSchedule {
    /// Instant of the first tick, which closes the first period.
    anchor: Option<Instant>,
    period: Duration,
    applied: u64,
}

impl IntervalSchedule {
    /// Creates an unanchored schedule. A zero period is raised to one millisecond.
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self {
            anchor: None,
            period: period.max(Duration::from_millis(1)),
            applied: 0,
        }
    }

    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Number of periods already handed out by [`take_due`](Self::take_due).
    #[must_use]
    pub fn applied(&self) -> u64 {
        self.applied
    }

    /// Returns how many periods became due between the last call and `now`,
    /// and marks them as applied.
    ///
    /// The first call always yields exactly one period and anchors the
    /// schedule at `now`. Instants earlier than one already seen yield zero.
    pub fn take_due(&mut self, now: Instant) -> u64 {
        let Some(anchor) = self.anchor else {
            self.anchor = Some(now);
            self.applied = 1;
            return 1;
        };

        let elapsed = now.saturating_duration_since(anchor);
        let tolerance = self.period / JITTER_TOLERANCE_DIVISOR;
        let after_anchor = (elapsed + tolerance).as_nanos() / self.period.as_nanos();
        let total = u64::try_from(after_anchor)
            .unwrap_or(u64::MAX)
            .saturating_add(1);

        let due = total.saturating_sub(self.applied);
        self.applied = self.applied.max(total);
        due
    }
}
