// SPDX-License-Identifier: MPL-2.0
//! Timer-driven headline rotation.

use super::{HeadlineEntry, HeadlineInterval};
use crate::error::{Error, Result};
use crate::rotation::{IntervalSchedule, Lifecycle, MountToken, Rotation};
use std::time::{Duration, Instant};

/// Cycles through a fixed list of headlines on a wall-clock period.
///
/// The rotator never reads a clock itself: the host timer calls
/// [`tick`](Self::tick) with the token minted by [`mount`](Self::mount) and the
/// instant of the tick. The first tick after a mount always advances exactly
/// once; later ticks advance by the number of periods elapsed since it.
/// Nothing pauses the rotation short of unmounting.
#[derive(Debug)]
pub struct HeadlineRotator {
    headlines: Rotation<HeadlineEntry>,
    interval: HeadlineInterval,
    lifecycle: Lifecycle,
    schedule: Option<IntervalSchedule>,
}

impl HeadlineRotator {
    /// Fails with [`Error::EmptySequence`] when `entries` is empty.
    pub fn new(entries: Vec<HeadlineEntry>, interval: HeadlineInterval) -> Result<Self> {
        let headlines = Rotation::new(entries).ok_or(Error::EmptySequence("headlines"))?;
        Ok(Self {
            headlines,
            interval,
            lifecycle: Lifecycle::new(),
            schedule: None,
        })
    }

    /// Shows the first headline. The period starts with the host timer.
    pub fn mount(&mut self) -> MountToken {
        self.headlines.rewind();
        self.schedule = Some(IntervalSchedule::new(self.interval.as_duration()));
        let token = self.lifecycle.mount();
        tracing::debug!(
            headlines = self.headlines.len(),
            period_ms = self.interval.value(),
            "headline rotator mounted"
        );
        token
    }

    /// Stops the rotation. Every later tick is ignored.
    pub fn unmount(&mut self) {
        if self.lifecycle.unmount() {
            tracing::debug!("headline rotator unmounted");
        }
        self.schedule = None;
    }

    /// Applies the periods elapsed up to `now` and returns how many advances
    /// were made. Ticks carrying a stale token change nothing.
    pub fn tick(&mut self, token: MountToken, now: Instant) -> usize {
        if !self.lifecycle.is_current(token) {
            tracing::trace!(?token, "dropping headline tick from a stale mount");
            return 0;
        }
        let Some(schedule) = self.schedule.as_mut() else {
            return 0;
        };

        let due = usize::try_from(schedule.take_due(now)).unwrap_or(usize::MAX);
        if due > 0 {
            self.headlines.advance_by(due);
        }
        due
    }

    #[must_use]
    pub fn current(&self) -> &HeadlineEntry {
        self.headlines.current()
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.headlines.index()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.headlines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.headlines.is_empty()
    }

    #[must_use]
    pub fn period(&self) -> Duration {
        self.interval.as_duration()
    }

    /// Token of the active mount. The host timer should exist only while
    /// this is `Some`.
    #[must_use]
    pub fn mount_token(&self) -> Option<MountToken> {
        self.lifecycle.token()
    }
}
