// SPDX-License-Identifier: MPL-2.0
//! Property tests for the cyclic advance law shared by both hero components.

use fimbrow_site::error::VideoError;
use fimbrow_site::hero::{HeadlineEntry, HeadlineInterval, HeadlineRotator};
use fimbrow_site::media::{MediaSequencer, PlaybackSession, PlaybackSurface, VideoClipRef};
use fimbrow_site::rotation::{CyclicCursor, Rotation};
use proptest::prelude::*;
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

#[derive(Debug, Default)]
struct SessionSurface {
    session: Option<PlaybackSession>,
    binds: usize,
}

impl PlaybackSurface for SessionSurface {
    fn bind(&mut self, _clip: &VideoClipRef, session: PlaybackSession) -> Result<(), VideoError> {
        self.session = Some(session);
        self.binds += 1;
        Ok(())
    }

    fn reload(&mut self) {}

    fn play(&mut self) {}

    fn release(&mut self) {
        self.session = None;
    }
}

/// Sequence lengths, including single-entry sequences.
fn length_strategy() -> impl Strategy<Value = usize> {
    1..=12usize
}

proptest! {
    #[test]
    fn cursor_follows_modular_law(len in length_strategy(), start in 0..64usize, steps in 0..200usize) {
        let len = NonZeroUsize::new(len).unwrap();
        let mut cursor = CyclicCursor::starting_at(len, start);
        let origin = cursor.index();
        prop_assert!(origin < len.get());

        for _ in 0..steps {
            cursor.advance();
            prop_assert!(cursor.index() < len.get());
        }
        prop_assert_eq!(cursor.index(), (origin + steps) % len.get());
    }

    #[test]
    fn advance_by_matches_repeated_advance(len in length_strategy(), steps in 0..200usize) {
        let items: Vec<usize> = (0..len).collect();
        let mut stepped = Rotation::new(items.clone()).unwrap();
        let mut jumped = Rotation::new(items).unwrap();

        for _ in 0..steps {
            stepped.advance();
        }
        jumped.advance_by(steps);
        prop_assert_eq!(stepped.index(), jumped.index());
    }

    #[test]
    fn headline_index_after_k_ticks(len in length_strategy(), ticks in 0..40u32) {
        let entries = (0..len)
            .map(|i| HeadlineEntry::new(format!("main {i}"), format!("sub {i}")))
            .collect();
        let mut rotator = HeadlineRotator::new(entries, HeadlineInterval::default()).unwrap();
        let start = Instant::now();
        let token = rotator.mount();
        let period = rotator.period();

        for k in 1..=ticks {
            rotator.tick(token, start + period * k);
        }
        prop_assert_eq!(rotator.index(), ticks as usize % len);
    }

    #[test]
    fn clip_index_after_k_finished_signals(len in length_strategy(), finishes in 0..40usize) {
        let clips = (0..len).map(|i| VideoClipRef::new(format!("clip{i}.mov"))).collect();
        let mut seq =
            MediaSequencer::new(clips, SessionSurface::default(), Duration::from_secs(10)).unwrap();
        let now = Instant::now();
        seq.mount(now);

        for _ in 0..finishes {
            let session = seq.surface().session.unwrap();
            seq.on_started(session);
            // redundant re-render between clips
            seq.bind_current(now);
            prop_assert!(seq.on_finished(session, now));
        }
        prop_assert_eq!(seq.active_index(), finishes % len);
        prop_assert_eq!(seq.surface().binds, finishes + 1);
    }
}
