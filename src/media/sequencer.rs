// SPDX-License-Identifier: MPL-2.0
//! Event-driven clip rotation.

use super::{ClipPhase, PlaybackSession, PlaybackSurface, VideoClipRef};
use crate::error::{Error, Result, VideoError};
use crate::rotation::{Lifecycle, MountToken, Rotation};
use std::time::{Duration, Instant};

/// The clip currently handed to the surface.
#[derive(Debug, Clone, Copy)]
struct Binding {
    index: usize,
    session: PlaybackSession,
    bound_at: Instant,
}

/// Plays a fixed list of clips back to back on a [`PlaybackSurface`].
///
/// The only thing that moves playback forward is the finished signal of the
/// bound clip (or its failure). There is no timer: a long clip simply plays
/// longer.
#[derive(Debug)]
pub struct MediaSequencer<S> {
    clips: Rotation<VideoClipRef>,
    surface: S,
    lifecycle: Lifecycle,
    phase: ClipPhase,
    binding: Option<Binding>,
    next_serial: u64,
    consecutive_failures: usize,
    stall_timeout: Duration,
}

impl<S: PlaybackSurface> MediaSequencer<S> {
    /// Fails with [`Error::EmptySequence`] when `clips` is empty.
    pub fn new(clips: Vec<VideoClipRef>, surface: S, stall_timeout: Duration) -> Result<Self> {
        let clips = Rotation::new(clips).ok_or(Error::EmptySequence("clips"))?;
        Ok(Self {
            clips,
            surface,
            lifecycle: Lifecycle::new(),
            phase: ClipPhase::Idle,
            binding: None,
            next_serial: 0,
            consecutive_failures: 0,
            stall_timeout,
        })
    }

    /// Starts over from the first clip and binds it.
    pub fn mount(&mut self, now: Instant) -> MountToken {
        if self.binding.take().is_some() {
            self.surface.release();
        }
        self.clips.rewind();
        self.phase = ClipPhase::Idle;
        self.consecutive_failures = 0;

        let token = self.lifecycle.mount();
        tracing::debug!(clips = self.clips.len(), "media sequencer mounted");
        self.bind_current(now);
        token
    }

    /// Releases the surface. Signals arriving afterwards are ignored.
    pub fn unmount(&mut self) {
        if !self.lifecycle.is_mounted() {
            return;
        }
        self.surface.release();
        self.binding = None;
        self.phase = ClipPhase::Idle;
        self.lifecycle.unmount();
        tracing::debug!("media sequencer unmounted");
    }

    /// Binds the clip under the cursor, reloads it and starts playback.
    ///
    /// Binding a clip that is already bound and active returns its session
    /// without touching the surface. Returns `None` when unmounted or stalled.
    /// A clip that cannot be bound counts as a failure and the next one is
    /// tried.
    pub fn bind_current(&mut self, now: Instant) -> Option<PlaybackSession> {
        let token = self.lifecycle.token()?;

        loop {
            if self.phase == ClipPhase::Stalled {
                return None;
            }
            if let Some(binding) = self.binding {
                if binding.index == self.clips.index() && self.phase.is_active() {
                    return Some(binding.session);
                }
            }

            let session = self.mint_session(token);
            let clip = self.clips.current();
            match self.surface.bind(clip, session) {
                Ok(()) => {
                    self.surface.reload();
                    self.surface.play();
                    self.binding = Some(Binding {
                        index: self.clips.index(),
                        session,
                        bound_at: now,
                    });
                    self.phase = ClipPhase::Loading;
                    tracing::debug!(index = self.clips.index(), %clip, "bound hero clip");
                    return Some(session);
                }
                Err(err) => {
                    tracing::warn!(%clip, error = %err, "hero clip could not be bound");
                    self.binding = None;
                    if self.record_failure() {
                        self.clips.advance();
                    }
                }
            }
        }
    }

    /// Marks the bound clip as playing once its first frame is decoded.
    pub fn on_started(&mut self, session: PlaybackSession) -> bool {
        if !self.is_bound_session(session) {
            tracing::trace!(?session, "dropping start signal from a stale session");
            return false;
        }
        if self.phase == ClipPhase::Loading {
            self.phase = ClipPhase::Playing;
        }
        self.consecutive_failures = 0;
        true
    }

    /// Advances to the next clip (wrapping) when the bound clip ends.
    ///
    /// A clip that ends before producing a frame counts as a failure.
    /// Returns false and changes nothing for a stale session.
    pub fn on_finished(&mut self, session: PlaybackSession, now: Instant) -> bool {
        if !self.is_bound_session(session) {
            tracing::trace!(?session, "dropping finished signal from a stale session");
            return false;
        }
        if self.phase == ClipPhase::Loading {
            return self.on_failed(session, &VideoError::NoVideoStream, now);
        }
        self.phase = ClipPhase::Finished;
        self.clips.advance();
        tracing::debug!(next = self.clips.index(), "hero clip finished");
        self.bind_current(now);
        true
    }

    /// Skips the bound clip after a playback error.
    ///
    /// After one full lap of clips without a single frame the sequencer
    /// stalls and waits for a remount.
    pub fn on_failed(&mut self, session: PlaybackSession, error: &VideoError, now: Instant) -> bool {
        if !self.is_bound_session(session) {
            tracing::trace!(?session, "dropping failure signal from a stale session");
            return false;
        }
        tracing::warn!(clip = %self.clips.current(), %error, "hero clip failed, skipping");
        self.binding = None;
        if self.record_failure() {
            self.clips.advance();
            self.bind_current(now);
        }
        true
    }

    /// Fails the bound clip if it produced no frame within the stall timeout.
    pub fn check_stall(&mut self, now: Instant) -> bool {
        let Some(binding) = self.binding else {
            return false;
        };
        if self.phase != ClipPhase::Loading
            || now.saturating_duration_since(binding.bound_at) < self.stall_timeout
        {
            return false;
        }
        self.on_failed(binding.session, &VideoError::LoadTimedOut, now)
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.clips.index()
    }

    #[must_use]
    pub fn current_clip(&self) -> &VideoClipRef {
        self.clips.current()
    }

    #[must_use]
    pub fn clip_count(&self) -> usize {
        self.clips.len()
    }

    #[must_use]
    pub fn phase(&self) -> ClipPhase {
        self.phase
    }

    /// Session of the bound clip, if any.
    #[must_use]
    pub fn session(&self) -> Option<PlaybackSession> {
        self.binding.map(|binding| binding.session)
    }

    #[must_use]
    pub fn mount_token(&self) -> Option<MountToken> {
        self.lifecycle.token()
    }

    #[must_use]
    pub fn stall_timeout(&self) -> Duration {
        self.stall_timeout
    }

    #[must_use]
    pub fn is_awaiting_first_frame(&self) -> bool {
        self.phase == ClipPhase::Loading
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn is_bound_session(&self, session: PlaybackSession) -> bool {
        self.lifecycle.is_current(session.mount())
            && self
                .binding
                .is_some_and(|binding| binding.session == session)
    }

    fn mint_session(&mut self, token: MountToken) -> PlaybackSession {
        self.next_serial = self.next_serial.wrapping_add(1);
        PlaybackSession::new(token, self.next_serial)
    }

    /// Counts a failure. Returns false once the sequencer has stalled.
    fn record_failure(&mut self) -> bool {
        self.consecutive_failures += 1;
        if self.consecutive_failures < self.clips.len() {
            return true;
        }
        tracing::warn!(
            failures = self.consecutive_failures,
            "every hero clip failed, holding until remount"
        );
        self.surface.release();
        self.binding = None;
        self.phase = ClipPhase::Stalled;
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::path::PathBuf;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        Bind(PathBuf),
        Reload,
        Play,
        Release,
    }

    #[derive(Debug, Default)]
    struct RecordingSurface {
        calls: Vec<Call>,
        broken: HashSet<PathBuf>,
    }

    impl RecordingSurface {
        fn count(&self, call: &Call) -> usize {
            self.calls.iter().filter(|c| *c == call).count()
        }

        fn binds(&self) -> usize {
            self.calls
                .iter()
                .filter(|c| matches!(c, Call::Bind(_)))
                .count()
        }
    }

    impl PlaybackSurface for RecordingSurface {
        fn bind(
            &mut self,
            clip: &VideoClipRef,
            _session: PlaybackSession,
        ) -> std::result::Result<(), VideoError> {
            self.calls.push(Call::Bind(clip.path().to_path_buf()));
            if self.broken.contains(clip.path()) {
                return Err(VideoError::IoError("missing".into()));
            }
            Ok(())
        }

        fn reload(&mut self) {
            self.calls.push(Call::Reload);
        }

        fn play(&mut self) {
            self.calls.push(Call::Play);
        }

        fn release(&mut self) {
            self.calls.push(Call::Release);
        }
    }

    const STALL: Duration = Duration::from_secs(10);

    fn clips(names: &[&str]) -> Vec<VideoClipRef> {
        names.iter().map(|name| VideoClipRef::new(*name)).collect()
    }

    fn sequencer(names: &[&str]) -> MediaSequencer<RecordingSurface> {
        MediaSequencer::new(clips(names), RecordingSurface::default(), STALL).unwrap()
    }

    fn finish(seq: &mut MediaSequencer<RecordingSurface>, now: Instant) -> bool {
        let session = seq.session().expect("a clip should be bound");
        seq.on_started(session);
        seq.on_finished(session, now)
    }

    #[test]
    fn empty_playlist_fails_fast() {
        let result = MediaSequencer::new(Vec::new(), RecordingSurface::default(), STALL);
        assert!(matches!(result, Err(Error::EmptySequence("clips"))));
    }

    #[test]
    fn mount_binds_reloads_and_plays_first_clip() {
        let mut seq = sequencer(&["a", "b", "c"]);
        seq.mount(Instant::now());

        assert_eq!(seq.active_index(), 0);
        assert_eq!(seq.phase(), ClipPhase::Loading);
        assert_eq!(
            seq.surface().calls,
            vec![Call::Bind(PathBuf::from("a")), Call::Reload, Call::Play]
        );
    }

    #[test]
    fn finished_signals_advance_and_wrap() {
        let now = Instant::now();
        let mut seq = sequencer(&["a", "b", "c"]);
        seq.mount(now);

        assert!(finish(&mut seq, now));
        assert!(finish(&mut seq, now));
        assert_eq!(seq.current_clip(), &VideoClipRef::new("c"));
        assert!(finish(&mut seq, now));
        assert_eq!(seq.current_clip(), &VideoClipRef::new("a"));
    }

    #[test]
    fn reload_happens_once_per_advance() {
        let now = Instant::now();
        let mut seq = sequencer(&["a", "b"]);
        seq.mount(now);
        for _ in 0..5 {
            finish(&mut seq, now);
        }
        assert_eq!(seq.surface().count(&Call::Reload), 6);
        assert_eq!(seq.surface().binds(), 6);
    }

    #[test]
    fn single_clip_loops_on_itself() {
        let now = Instant::now();
        let mut seq = sequencer(&["only"]);
        seq.mount(now);
        let first = seq.session();
        finish(&mut seq, now);

        assert_eq!(seq.active_index(), 0);
        assert_ne!(seq.session(), first);
        assert_eq!(seq.surface().count(&Call::Reload), 2);
    }

    #[test]
    fn rebinding_the_same_clip_is_idempotent() {
        let now = Instant::now();
        let mut seq = sequencer(&["a", "b", "c"]);
        seq.mount(now);
        let session = seq.session();

        assert_eq!(seq.bind_current(now), session);
        assert_eq!(seq.bind_current(now), session);
        assert_eq!(seq.active_index(), 0);
        assert_eq!(seq.surface().binds(), 1);
        assert_eq!(seq.surface().count(&Call::Reload), 1);
        assert_eq!(seq.surface().count(&Call::Play), 1);
    }

    #[test]
    fn duplicate_finished_signal_advances_once() {
        let now = Instant::now();
        let mut seq = sequencer(&["a", "b", "c"]);
        seq.mount(now);
        let session = seq.session().unwrap();
        seq.on_started(session);

        assert!(seq.on_finished(session, now));
        assert!(!seq.on_finished(session, now));
        assert_eq!(seq.active_index(), 1);
    }

    #[test]
    fn clip_ending_without_a_frame_counts_as_failure() {
        let now = Instant::now();
        let mut seq = sequencer(&["a", "b", "c"]);
        seq.mount(now);

        for expected in [1, 2] {
            let session = seq.session().unwrap();
            assert!(seq.on_finished(session, now));
            assert_eq!(seq.active_index(), expected);
            assert_eq!(seq.phase(), ClipPhase::Loading);
        }

        let session = seq.session().unwrap();
        assert!(seq.on_finished(session, now));
        assert_eq!(seq.phase(), ClipPhase::Stalled);
        assert_eq!(seq.session(), None);
        assert_eq!(seq.surface().calls.last(), Some(&Call::Release));
        assert_eq!(seq.surface().binds(), 3);
    }

    #[test]
    fn unmounted_sequencer_ignores_signals() {
        let now = Instant::now();
        let mut seq = sequencer(&["a", "b", "c"]);
        seq.mount(now);
        let session = seq.session().unwrap();
        seq.unmount();
        let calls_after_unmount = seq.surface().calls.len();

        assert!(!seq.on_finished(session, now));
        assert!(!seq.on_failed(session, &VideoError::CorruptedFile, now));
        assert!(!seq.on_started(session));
        assert_eq!(seq.active_index(), 0);
        assert_eq!(seq.phase(), ClipPhase::Idle);
        assert_eq!(seq.surface().calls.len(), calls_after_unmount);
        assert_eq!(seq.surface().calls.last(), Some(&Call::Release));
    }

    #[test]
    fn signal_from_previous_mount_is_ignored() {
        let now = Instant::now();
        let mut seq = sequencer(&["a", "b"]);
        seq.mount(now);
        let old = seq.session().unwrap();
        seq.unmount();
        seq.mount(now);

        assert!(!seq.on_finished(old, now));
        assert_eq!(seq.active_index(), 0);
    }

    #[test]
    fn started_signal_moves_to_playing() {
        let now = Instant::now();
        let mut seq = sequencer(&["a"]);
        seq.mount(now);
        let session = seq.session().unwrap();

        assert!(seq.is_awaiting_first_frame());
        assert!(seq.on_started(session));
        assert_eq!(seq.phase(), ClipPhase::Playing);
        assert!(!seq.is_awaiting_first_frame());
    }

    #[test]
    fn failed_clip_is_skipped() {
        let now = Instant::now();
        let mut seq = sequencer(&["a", "b", "c"]);
        seq.mount(now);
        let session = seq.session().unwrap();

        assert!(seq.on_failed(session, &VideoError::CorruptedFile, now));
        assert_eq!(seq.active_index(), 1);
        assert_eq!(seq.phase(), ClipPhase::Loading);
    }

    #[test]
    fn unbindable_clip_is_skipped_during_bind() {
        let mut surface = RecordingSurface::default();
        surface.broken.insert(PathBuf::from("a"));
        let mut seq = MediaSequencer::new(clips(&["a", "b"]), surface, STALL).unwrap();
        seq.mount(Instant::now());

        assert_eq!(seq.active_index(), 1);
        assert_eq!(seq.phase(), ClipPhase::Loading);
        assert_eq!(seq.surface().count(&Call::Reload), 1);
    }

    #[test]
    fn full_lap_of_failures_stalls() {
        let mut surface = RecordingSurface::default();
        surface.broken.extend(["a", "b", "c"].map(PathBuf::from));
        let now = Instant::now();
        let mut seq = MediaSequencer::new(clips(&["a", "b", "c"]), surface, STALL).unwrap();
        seq.mount(now);

        assert_eq!(seq.phase(), ClipPhase::Stalled);
        assert_eq!(seq.surface().binds(), 3);
        assert_eq!(seq.session(), None);

        let calls = seq.surface().calls.len();
        assert_eq!(seq.bind_current(now), None);
        assert!(!seq.check_stall(now + STALL * 2));
        assert_eq!(seq.surface().calls.len(), calls);
    }

    #[test]
    fn a_started_clip_resets_the_failure_count() {
        let now = Instant::now();
        let mut seq = sequencer(&["a", "b"]);
        seq.mount(now);

        let session = seq.session().unwrap();
        seq.on_failed(session, &VideoError::CorruptedFile, now);
        let session = seq.session().unwrap();
        seq.on_started(session);
        seq.on_failed(session, &VideoError::CorruptedFile, now);

        assert_ne!(seq.phase(), ClipPhase::Stalled);
        assert_eq!(seq.active_index(), 0);
    }

    #[test]
    fn remount_recovers_from_stall() {
        let mut surface = RecordingSurface::default();
        surface.broken.insert(PathBuf::from("a"));
        let now = Instant::now();
        let mut seq = MediaSequencer::new(clips(&["a"]), surface, STALL).unwrap();
        seq.mount(now);
        assert_eq!(seq.phase(), ClipPhase::Stalled);

        seq.surface_mut().broken.clear();
        seq.unmount();
        seq.mount(now);
        assert_eq!(seq.phase(), ClipPhase::Loading);
    }

    #[test]
    fn loading_past_the_stall_timeout_skips_the_clip() {
        let now = Instant::now();
        let mut seq = sequencer(&["a", "b"]);
        seq.mount(now);

        assert!(!seq.check_stall(now + STALL / 2));
        assert_eq!(seq.active_index(), 0);
        assert!(seq.check_stall(now + STALL));
        assert_eq!(seq.active_index(), 1);
    }

    #[test]
    fn playing_clip_never_times_out() {
        let now = Instant::now();
        let mut seq = sequencer(&["a", "b"]);
        seq.mount(now);
        let session = seq.session().unwrap();
        seq.on_started(session);

        assert!(!seq.check_stall(now + STALL * 10));
        assert_eq!(seq.active_index(), 0);
    }
}
