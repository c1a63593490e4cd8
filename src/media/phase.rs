// SPDX-License-Identifier: MPL-2.0

/// Playback phase of the clip currently bound to the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClipPhase {
    /// Nothing bound (before mount or after unmount).
    #[default]
    Idle,
    /// Bound and reloaded, waiting for the first frame.
    Loading,
    /// At least one frame of the bound clip has been shown.
    Playing,
    /// The bound clip reached its end; the next bind follows immediately.
    Finished,
    /// A full lap of clips failed. Nothing is bound until remount.
    Stalled,
}

impl ClipPhase {
    /// Returns true while the bound clip is expected to produce signals.
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, ClipPhase::Loading | ClipPhase::Playing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_loading_and_playing_are_active() {
        assert!(ClipPhase::Loading.is_active());
        assert!(ClipPhase::Playing.is_active());
        assert!(!ClipPhase::Idle.is_active());
        assert!(!ClipPhase::Finished.is_active());
        assert!(!ClipPhase::Stalled.is_active());
    }
}
