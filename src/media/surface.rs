// SPDX-License-Identifier: MPL-2.0
use super::{PlaybackSession, VideoClipRef};
use crate::error::VideoError;

/// Port between the sequencer and whatever actually plays clips.
///
/// The sequencer always calls `bind`, then `reload`, then `play` when it moves
/// to a clip, and `release` when it stops. Implementations report progress
/// back through the sequencer's `on_started`, `on_finished` and `on_failed`
/// methods, tagged with the session given to `bind`.
pub trait PlaybackSurface {
    /// Points the surface at `clip`. Fails if the clip cannot be opened.
    fn bind(&mut self, clip: &VideoClipRef, session: PlaybackSession) -> Result<(), VideoError>;

    /// Restarts loading of the bound clip from its first frame.
    fn reload(&mut self);

    /// Starts muted, inline playback of the bound clip.
    fn play(&mut self);

    /// Stops playback and detaches every listener of the bound clip.
    fn release(&mut self);
}
