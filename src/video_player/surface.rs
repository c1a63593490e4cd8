// SPDX-License-Identifier: MPL-2.0
use super::{video_playback, DecodedFrame, PlaybackKey, PlaybackMessage};
use crate::error::VideoError;
use crate::media::{PlaybackSession, PlaybackSurface, VideoClipRef};
use iced::widget::image;
use iced::Subscription;
use std::path::PathBuf;

#[derive(Debug, Clone)]
struct BoundClip {
    path: PathBuf,
    session: PlaybackSession,
}

/// Playback surface that draws decoded frames as an `iced` image.
///
/// The decoder subscription exists only while a clip is bound and playing.
#[derive(Debug, Default)]
pub struct FrameSurface {
    bound: Option<BoundClip>,
    load_serial: u64,
    playing: bool,
    frame: Option<image::Handle>,
}

impl FrameSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key of the decoder run that should currently exist, if any.
    pub fn playback_key(&self) -> Option<PlaybackKey> {
        let bound = self.bound.as_ref().filter(|_| self.playing)?;
        Some(PlaybackKey {
            path: bound.path.clone(),
            session: bound.session,
            load_serial: self.load_serial,
        })
    }

    pub fn subscription(&self) -> Subscription<PlaybackMessage> {
        self.playback_key()
            .map_or_else(Subscription::none, video_playback)
    }

    /// Stores `frame` if it belongs to the bound session.
    pub fn present_frame(&mut self, session: PlaybackSession, frame: &DecodedFrame) -> bool {
        if !self.is_bound_to(session) {
            return false;
        }
        self.frame = Some(image::Handle::from_rgba(
            frame.width,
            frame.height,
            frame.rgba_data.as_ref().clone(),
        ));
        true
    }

    /// Latest frame to draw behind the hero copy.
    pub fn frame(&self) -> Option<&image::Handle> {
        self.frame.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    fn is_bound_to(&self, session: PlaybackSession) -> bool {
        self.bound
            .as_ref()
            .is_some_and(|bound| bound.session == session)
    }
}

impl PlaybackSurface for FrameSurface {
    fn bind(&mut self, clip: &VideoClipRef, session: PlaybackSession) -> Result<(), VideoError> {
        if !clip.path().is_file() {
            self.bound = None;
            self.playing = false;
            return Err(VideoError::IoError(format!(
                "clip not found: {}",
                clip.path().display()
            )));
        }
        // The previous frame stays on screen until the new clip delivers one
        self.bound = Some(BoundClip {
            path: clip.path().to_path_buf(),
            session,
        });
        self.playing = false;
        Ok(())
    }

    fn reload(&mut self) {
        self.load_serial = self.load_serial.wrapping_add(1);
    }

    fn play(&mut self) {
        self.playing = self.bound.is_some();
    }

    fn release(&mut self) {
        self.bound = None;
        self.playing = false;
        self.frame = None;
    }
}
