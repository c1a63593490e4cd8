// SPDX-License-Identifier: MPL-2.0
//! FFmpeg-backed playback for the hero background.
//!
//! The decoder runs in a blocking Tokio task and reaches the UI through an
//! `iced` subscription. [`FrameSurface`] is the production
//! [`PlaybackSurface`](crate::media::PlaybackSurface): it decides when that
//! subscription exists and keeps the latest frame for drawing.

mod decoder;
mod subscription;
mod surface;

pub use decoder::{AsyncDecoder, DecodedFrame, DecoderCommand, DecoderEvent};
pub use subscription::{video_playback, PlaybackEvent, PlaybackKey, PlaybackMessage};
pub use surface::FrameSurface;

use crate::error::{Error, Result};
use std::sync::Once;

static FFMPEG_INIT: Once = Once::new();

/// Initializes FFmpeg once per process and silences its warnings.
pub fn init_ffmpeg() -> Result<()> {
    let mut init_result: Result<()> = Ok(());

    FFMPEG_INIT.call_once(|| {
        if let Err(e) = ffmpeg_next::init() {
            init_result = Err(Error::Io(format!("FFmpeg initialization failed: {e}")));
            return;
        }

        // SAFETY: av_log_set_level only changes the global log threshold
        unsafe {
            ffmpeg_next::ffi::av_log_set_level(ffmpeg_next::ffi::AV_LOG_ERROR);
        }
    });

    init_result
}
