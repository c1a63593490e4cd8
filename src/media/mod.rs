// SPDX-License-Identifier: MPL-2.0
//! Hero background clip sequencing.
//!
//! The [`MediaSequencer`] owns the clip playlist and decides which clip the
//! background shows. It talks to the actual decoder through the
//! [`PlaybackSurface`] port so its advance rules can be tested without FFmpeg.

mod clip;
mod phase;
mod sequencer;
mod session;
mod surface;

pub use clip::{shipped_clips, VideoClipRef, SHIPPED_CLIP_FILES};
pub use phase::ClipPhase;
pub use sequencer::MediaSequencer;
pub use session::PlaybackSession;
pub use surface::PlaybackSurface;
