// SPDX-License-Identifier: MPL-2.0
//! Runtime subscriptions: headline timer, clip decoder, stall watchdog and
//! window events.
//!
//! Each timer exists only while its component is mounted, so unmounting
//! also tears the timer down on the runtime side.

use super::Message;
use crate::hero::HeadlineRotator;
use crate::media::MediaSequencer;
use crate::video_player::FrameSurface;
use iced::{event, time, window, Subscription};
use std::time::Duration;

const WATCHDOG_PERIOD: Duration = Duration::from_secs(1);

/// Ticks every headline period while the rotator is mounted.
pub fn headline_timer(headlines: &HeadlineRotator) -> Subscription<Message> {
    match headlines.mount_token() {
        Some(token) => time::every(headlines.period())
            .with(token)
            .map(|(token, at)| Message::HeadlineTick { token, at }),
        None => Subscription::none(),
    }
}

/// Decoder stream of the bound clip.
pub fn clip_playback(media: &MediaSequencer<FrameSurface>) -> Subscription<Message> {
    media.surface().subscription().map(Message::Playback)
}

/// Polls for a stalled load while a clip waits for its first frame.
pub fn clip_watchdog(media: &MediaSequencer<FrameSurface>) -> Subscription<Message> {
    if media.is_awaiting_first_frame() {
        time::every(WATCHDOG_PERIOD).map(Message::MediaWatchdog)
    } else {
        Subscription::none()
    }
}

/// Window resize and close requests.
pub fn window_events() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| match event {
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        event::Event::Window(window::Event::Resized(size)) => {
            Some(Message::WindowResized(size.width))
        }
        _ => None,
    })
}
