// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the page root.
//!
//! All hero state changes happen here, one message at a time.

use super::Message;
use crate::contact;
use crate::hero::HeadlineRotator;
use crate::media::MediaSequencer;
use crate::rotation::MountToken;
use crate::ui::{self, anchor, CONSULTATION_SECTION_ID, PAGE_SCROLLABLE_ID};
use crate::video_player::{FrameSurface, PlaybackEvent, PlaybackMessage};
use iced::Task;
use std::time::Instant;

pub(super) fn handle_headline_tick(
    headlines: &mut HeadlineRotator,
    token: MountToken,
    at: Instant,
) -> Task<Message> {
    let advanced = headlines.tick(token, at);
    if advanced > 0 {
        tracing::trace!(index = headlines.index(), advanced, "headline advanced");
    }
    Task::none()
}

pub(super) fn handle_playback(
    media: &mut MediaSequencer<FrameSurface>,
    message: PlaybackMessage,
) -> Task<Message> {
    let PlaybackMessage { session, event } = message;
    match event {
        PlaybackEvent::Started => {
            media.on_started(session);
        }
        PlaybackEvent::FrameReady(frame) => {
            media.surface_mut().present_frame(session, &frame);
        }
        PlaybackEvent::EndOfStream => {
            media.on_finished(session, Instant::now());
        }
        PlaybackEvent::Error(error) => {
            media.on_failed(session, &error, Instant::now());
        }
    }
    Task::none()
}

pub(super) fn handle_watchdog(
    media: &mut MediaSequencer<FrameSurface>,
    at: Instant,
) -> Task<Message> {
    media.check_stall(at);
    Task::none()
}

/// Runs a section action. `launch_failed` records the last chat-link attempt.
pub(super) fn handle_page_action(action: ui::Action, launch_failed: &mut bool) -> Task<Message> {
    match action {
        ui::Action::ScrollToConsultation => {
            anchor::scroll_to_section(PAGE_SCROLLABLE_ID, CONSULTATION_SECTION_ID)
        }
        ui::Action::OpenConsultation => {
            match contact::open_consultation() {
                Ok(()) => {
                    tracing::info!(url = contact::CONSULTATION_URL, "opened consultation link");
                    *launch_failed = false;
                }
                Err(err) => {
                    tracing::warn!(error = %err, "could not open consultation link");
                    *launch_failed = true;
                }
            }
            Task::none()
        }
    }
}
