// SPDX-License-Identifier: MPL-2.0
//! Iced subscription for hero clip playback.
//!
//! The subscription is keyed by [`PlaybackKey`]. While the key stays the same
//! `iced` keeps the decoder stream alive; when the key changes or the
//! subscription disappears the stream is dropped, which detaches every
//! listener and stops the decoder task.

use super::{AsyncDecoder, DecodedFrame, DecoderCommand, DecoderEvent};
use crate::error::{Error, VideoError};
use crate::media::PlaybackSession;
use iced::futures::channel::mpsc::Sender;
use iced::futures::{SinkExt, Stream};
use iced::stream;
use std::path::PathBuf;

/// Identity of one decoder run: the clip, the binding it belongs to and the
/// reload count of that binding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlaybackKey {
    pub path: PathBuf,
    pub session: PlaybackSession,
    pub load_serial: u64,
}

/// What the decoder reported.
#[derive(Debug, Clone)]
pub enum PlaybackEvent {
    /// The first frame is about to be delivered.
    Started,
    FrameReady(DecodedFrame),
    EndOfStream,
    Error(VideoError),
}

/// A playback event tagged with the session that produced it.
#[derive(Debug, Clone)]
pub struct PlaybackMessage {
    pub session: PlaybackSession,
    pub event: PlaybackEvent,
}

/// Creates the playback subscription for `key`.
pub fn video_playback(key: PlaybackKey) -> iced::Subscription<PlaybackMessage> {
    iced::Subscription::run_with(key, playback_stream)
}

fn playback_stream(key: &PlaybackKey) -> impl Stream<Item = PlaybackMessage> {
    let path = key.path.clone();
    let session = key.session;

    stream::channel(100, move |mut output: Sender<PlaybackMessage>| async move {
        let tag = |event: PlaybackEvent| PlaybackMessage { session, event };

        match AsyncDecoder::new(&path) {
            Ok(mut decoder) => {
                if let Err(e) = decoder.send_command(DecoderCommand::Play) {
                    let _ = output.send(tag(PlaybackEvent::Error(to_video_error(e)))).await;
                } else {
                    let mut started = false;
                    while let Some(event) = decoder.recv_event().await {
                        let (message, done) = match event {
                            DecoderEvent::FrameReady(frame) => {
                                if !started {
                                    started = true;
                                    let _ = output.send(tag(PlaybackEvent::Started)).await;
                                }
                                (PlaybackEvent::FrameReady(frame), false)
                            }
                            DecoderEvent::EndOfStream => (PlaybackEvent::EndOfStream, true),
                            DecoderEvent::Error(e) => (PlaybackEvent::Error(e), true),
                        };
                        if output.send(tag(message)).await.is_err() || done {
                            break;
                        }
                    }
                    let _ = decoder.send_command(DecoderCommand::Stop);
                }
            }
            Err(e) => {
                let _ = output.send(tag(PlaybackEvent::Error(to_video_error(e)))).await;
            }
        }

        // Stay registered until the key changes so the run is not restarted
        std::future::pending::<()>().await;
    })
}

fn to_video_error(error: Error) -> VideoError {
    match error {
        Error::Video(video) => video,
        other => VideoError::from_message(&other.to_string()),
    }
}
