// SPDX-License-Identifier: MPL-2.0
//! Async video frame decoder using FFmpeg.
//!
//! Decoding runs on a blocking Tokio thread and delivers frames through a
//! bounded channel. Only the video stream is decoded: hero clips always play
//! muted.

use crate::error::{Error, Result, VideoError};
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// A decoded frame ready for display.
#[derive(Debug, Clone)]
pub struct DecodedFrame {
    /// RGBA pixel data (width × height × 4 bytes).
    pub rgba_data: Arc<Vec<u8>>,
    pub width: u32,
    pub height: u32,
    /// Presentation timestamp in seconds.
    pub pts_secs: f64,
}

impl DecodedFrame {
    pub fn size_bytes(&self) -> usize {
        self.rgba_data.len()
    }
}

/// Commands sent to the decoder task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoderCommand {
    /// Start decoding from the first frame.
    Play,
    /// Stop decoding and free the FFmpeg context.
    Stop,
}

/// Events sent from the decoder task.
#[derive(Debug, Clone)]
pub enum DecoderEvent {
    FrameReady(DecodedFrame),
    /// The clip reached its end. The task exits right after.
    EndOfStream,
    Error(VideoError),
}

/// Handle to a decoder running in a blocking Tokio task.
///
/// Dropping the handle closes both channels, which stops the task at its
/// next frame.
pub struct AsyncDecoder {
    command_tx: mpsc::UnboundedSender<DecoderCommand>,
    event_rx: mpsc::Receiver<DecoderEvent>,
}

impl AsyncDecoder {
    /// Spawns a decoder for `video_path`. Nothing is decoded until
    /// [`DecoderCommand::Play`] is sent.
    pub fn new<P: AsRef<Path>>(video_path: P) -> Result<Self> {
        let path = video_path.as_ref().to_path_buf();

        if !path.exists() {
            return Err(Error::Video(VideoError::IoError(format!(
                "Video file not found: {}",
                path.display()
            ))));
        }

        // Two frames of backpressure keep memory flat while the UI catches up
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::channel(2);

        // FFmpeg contexts are not Send
        tokio::task::spawn_blocking(move || {
            if let Err(e) = Self::decoder_loop_blocking(&path, command_rx, &event_tx) {
                tracing::debug!(path = %path.display(), error = %e, "decoder task failed");
                let error = match e {
                    Error::Video(video) => video,
                    other => VideoError::from_message(&other.to_string()),
                };
                let _ = event_tx.blocking_send(DecoderEvent::Error(error));
            }
        });

        Ok(Self {
            command_tx,
            event_rx,
        })
    }

    pub fn send_command(&self, command: DecoderCommand) -> Result<()> {
        self.command_tx
            .send(command)
            .map_err(|_| Error::Io("Decoder task is not running".into()))
    }

    /// Receives the next event. Returns `None` once the task has exited.
    pub async fn recv_event(&mut self) -> Option<DecoderEvent> {
        self.event_rx.recv().await
    }

    fn decoder_loop_blocking(
        video_path: &Path,
        mut command_rx: mpsc::UnboundedReceiver<DecoderCommand>,
        event_tx: &mpsc::Sender<DecoderEvent>,
    ) -> Result<()> {
        super::init_ffmpeg()?;

        let mut ictx = ffmpeg_next::format::input(video_path)
            .map_err(|e| VideoError::from_message(&format!("Failed to open video: {e}")))?;

        let input = ictx
            .streams()
            .best(ffmpeg_next::media::Type::Video)
            .ok_or(VideoError::NoVideoStream)?;
        let video_stream_index = input.index();

        let context_decoder =
            ffmpeg_next::codec::context::Context::from_parameters(input.parameters())
                .map_err(|e| {
                    VideoError::from_message(&format!("Failed to create codec context: {e}"))
                })?;
        let mut decoder = context_decoder.decoder().video().map_err(|e| {
            VideoError::from_message(&format!("Failed to create video decoder: {e}"))
        })?;

        let width = decoder.width();
        let height = decoder.height();

        let mut scaler = ffmpeg_next::software::scaling::Context::get(
            decoder.format(),
            width,
            height,
            ffmpeg_next::format::Pixel::RGBA,
            width,
            height,
            ffmpeg_next::software::scaling::Flags::BILINEAR,
        )
        .map_err(|e| VideoError::DecodingFailed(format!("Failed to create scaler: {e}")))?;

        let time_base = input.time_base();
        let time_base_f64 = f64::from(time_base.numerator()) / f64::from(time_base.denominator());

        let mut is_playing = false;
        let mut playback_start_time: Option<Instant> = None;
        let mut first_pts: Option<f64> = None;

        loop {
            match command_rx.try_recv() {
                Ok(DecoderCommand::Play) => {
                    is_playing = true;
                    playback_start_time = Some(Instant::now());
                    first_pts = None;
                }
                Ok(DecoderCommand::Stop) | Err(mpsc::error::TryRecvError::Disconnected) => {
                    return Ok(());
                }
                Err(mpsc::error::TryRecvError::Empty) => {}
            }

            if !is_playing {
                std::thread::sleep(Duration::from_millis(10));
                continue;
            }

            let mut frame_decoded = false;
            for (stream, packet) in ictx.packets() {
                if stream.index() != video_stream_index {
                    continue;
                }

                if let Err(e) = decoder.send_packet(&packet) {
                    tracing::trace!(error = %e, "skipping undecodable packet");
                    continue;
                }

                let mut decoded_frame = ffmpeg_next::frame::Video::empty();
                if decoder.receive_frame(&mut decoded_frame).is_err() {
                    continue;
                }

                let mut rgb_frame = ffmpeg_next::frame::Video::empty();
                scaler
                    .run(&decoded_frame, &mut rgb_frame)
                    .map_err(|e| VideoError::DecodingFailed(format!("Scaling failed: {e}")))?;

                let pts_secs = decoded_frame
                    .timestamp()
                    .map_or(0.0, |pts| pts as f64 * time_base_f64);

                // Pace frames against the wall clock from the first PTS
                if let Some(start_time) = playback_start_time {
                    let first = *first_pts.get_or_insert(pts_secs);
                    let frame_delay = (pts_secs - first).max(0.0);
                    let target_time = start_time + Duration::from_secs_f64(frame_delay);
                    let now = Instant::now();
                    if target_time > now {
                        std::thread::sleep(target_time - now);
                    }
                }

                let decoded = DecodedFrame {
                    rgba_data: Arc::new(Self::extract_rgba_data(&rgb_frame)),
                    width,
                    height,
                    pts_secs,
                };

                if event_tx
                    .blocking_send(DecoderEvent::FrameReady(decoded))
                    .is_err()
                {
                    // Listener detached
                    return Ok(());
                }

                frame_decoded = true;
                break;
            }

            if !frame_decoded {
                let _ = event_tx.blocking_send(DecoderEvent::EndOfStream);
                return Ok(());
            }
        }
    }

    /// Copies the RGBA plane row by row, dropping stride padding.
    fn extract_rgba_data(frame: &ffmpeg_next::frame::Video) -> Vec<u8> {
        let width = frame.width() as usize;
        let height = frame.height() as usize;
        let data = frame.data(0);
        let stride = frame.stride(0);

        let mut rgba_bytes = Vec::with_capacity(width * height * 4);
        for y in 0..height {
            let row_start = y * stride;
            rgba_bytes.extend_from_slice(&data[row_start..row_start + width * 4]);
        }

        rgba_bytes
    }
}
