// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the page.

use crate::rotation::MountToken;
use crate::ui;
use crate::video_player::PlaybackMessage;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// The runtime is up: mount the hero components.
    Mount,
    /// Host timer tick for the headline rotator mounted with `token`.
    HeadlineTick { token: MountToken, at: Instant },
    /// Signal from the hero clip decoder.
    Playback(PlaybackMessage),
    /// Periodic check for a clip stuck before its first frame.
    MediaWatchdog(Instant),
    /// Action requested by a page section.
    Page(ui::Action),
    /// New logical window width.
    WindowResized(f32),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `ko`).
    pub lang: Option<String>,
    /// Optional directory holding the hero clips and profile pictures.
    /// Takes precedence over `FIMBROW_ASSETS_DIR` and `settings.toml`.
    pub assets_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `FIMBROW_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
