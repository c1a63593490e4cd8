// SPDX-License-Identifier: MPL-2.0
//! Page root: owns the two hero components and wires them to the runtime.
//!
//! Both components are mounted by the first message the runtime delivers
//! and unmounted before the window closes. Every mutation goes through [`App::update`], which
//! `iced` calls serially.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::error::{Error, Result};
use crate::hero::{shipped_headlines, HeadlineRotator};
use crate::i18n::fluent::I18n;
use crate::media::{shipped_clips, MediaSequencer};
use crate::video_player::FrameSurface;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

/// Root state of the landing page.
pub struct App {
    i18n: I18n,
    assets_dir: PathBuf,
    headlines: HeadlineRotator,
    media: MediaSequencer<FrameSurface>,
    window_width: f32,
    /// Whether the last attempt to open the consultation link failed.
    launch_failed: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("headline", &self.headlines.index())
            .field("clip", &self.media.active_index())
            .field("clip_phase", &self.media.phase())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 360;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

/// Builds the window settings.
///
/// Close requests are handled by the page so the hero components are
/// unmounted before the window goes away.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> Result<()> {
    use std::cell::RefCell;

    let app = App::new(flags)?;

    // iced 0.14 requires a Fn boot; the page is built once above
    let boot_state = RefCell::new(Some(app));
    let boot = move || {
        let app = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        (app, Task::done(Message::Mount))
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
        .map_err(|err| Error::Gui(err.to_string()))
}

impl App {
    /// Loads the configuration and copy catalogue and builds the page.
    fn new(flags: Flags) -> Result<Self> {
        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            tracing::warn!("{warning}");
        }
        let i18n = I18n::new(flags.lang, &config);
        let assets_dir = config.media.resolved_assets_dir();
        Self::with_config(i18n, &config, assets_dir)
    }

    /// Builds the page from an already loaded configuration. Nothing is
    /// mounted until [`Message::Mount`] arrives.
    pub fn with_config(i18n: I18n, config: &Config, assets_dir: PathBuf) -> Result<Self> {
        tracing::info!(
            locale = %i18n.current_locale(),
            assets = %assets_dir.display(),
            "building page"
        );

        let headlines =
            HeadlineRotator::new(shipped_headlines(&i18n), config.hero.headline_interval())?;
        let media = MediaSequencer::new(
            shipped_clips(&assets_dir),
            FrameSurface::new(),
            config.media.clip_stall_timeout(),
        )?;

        Ok(Self {
            i18n,
            assets_dir,
            headlines,
            media,
            window_width: WINDOW_DEFAULT_WIDTH as f32,
            launch_failed: false,
        })
    }

    fn mount(&mut self, now: Instant) {
        self.headlines.mount();
        self.media.mount(now);
        tracing::debug!("page mounted");
    }

    fn unmount(&mut self) {
        self.headlines.unmount();
        self.media.unmount();
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::window_events(),
            subscription::headline_timer(&self.headlines),
            subscription::clip_playback(&self.media),
            subscription::clip_watchdog(&self.media),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Mount => {
                self.mount(Instant::now());
                Task::none()
            }
            Message::HeadlineTick { token, at } => {
                update::handle_headline_tick(&mut self.headlines, token, at)
            }
            Message::Playback(playback) => update::handle_playback(&mut self.media, playback),
            Message::MediaWatchdog(at) => update::handle_watchdog(&mut self.media, at),
            Message::Page(action) => update::handle_page_action(action, &mut self.launch_failed),
            Message::WindowResized(width) => {
                self.window_width = width;
                Task::none()
            }
            Message::WindowCloseRequested(_id) => {
                self.unmount();
                tracing::debug!("page unmounted, exiting");
                iced::exit()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    #[must_use]
    pub fn headlines(&self) -> &HeadlineRotator {
        &self.headlines
    }

    #[must_use]
    pub fn media(&self) -> &MediaSequencer<FrameSurface> {
        &self.media
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::ClipPhase;
    use std::time::Duration;

    fn mounted_page(assets_dir: &std::path::Path, now: Instant) -> App {
        let mut app =
            App::with_config(I18n::default(), &Config::default(), assets_dir.to_path_buf())
                .unwrap();
        app.mount(now);
        app
    }

    #[test]
    fn page_is_built_unmounted() {
        let temp_dir = tempfile::tempdir().unwrap();
        let app = App::with_config(
            I18n::default(),
            &Config::default(),
            temp_dir.path().to_path_buf(),
        )
        .unwrap();

        assert!(app.headlines().mount_token().is_none());
        assert!(app.media().mount_token().is_none());
        assert_eq!(app.media().phase(), ClipPhase::Idle);
    }

    #[test]
    fn mount_message_mounts_both_components() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join("hero.MOV"), b"clip").unwrap();
        let mut app = App::with_config(
            I18n::default(),
            &Config::default(),
            temp_dir.path().to_path_buf(),
        )
        .unwrap();

        let _ = app.update(Message::Mount);

        assert!(app.headlines().mount_token().is_some());
        assert_eq!(app.headlines().index(), 0);
        assert!(app.media().mount_token().is_some());
        assert_eq!(app.media().phase(), ClipPhase::Loading);
    }

    #[test]
    fn missing_clips_stall_without_blocking_headlines() {
        let temp_dir = tempfile::tempdir().unwrap();
        let start = Instant::now();
        let mut app = mounted_page(temp_dir.path(), start);
        assert_eq!(app.media().phase(), ClipPhase::Stalled);

        let token = app.headlines().mount_token().unwrap();
        let _ = app.update(Message::HeadlineTick {
            token,
            at: start + Duration::from_millis(4000),
        });
        assert_eq!(app.headlines().index(), 1);
    }

    #[test]
    fn close_request_unmounts_both_components() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join("hero.MOV"), b"clip").unwrap();
        let start = Instant::now();
        let mut app = mounted_page(temp_dir.path(), start);
        let token = app.headlines().mount_token().unwrap();

        let _ = app.update(Message::WindowCloseRequested(window::Id::unique()));

        assert!(app.headlines().mount_token().is_none());
        assert!(app.media().mount_token().is_none());
        assert_eq!(app.media().phase(), ClipPhase::Idle);
        assert!(app.media().surface().frame().is_none());

        let _ = app.update(Message::HeadlineTick {
            token,
            at: start + Duration::from_millis(8000),
        });
        assert_eq!(app.headlines().index(), 0);
    }

    #[test]
    fn resize_updates_layout_width() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut app = mounted_page(temp_dir.path(), Instant::now());

        let _ = app.update(Message::WindowResized(500.0));
        assert!(crate::ui::is_compact(app.window_width));
    }
}
