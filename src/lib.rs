// SPDX-License-Identifier: MPL-2.0
//! `fimbrow_site` is the FIMBROW academy landing page, built with the Iced
//! GUI framework.
//!
//! The hero section combines two independent components:
//!
//! - [`hero::HeadlineRotator`] cycles the marketing headlines on a fixed period.
//! - [`media::MediaSequencer`] plays the background clips one after another,
//!   looping back to the first clip after the last one finishes.
//!
//! Both are plain state machines driven by the messages [`app::App`] feeds
//! them, so they can be exercised without a window.

pub mod app;
pub mod config;
pub mod contact;
pub mod error;
pub mod hero;
pub mod i18n;
pub mod logging;
pub mod media;
pub mod rotation;
pub mod ui;
pub mod video_player;
