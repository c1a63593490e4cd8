// SPDX-License-Identifier: MPL-2.0
//! Page copy catalogue.
//!
//! All visible text lives in Fluent `.ftl` files embedded at compile time from
//! `assets/i18n/`. The page ships a single Korean catalogue; the loader still
//! resolves the locale from CLI, config and OS so a catalogue can be dropped
//! in without touching the views.

pub mod fluent;
