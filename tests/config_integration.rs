// SPDX-License-Identifier: MPL-2.0
//! Integration tests for `settings.toml` loading.

use fimbrow_site::config::{self, DEFAULT_HEADLINE_INTERVAL_MS};
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn settings_file_changes_hero_timing() {
    let dir = tempdir().expect("failed to create temp dir");
    std::fs::write(
        dir.path().join("settings.toml"),
        "[hero]\nheadline_interval_ms = 6000\n\n[media]\nclip_stall_timeout_secs = 5\n",
    )
    .expect("failed to write settings");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(
        config.hero.headline_interval().as_duration(),
        Duration::from_millis(6000)
    );
    assert_eq!(config.media.clip_stall_timeout(), Duration::from_secs(5));
}

#[test]
fn empty_settings_file_keeps_shipped_timing() {
    let dir = tempdir().expect("failed to create temp dir");
    std::fs::write(dir.path().join("settings.toml"), "").expect("failed to write settings");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(
        config.hero.headline_interval().value(),
        DEFAULT_HEADLINE_INTERVAL_MS
    );
}
