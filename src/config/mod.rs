// SPDX-License-Identifier: MPL-2.0
//! This module handles the page configuration, loaded from a `settings.toml`
//! file in the application config directory.
//!
//! # Configuration Sections
//!
//! - `[general]` - Copy catalogue language
//! - `[hero]` - Headline rotation interval
//! - `[media]` - Background clip directory and stall timeout
//!
//! Every field is optional; a missing file, section or key falls back to the
//! values in [`defaults`].
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. Set `FIMBROW_CONFIG_DIR` environment variable (or `--config-dir`)
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use fimbrow_site::config;
//!
//! let (config, warning) = config::load();
//! if let Some(warning) = warning {
//!     eprintln!("{warning}");
//! }
//! println!("headline period: {:?}", config.hero.headline_interval().as_duration());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::hero::HeadlineInterval;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General page settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Copy catalogue language code (e.g., "ko").
    #[serde(default)]
    pub language: Option<String>,
}

/// Hero headline settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct HeroConfig {
    /// Period between two headlines, in milliseconds.
    #[serde(default = "default_headline_interval_ms")]
    pub headline_interval_ms: Option<u64>,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            headline_interval_ms: default_headline_interval_ms(),
        }
    }
}

impl HeroConfig {
    /// Headline period, clamped to the supported range.
    #[must_use]
    pub fn headline_interval(&self) -> HeadlineInterval {
        self.headline_interval_ms
            .map(HeadlineInterval::new)
            .unwrap_or_default()
    }
}

/// Background media settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MediaConfig {
    /// Directory containing the hero clips and profile pictures.
    #[serde(default)]
    pub assets_dir: Option<PathBuf>,

    /// Seconds a clip may stay in the loading phase before it is skipped.
    #[serde(default = "default_clip_stall_timeout_secs")]
    pub clip_stall_timeout_secs: Option<u32>,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            assets_dir: None,
            clip_stall_timeout_secs: default_clip_stall_timeout_secs(),
        }
    }
}

impl MediaConfig {
    /// Stall timeout, clamped to the supported range.
    #[must_use]
    pub fn clip_stall_timeout(&self) -> Duration {
        let secs = self
            .clip_stall_timeout_secs
            .unwrap_or(DEFAULT_CLIP_STALL_TIMEOUT_SECS)
            .clamp(MIN_CLIP_STALL_TIMEOUT_SECS, MAX_CLIP_STALL_TIMEOUT_SECS);
        Duration::from_secs(u64::from(secs))
    }

    /// Effective assets directory (CLI and environment take precedence).
    #[must_use]
    pub fn resolved_assets_dir(&self) -> PathBuf {
        paths::resolve_assets_dir(self.assets_dir.clone())
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Page configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub hero: HeroConfig,

    #[serde(default)]
    pub media: MediaConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_headline_interval_ms() -> Option<u64> {
    Some(DEFAULT_HEADLINE_INTERVAL_MS)
}

fn default_clip_stall_timeout_secs() -> Option<u32> {
    Some(DEFAULT_CLIP_STALL_TIMEOUT_SECS)
}

// =============================================================================
// Load Functions
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// the default config with a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!(
                            "ignoring {}: {err}; using default settings",
                            path.display()
                        )),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}
