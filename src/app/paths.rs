// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! Paths are resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--config-dir`, `--assets-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`FIMBROW_CONFIG_DIR`, `FIMBROW_ASSETS_DIR`)
//! 4. **Platform default** - via `dirs` crate for the config directory,
//!    [`DEFAULT_ASSETS_DIR`](crate::config::DEFAULT_ASSETS_DIR) for assets
//!
//! For the assets directory the `[media] assets_dir` setting sits between the
//! environment variable and the built-in default.

use crate::config::DEFAULT_ASSETS_DIR;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "Fimbrow";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "FIMBROW_CONFIG_DIR";

/// Environment variable to override the assets directory.
pub const ENV_ASSETS_DIR: &str = "FIMBROW_ASSETS_DIR";

/// Global CLI override for config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Global CLI override for assets directory (set once at startup).
static CLI_ASSETS_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes CLI overrides for the config and assets directories.
///
/// Called once at startup, before any path resolution. Later calls are
/// ignored and the first values win.
pub fn init_cli_overrides(config_dir: Option<String>, assets_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err()
        || CLI_ASSETS_DIR.set(assets_dir.map(PathBuf::from)).is_err()
    {
        tracing::debug!("CLI path overrides already initialized");
    }
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

fn get_cli_assets_dir() -> Option<PathBuf> {
    CLI_ASSETS_DIR.get().and_then(Clone::clone)
}

fn non_empty_env(name: &str) -> Option<PathBuf> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Returns the application config directory path.
///
/// - Linux: `~/.config/Fimbrow/`
/// - macOS: `~/Library/Application Support/Fimbrow/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\Fimbrow\`
///
/// Returns `None` if the config directory cannot be determined.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
///
/// # Arguments
///
/// * `override_path` - Optional path to use instead of default. Takes highest priority.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    if let Some(path) = non_empty_env(ENV_CONFIG_DIR) {
        return Some(path);
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the directory holding the hero clips and profile pictures.
///
/// `configured` is the `[media] assets_dir` value from `settings.toml`.
pub fn resolve_assets_dir(configured: Option<PathBuf>) -> PathBuf {
    get_cli_assets_dir()
        .or_else(|| non_empty_env(ENV_ASSETS_DIR))
        .or(configured)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR))
}
