// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Locale**: Copy catalogue selection
//! - **Headlines**: Hero headline rotation interval
//! - **Media**: Background clip location and stall handling

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Locale of the shipped copy catalogue.
pub const DEFAULT_LOCALE: &str = "ko";

// ==========================================================================
// Headline Rotation Defaults
// ==========================================================================

/// Default period between two hero headlines (in milliseconds).
pub const DEFAULT_HEADLINE_INTERVAL_MS: u64 = 4000;

/// Minimum headline period (in milliseconds).
pub const MIN_HEADLINE_INTERVAL_MS: u64 = 1000;

/// Maximum headline period (in milliseconds).
pub const MAX_HEADLINE_INTERVAL_MS: u64 = 60_000;

// ==========================================================================
// Media Defaults
// ==========================================================================

/// Directory holding the hero clips and profile pictures, relative to the
/// working directory unless configured otherwise.
pub const DEFAULT_ASSETS_DIR: &str = "assets/media";

/// Default time a clip may stay in the loading phase before it is skipped.
pub const DEFAULT_CLIP_STALL_TIMEOUT_SECS: u32 = 10;

/// Minimum clip stall timeout (in seconds).
pub const MIN_CLIP_STALL_TIMEOUT_SECS: u32 = 1;

/// Maximum clip stall timeout (in seconds).
pub const MAX_CLIP_STALL_TIMEOUT_SECS: u32 = 120;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_HEADLINE_INTERVAL_MS > 0);
    assert!(MAX_HEADLINE_INTERVAL_MS >= MIN_HEADLINE_INTERVAL_MS);
    assert!(DEFAULT_HEADLINE_INTERVAL_MS >= MIN_HEADLINE_INTERVAL_MS);
    assert!(DEFAULT_HEADLINE_INTERVAL_MS <= MAX_HEADLINE_INTERVAL_MS);

    assert!(MIN_CLIP_STALL_TIMEOUT_SECS > 0);
    assert!(MAX_CLIP_STALL_TIMEOUT_SECS >= MIN_CLIP_STALL_TIMEOUT_SECS);
    assert!(DEFAULT_CLIP_STALL_TIMEOUT_SECS >= MIN_CLIP_STALL_TIMEOUT_SECS);
    assert!(DEFAULT_CLIP_STALL_TIMEOUT_SECS <= MAX_CLIP_STALL_TIMEOUT_SECS);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headline_interval_defaults_are_valid() {
        assert_eq!(DEFAULT_HEADLINE_INTERVAL_MS, 4000);
        assert!(DEFAULT_HEADLINE_INTERVAL_MS >= MIN_HEADLINE_INTERVAL_MS);
        assert!(DEFAULT_HEADLINE_INTERVAL_MS <= MAX_HEADLINE_INTERVAL_MS);
    }

    #[test]
    fn clip_stall_timeout_defaults_are_valid() {
        assert_eq!(DEFAULT_CLIP_STALL_TIMEOUT_SECS, 10);
        assert!(DEFAULT_CLIP_STALL_TIMEOUT_SECS >= MIN_CLIP_STALL_TIMEOUT_SECS);
        assert!(DEFAULT_CLIP_STALL_TIMEOUT_SECS <= MAX_CLIP_STALL_TIMEOUT_SECS);
    }
}
