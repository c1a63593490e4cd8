// SPDX-License-Identifier: MPL-2.0
//! Log output for the page process.
//!
//! `RUST_LOG` overrides the default filter, e.g.
//! `RUST_LOG=fimbrow_site=trace` to see dropped stale signals.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "fimbrow_site=info";

/// Installs the global subscriber. Calling it again is a no-op.
pub fn init() {
    let result = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init();

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_does_not_panic() {
        init();
        init();
    }

    #[test]
    fn default_filter_parses() {
        assert!(tracing_subscriber::EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }
}
