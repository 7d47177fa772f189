//! Logging setup.
//!
//! Console output through `tracing-subscriber`. `RUST_LOG` takes precedence
//! over the level passed in by the binary.
//!
//! ```bash
//! # Trace navigation decisions only
//! RUST_LOG=portal_core::navigation=debug templates-portal-desktop
//! ```

use tracing_subscriber::EnvFilter;

/// Filter used when neither `RUST_LOG` nor a level is given.
pub const DEFAULT_FILTER: &str = "info";

/// Build the filter from `RUST_LOG`, falling back to `default_level`.
pub fn env_filter(default_level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.unwrap_or(DEFAULT_FILTER)))
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are no-ops.
pub fn init_logging(default_level: Option<&str>) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_target(true)
        .try_init();

    if result.is_err() {
        tracing::debug!("Global subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        init_logging(Some("debug"));
        init_logging(Some("warn"));
        tracing::info!("still logging");
    }
}
