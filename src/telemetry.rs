//! Telemetry helpers for hosts embedding `chart-adapters`.
//!
//! The engine only emits `tracing` events; installing a subscriber stays the
//! host's decision. `init_default_tracing` is a convenience for binaries and
//! tests that do not want to wire filters themselves.

/// Env var consulted for the default filter before falling back to `RUST_LOG`.
pub const CHART_ADAPTERS_LOG_ENV: &str = "CHART_ADAPTERS_LOG";

/// Initializes a compact `tracing` subscriber when the `telemetry` feature is enabled.
///
/// The filter is read from `CHART_ADAPTERS_LOG`, then `RUST_LOG`, then defaults
/// to `warn` so dispatch misses are visible without per-render noise.
///
/// Returns `false` when the feature is disabled or a global subscriber is
/// already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_env(CHART_ADAPTERS_LOG_ENV)
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new("warn"));
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
