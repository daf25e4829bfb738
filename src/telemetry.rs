//! Telemetry helpers for applications embedding `heat-ladder`.
//!
//! The engine only emits `tracing` events (data updates, draw passes, cursor
//! transitions). Hosts either call `init_default_tracing` or install their own
//! subscriber.

/// Installs a compact, env-filtered subscriber when the `telemetry` feature is
/// enabled. `RUST_LOG` overrides the default `info` filter.
///
/// Returns `false` when the feature is disabled or a global subscriber is
/// already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(true)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
