//! Log output for the report pipeline.
//!
//! Projection, zoom and document assembly emit `tracing` events but never
//! install a subscriber. The `sentiment_report` binary calls
//! [`init_default_tracing`]; library hosts route the events themselves.

/// Installs a compact stderr subscriber filtered by `RUST_LOG` (default
/// `info`).
///
/// `false` without the `telemetry` feature, or when a global subscriber
/// already exists.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
