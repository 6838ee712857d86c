//! Telemetry helpers for applications embedding `tourism-explorer`.
//!
//! Tracing setup stays explicit and opt-in. Hosts can call
//! `init_default_tracing`, or install their own `tracing` subscriber.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Initializes a compact `tracing` subscriber with the default filter.
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber was already installed by the host.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback_filter(DEFAULT_LOG_FILTER)
}

/// Like [`init_default_tracing`], with `fallback` used when `RUST_LOG` is unset
/// or invalid (e.g. `"tourism_explorer=debug"`).
#[must_use]
pub fn init_tracing_with_fallback_filter(fallback: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback));
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback;
        false
    }
}
