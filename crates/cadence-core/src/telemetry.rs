//! Tracing subscriber setup for binaries and tools embedding cadence.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Filter used when the configured level does not parse.
pub const FALLBACK_LEVEL: &str = "debug";

/// ## Summary
/// Builds an `EnvFilter` from a level or directive string such as `info` or
/// `cadence_repeat=trace`. Falls back to `debug` if the string is invalid.
#[must_use]
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|err| {
        tracing::warn!(level = %level, error = %err, "Invalid log level in config, using debug");
        EnvFilter::new(FALLBACK_LEVEL)
    })
}

/// ## Summary
/// Installs the global tracing subscriber using the configured level.
///
/// ## Errors
/// Returns an error if a global subscriber has already been installed.
pub fn init_tracing(logging: &LoggingConfig) -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(env_filter(&logging.level))
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .try_init()?;

    tracing::info!(level = %logging.level, "Tracing initialized");
    Ok(())
}
