//! Tracing/logging initialization.
//!
//! Logs always go to stderr; stdout belongs to the program's own output.

use tracing_subscriber::EnvFilter;

use crate::config::{DEFAULT_FILTER, LogFormat, ObservabilityConfig};

/// Parse the configured directive, falling back to [`DEFAULT_FILTER`].
///
/// The second value describes the fallback when one happened.
fn build_filter(config: &ObservabilityConfig) -> (EnvFilter, Option<String>) {
    match EnvFilter::try_new(&config.filter) {
        Ok(filter) => (filter, None),
        Err(e) => (
            EnvFilter::new(DEFAULT_FILTER),
            Some(format!(
                "RUST_LOG {:?}: {e}; falling back to {DEFAULT_FILTER}",
                config.filter
            )),
        ),
    }
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(config: &ObservabilityConfig) {
    let (filter, filter_warning) = build_filter(config);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    let _ = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };

    for warning in [filter_warning.as_ref(), config.format_warning.as_ref()]
        .into_iter()
        .flatten()
    {
        ::tracing::warn!("{warning}");
    }
}
