//! Tracing/logging setup shared by binaries.

/// Env-driven observability settings.
pub mod config;

/// Tracing subscriber installation.
pub mod tracing;

pub use config::{LogFormat, ObservabilityConfig};

/// Initialize process-wide observability from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(&ObservabilityConfig::from_env());
}
