use core::str::FromStr;

/// Env var selecting the log line format (`json` or `compact`).
pub const LOG_FORMAT_ENV: &str = "BANKACCT_LOG_FORMAT";

/// Default filter directive when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Compact,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "compact" => Ok(Self::Compact),
            other => Err(format!("unknown log format {other:?}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directive, e.g. `info` or `bankacct_accounts=debug`.
    pub filter: String,
    pub format: LogFormat,
    /// Set when the requested format was not understood and the default was used.
    pub format_warning: Option<String>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
            format_warning: None,
        }
    }
}

impl ObservabilityConfig {
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("RUST_LOG").ok(),
            std::env::var(LOG_FORMAT_ENV).ok(),
        )
    }

    /// Build from raw variable values (`None` = unset).
    pub fn from_vars(filter: Option<String>, format: Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(filter) = filter.filter(|f| !f.trim().is_empty()) {
            config.filter = filter;
        }

        if let Some(raw) = format {
            match raw.parse::<LogFormat>() {
                Ok(format) => config.format = format,
                Err(e) => {
                    config.format_warning =
                        Some(format!("{LOG_FORMAT_ENV}: {e}; falling back to json"));
                }
            }
        }

        config
    }
}
