#![forbid(unsafe_code)]

//! Subscriber setup for folio binaries.
//!
//! Libraries only emit `tracing` events; a binary calls [`init`] once to
//! install a filtered formatter on stderr. Stdout stays free for command
//! output.
//!
//! # Quick Start
//!
//! ```no_run
//! use folio_extras::logging::{LogConfig, LogFormat, init};
//!
//! let config = LogConfig {
//!     filter: Some("folio_site=debug".into()),
//!     format: LogFormat::Json,
//!     ..LogConfig::default()
//! };
//! init(&config).expect("install subscriber");
//! ```

use std::fmt;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Directive used when neither the config nor `RUST_LOG` names one.
pub const DEFAULT_FILTER: &str = "info";

/// Output shape of each log line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LogFormat {
    /// Human-readable, one line per event.
    #[default]
    Plain,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" | "text" | "pretty" => Some(Self::Plain),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// `EnvFilter` directives. `None` falls back to `RUST_LOG`, then [`DEFAULT_FILTER`].
    pub filter: Option<String>,
    pub format: LogFormat,
    /// Include the module path of each event. Default: true.
    pub show_target: bool,
    /// ANSI colors for plain output. Default: false.
    pub ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: None,
            format: LogFormat::Plain,
            show_target: true,
            ansi: false,
        }
    }
}

#[derive(Debug)]
pub enum LogInitError {
    /// The filter directives did not parse.
    Filter(String),
    /// A global subscriber is already installed.
    AlreadySet(String),
}

impl fmt::Display for LogInitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Filter(msg) => write!(f, "invalid log filter: {msg}"),
            Self::AlreadySet(msg) => write!(f, "logging already initialized: {msg}"),
        }
    }
}

impl std::error::Error for LogInitError {}

/// Resolve the filter: explicit directives, then `RUST_LOG`, then the default.
pub fn build_filter(directives: Option<&str>) -> Result<EnvFilter, LogInitError> {
    match directives {
        Some(d) => EnvFilter::try_new(d).map_err(|e| LogInitError::Filter(e.to_string())),
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
    }
}

/// Install the global subscriber.
pub fn init(config: &LogConfig) -> Result<(), LogInitError> {
    let filter = build_filter(config.filter.as_deref())?;
    let registry = tracing_subscriber::registry().with(filter);
    let result = match config.format {
        LogFormat::Plain => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(config.show_target)
                    .with_ansi(config.ansi),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(config.show_target),
            )
            .try_init(),
    };
    result.map_err(|e| LogInitError::AlreadySet(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_parse() {
        assert_eq!(LogFormat::parse("JSON"), Some(LogFormat::Json));
        assert_eq!(LogFormat::parse(" plain "), Some(LogFormat::Plain));
        assert_eq!(LogFormat::parse("text"), Some(LogFormat::Plain));
        assert_eq!(LogFormat::parse("xml"), None);
    }

    #[test]
    fn explicit_filter_is_validated() {
        assert!(build_filter(Some("folio_site=debug,warn")).is_ok());
        let err = build_filter(Some("folio_site=notalevel")).unwrap_err();
        assert!(err.to_string().starts_with("invalid log filter"));
    }

    #[test]
    fn missing_filter_falls_back() {
        assert!(build_filter(None).is_ok());
    }

    #[test]
    fn second_init_reports_already_set() {
        let config = LogConfig::default();
        let first = init(&config);
        let second = init(&config);
        // Another test binary thread may have won the first install.
        assert!(first.is_ok() || matches!(first, Err(LogInitError::AlreadySet(_))));
        assert!(matches!(second, Err(LogInitError::AlreadySet(_))));
    }
}
