//! Structured logging for easycass.
//!
//! - Human-readable console output for interactive use
//! - JSON lines for log collectors
//!
//! stdout is reserved for command payloads; all log output goes to stderr.
//! Key material and passwords are never logged, only their sizes.

pub mod config;

pub use config::{default_directive, LogConfig, LogFormat, LogLevel};

use std::io::IsTerminal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the global subscriber.
///
/// The filter comes from [`LogConfig::filter_directives`]; directives that do
/// not parse fall back to the level-based default. A second call is a no-op.
pub fn init_logging(config: &LogConfig) {
    let filter = EnvFilter::try_new(config.filter_directives())
        .unwrap_or_else(|_| EnvFilter::new(default_directive(config.level)));

    let result = match config.format {
        LogFormat::Human => {
            let use_ansi = std::io::stderr().is_terminal();
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_ansi(use_ansi);

            if config.timestamps {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt_layer)
                    .try_init()
            } else {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt_layer.without_time())
                    .try_init()
            }
        }
        LogFormat::Jsonl => {
            let json_layer = fmt::layer()
                .json()
                .flatten_event(true)
                .with_current_span(false)
                .with_writer(std::io::stderr);
            tracing_subscriber::registry()
                .with(filter)
                .with(json_layer)
                .try_init()
        }
    };

    if result.is_err() {
        tracing::debug!("logging already initialized");
    }
}

/// Initialize logging from the environment alone.
pub fn init_default_logging() {
    init_logging(&LogConfig::from_env(None, None));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        assert_eq!(
            default_directive(LogLevel::Debug),
            "ec_core=debug,ec_bundle=debug,ec_config=debug"
        );
    }

    #[test]
    fn test_directive_parses_as_filter() {
        for level in [LogLevel::Trace, LogLevel::Info, LogLevel::Off] {
            assert!(EnvFilter::try_new(default_directive(level)).is_ok());
        }
    }

    #[test]
    fn test_init_twice_is_harmless() {
        let config = LogConfig::default().with_timestamps(false);
        init_logging(&config);
        init_logging(&config.with_format(LogFormat::Jsonl));
    }
}
