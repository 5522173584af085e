//! Error types for config parsing.

use thiserror::Error;

/// Which endpoint values a `cqlshrc` scan failed to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    Hostname,
    Port,
    HostnameAndPort,
}

impl std::fmt::Display for MissingField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MissingField::Hostname => write!(f, "hostname"),
            MissingField::Port => write!(f, "port"),
            MissingField::HostnameAndPort => write!(f, "hostname or port"),
        }
    }
}

/// Errors raised while extracting values from bundle config members.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `config.json` is empty or not valid JSON
    #[error("invalid config.json: {0}")]
    Json(#[from] serde_json::Error),

    /// A `hostname`/`port` line is not a single `key = value` pair
    #[error("unable to parse {key} line {line} in cqlshrc")]
    MalformedLine { key: &'static str, line: usize },

    /// The `port` value is not a usable integer
    #[error("invalid port value '{value}' in cqlshrc: {reason}")]
    InvalidPort { value: String, reason: String },

    /// The scan finished without finding every endpoint value
    #[error("unable to read {0} from cqlshrc")]
    Missing(MissingField),

    /// A line could not be scanned (longer than `MAX_LINE_LEN`)
    #[error("failed to scan cqlshrc: {0}")]
    Scan(#[from] std::io::Error),

    /// An option from the environment could not be parsed
    #[error("invalid value '{value}' for {name}: {reason}")]
    InvalidOption {
        name: String,
        value: String,
        reason: String,
    },
}

/// Result type alias for config operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
