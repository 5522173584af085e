//! Logging configuration.
//!
//! Level precedence, highest first:
//! 1. `--log-level`
//! 2. `EASYCASS_LOG` (a bare level name)
//! 3. `RUST_LOG` (full `EnvFilter` directives, used verbatim)
//! 4. the default level
//!
//! Format comes from `--log-format`, then `EASYCASS_LOG_FORMAT`.

use serde::{Deserialize, Serialize};

/// Level override for easycass crates.
pub const ENV_LOG: &str = "EASYCASS_LOG";
/// Output format override.
pub const ENV_LOG_FORMAT: &str = "EASYCASS_LOG_FORMAT";
/// Standard tracing filter variable.
pub const ENV_RUST_LOG: &str = "RUST_LOG";

/// Crates whose events pass the level-based filter.
const LOG_TARGETS: [&str; 3] = ["ec_core", "ec_bundle", "ec_config"];

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Human,
    /// One JSON object per event.
    Jsonl,
}

impl LogFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            LogFormat::Human => "human",
            LogFormat::Jsonl => "jsonl",
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" | "pretty" | "text" => Ok(LogFormat::Human),
            "jsonl" | "json" => Ok(LogFormat::Jsonl),
            other => Err(format!("unknown log format '{other}' (expected human or jsonl)")),
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Minimum level for easycass events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    /// Default: stdout carries the payload and stderr stays quiet.
    #[default]
    Warn,
    Error,
    Off,
}

impl LogLevel {
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Off,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        if let Some(level) = LogLevel::ALL.into_iter().find(|l| l.as_str() == name) {
            return Ok(level);
        }
        match name.as_str() {
            "warning" => Ok(LogLevel::Warn),
            "none" | "quiet" => Ok(LogLevel::Off),
            other => Err(format!("unknown log level '{other}'")),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `EnvFilter` directives applying `level` to every easycass crate.
pub fn default_directive(level: LogLevel) -> String {
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Resolved logging settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub format: LogFormat,
    pub level: LogLevel,
    /// Timestamps on human output.
    pub timestamps: bool,
    /// Raw filter directives from `RUST_LOG`; set only when no explicit level
    /// was given.
    pub directives: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            format: LogFormat::default(),
            level: LogLevel::default(),
            timestamps: true,
            directives: None,
        }
    }
}

impl LogConfig {
    /// Resolve from the process environment and CLI flags.
    pub fn from_env(cli_level: Option<LogLevel>, cli_format: Option<LogFormat>) -> Self {
        Self::from_lookup(|name| std::env::var(name).ok(), cli_level, cli_format)
    }

    /// Resolve from an arbitrary variable lookup and CLI flags.
    ///
    /// Unparsable `EASYCASS_LOG` / `EASYCASS_LOG_FORMAT` values are ignored.
    pub fn from_lookup<F>(lookup: F, cli_level: Option<LogLevel>, cli_format: Option<LogFormat>) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_level = lookup(ENV_LOG).and_then(|v| v.parse::<LogLevel>().ok());
        let rust_log = lookup(ENV_RUST_LOG).filter(|v| !v.trim().is_empty());

        let (level, directives) = match cli_level.or(env_level) {
            Some(level) => (level, None),
            None => (LogLevel::default(), rust_log),
        };

        let format = cli_format
            .or_else(|| lookup(ENV_LOG_FORMAT).and_then(|v| v.parse::<LogFormat>().ok()))
            .unwrap_or_default();

        LogConfig {
            format,
            level,
            directives,
            ..LogConfig::default()
        }
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Set an explicit level, discarding any `RUST_LOG` directives.
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self.directives = None;
        self
    }

    pub fn with_timestamps(mut self, enabled: bool) -> Self {
        self.timestamps = enabled;
        self
    }

    /// Directives the subscriber filter is built from.
    pub fn filter_directives(&self) -> String {
        match &self.directives {
            Some(raw) => raw.clone(),
            None => default_directive(self.level),
        }
    }
}
