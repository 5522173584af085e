//! Cluster connection options.
//!
//! Resolution order: builder calls → environment variables → defaults.

use crate::{ConfigError, Result};
use std::time::Duration;

/// Connect timeout used when nothing overrides it.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Environment variable names.
const ENV_CONNECT_TIMEOUT: &str = "EASYCASS_CONNECT_TIMEOUT_SECS";
const ENV_REQUEST_TIMEOUT: &str = "EASYCASS_REQUEST_TIMEOUT_SECS";

/// Tunables handed to the session collaborator alongside the bundle data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterOptions {
    /// Timeout for establishing a connection.
    pub connect_timeout: Duration,
    /// Per-request timeout; `None` leaves the driver default.
    pub request_timeout: Option<Duration>,
}

impl Default for ClusterOptions {
    fn default() -> Self {
        Self {
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            request_timeout: None,
        }
    }
}

impl ClusterOptions {
    /// Defaults overlaid with `EASYCASS_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Defaults overlaid with values from an arbitrary lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut options = Self::default();

        if let Some(value) = lookup(ENV_CONNECT_TIMEOUT) {
            options.connect_timeout = parse_secs(ENV_CONNECT_TIMEOUT, &value)?;
        }
        if let Some(value) = lookup(ENV_REQUEST_TIMEOUT) {
            options.request_timeout = Some(parse_secs(ENV_REQUEST_TIMEOUT, &value)?);
        }

        Ok(options)
    }

    /// Set the connect timeout.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }
}

fn parse_secs(name: &str, value: &str) -> Result<Duration> {
    let invalid = |reason: String| ConfigError::InvalidOption {
        name: name.to_string(),
        value: value.to_string(),
        reason,
    };

    let secs: u64 = value.trim().parse().map_err(|e| invalid(format!("{e}")))?;
    if secs == 0 {
        return Err(invalid("must be greater than zero".to_string()));
    }
    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let options = ClusterOptions::default();
        assert_eq!(options.connect_timeout, Duration::from_secs(5));
        assert_eq!(options.request_timeout, None);
    }

    #[test]
    fn test_lookup_overrides() {
        let options = ClusterOptions::from_lookup(lookup(&[
            (ENV_CONNECT_TIMEOUT, "12"),
            (ENV_REQUEST_TIMEOUT, " 30 "),
        ]))
        .unwrap();
        assert_eq!(options.connect_timeout, Duration::from_secs(12));
        assert_eq!(options.request_timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_empty_lookup_is_default() {
        let options = ClusterOptions::from_lookup(lookup(&[])).unwrap();
        assert_eq!(options, ClusterOptions::default());
    }

    #[test]
    fn test_invalid_timeout_rejected() {
        let err = ClusterOptions::from_lookup(lookup(&[(ENV_CONNECT_TIMEOUT, "soon")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOption { ref name, .. } if name == ENV_CONNECT_TIMEOUT));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        assert!(ClusterOptions::from_lookup(lookup(&[(ENV_REQUEST_TIMEOUT, "0")])).is_err());
    }

    #[test]
    fn test_builder_overrides() {
        let options = ClusterOptions::default()
            .with_connect_timeout(Duration::from_secs(1))
            .with_request_timeout(Duration::from_secs(2));
        assert_eq!(options.connect_timeout, Duration::from_secs(1));
        assert_eq!(options.request_timeout, Some(Duration::from_secs(2)));
    }
}
