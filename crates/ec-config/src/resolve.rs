//! Bundle path resolution.
//!
//! Resolution order: CLI argument → environment variable.

use std::path::{Path, PathBuf};

/// Environment variable naming the default bundle.
const ENV_BUNDLE_PATH: &str = "EASYCASS_BUNDLE";

/// Where a bundle path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicitly provided via CLI argument.
    CliArgument,

    /// Set via environment variable.
    Environment,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::CliArgument => write!(f, "CLI argument"),
            ConfigSource::Environment => write!(f, "environment variable"),
        }
    }
}

/// A bundle path and where it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBundle {
    pub path: PathBuf,
    pub source: ConfigSource,
}

/// Resolve the bundle path from the CLI, then `EASYCASS_BUNDLE`.
///
/// The path is not checked for existence; opening it reports that error.
pub fn resolve_bundle_path(cli_path: Option<&Path>) -> Option<ResolvedBundle> {
    resolve_bundle_path_with(cli_path, |name| std::env::var(name).ok())
}

/// Same as [`resolve_bundle_path`] with an explicit environment lookup.
pub fn resolve_bundle_path_with<F>(cli_path: Option<&Path>, lookup: F) -> Option<ResolvedBundle>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(path) = cli_path {
        return Some(ResolvedBundle {
            path: path.to_path_buf(),
            source: ConfigSource::CliArgument,
        });
    }

    lookup(ENV_BUNDLE_PATH)
        .filter(|value| !value.trim().is_empty())
        .map(|value| ResolvedBundle {
            path: PathBuf::from(value),
            source: ConfigSource::Environment,
        })
}
