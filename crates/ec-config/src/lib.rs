//! easycass configuration parsing and option resolution.
//!
//! This crate provides:
//! - Extractors for the two config members of a secure connect bundle
//!   (`config.json` for the keyspace, `cqlshrc` for hostname and port)
//! - Cluster options with environment overrides
//! - Bundle path resolution (CLI → env)
//!
//! The `port` in `config.json` is never used; the one in `cqlshrc` is the
//! port the database actually listens on.

pub mod cqlshrc;
pub mod error;
pub mod extract;
pub mod json;
pub mod options;
pub mod resolve;

pub use cqlshrc::{read_endpoint, Endpoint, EndpointExtractor, MAX_LINE_LEN};
pub use error::{ConfigError, MissingField, Result};
pub use extract::ConfigExtractor;
pub use json::{read_keyspace, KeyspaceConfig, KeyspaceExtractor};
pub use options::{ClusterOptions, DEFAULT_CONNECT_TIMEOUT};
pub use resolve::{resolve_bundle_path, resolve_bundle_path_with, ConfigSource, ResolvedBundle};
