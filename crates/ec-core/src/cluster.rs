//! Cluster configuration handed to the session collaborator.
//!
//! [`new_cluster`] returns a config the caller may adjust (timeouts, extra
//! hosts) before creating a session from it.

use crate::connection::ConnectionInfo;
use crate::session::{connect, ConnectedSession, SessionFactory};
use crate::tls::TlsConfig;
use crate::Result;
use ec_config::ClusterOptions;
use std::path::Path;
use std::time::Duration;

/// Username/password credentials for the database.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordAuthenticator {
    pub username: String,
    pub password: String,
}

impl PasswordAuthenticator {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for PasswordAuthenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordAuthenticator")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// TLS settings for the driver.
#[derive(Debug, Clone)]
pub struct SslOptions {
    pub config: TlsConfig,
    /// Extra driver-level check of node addresses against the certificate.
    /// Off by default: bundle endpoints sit behind an SNI proxy, and the TLS
    /// layer already verifies the server name.
    pub enable_host_verification: bool,
}

/// Driver configuration derived from a bundle.
#[derive(Debug, Clone)]
pub struct ClusterConfig {
    /// Contact points as `host:port`.
    pub hosts: Vec<String>,
    pub port: u16,
    pub authenticator: PasswordAuthenticator,
    pub connect_timeout: Duration,
    /// Per-request timeout; `None` keeps the driver default.
    pub timeout: Option<Duration>,
    pub ssl_opts: SslOptions,
    /// Default keyspace for the session.
    pub keyspace: String,
}

impl ClusterConfig {
    /// Build a cluster config from resolved connection info.
    pub fn from_connection(
        info: &ConnectionInfo,
        authenticator: PasswordAuthenticator,
        options: &ClusterOptions,
    ) -> Self {
        Self {
            hosts: vec![info.address()],
            port: info.port(),
            authenticator,
            connect_timeout: options.connect_timeout,
            timeout: options.request_timeout,
            ssl_opts: SslOptions {
                config: info.tls().clone(),
                enable_host_verification: false,
            },
            keyspace: info.keyspace().to_string(),
        }
    }

    /// Create a session through `factory` and register its keyspace.
    pub fn create_session<F: SessionFactory>(
        &self,
        factory: &F,
    ) -> Result<ConnectedSession<F::Session>> {
        connect(factory, self)
    }
}

/// Cluster config for the bundle at `path`, with options from the
/// environment (connect timeout defaults to 5 seconds).
pub fn new_cluster(username: &str, password: &str, path: &Path) -> Result<ClusterConfig> {
    let options = ClusterOptions::from_env()?;
    new_cluster_with_options(username, password, path, &options)
}

/// Cluster config for the bundle at `path` with explicit options.
pub fn new_cluster_with_options(
    username: &str,
    password: &str,
    path: &Path,
    options: &ClusterOptions,
) -> Result<ClusterConfig> {
    let info = ConnectionInfo::from_bundle(path)?;
    Ok(ClusterConfig::from_connection(
        &info,
        PasswordAuthenticator::new(username, password),
        options,
    ))
}
