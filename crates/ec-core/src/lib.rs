//! easycass core library
//!
//! Turns a secure connect bundle into everything needed to open a
//! mutual-TLS database session:
//! - Connection info (endpoint, keyspace, TLS client config)
//! - Flat property export for storage outside the archive
//! - Cluster config and the session factory seam
//! - Exit codes and logging for the `extractprops` binary
//!
//! The binary entry point is in `main.rs`.

pub mod cluster;
pub mod connection;
pub mod error;
pub mod exit_codes;
pub mod extract;
pub mod keyspace;
pub mod logging;
pub mod properties;
pub mod session;
pub mod tls;

pub use cluster::{new_cluster, new_cluster_with_options, ClusterConfig, PasswordAuthenticator, SslOptions};
pub use connection::ConnectionInfo;
pub use error::{Error, Result};
pub use keyspace::{get_keyspace, KeyspaceRegistry, SessionHandle};
pub use properties::{extract_properties, BundleProperties};
pub use session::{connect, get_session, ConnectedSession, SessionFactory};
pub use tls::{TlsConfig, TlsError};
