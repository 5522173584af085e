//! Session creation seam.
//!
//! The database driver itself is external. It plugs in through
//! [`SessionFactory`]; this module wires bundle resolution to it and keeps
//! the session's default keyspace reachable by handle.

use crate::cluster::{new_cluster, ClusterConfig};
use crate::keyspace::{registry, SessionHandle};
use crate::{Error, Result};
use std::ops::{Deref, DerefMut};
use std::path::Path;
use tracing::{debug, info};

/// Creates driver sessions from a cluster config.
pub trait SessionFactory {
    type Session;
    type Error: std::error::Error + Send + Sync + 'static;

    fn create_session(&self, cluster: &ClusterConfig) -> std::result::Result<Self::Session, Self::Error>;
}

/// A driver session together with its default keyspace.
///
/// The keyspace stays registered under [`handle`](Self::handle) until the
/// session is closed or dropped.
#[derive(Debug)]
pub struct ConnectedSession<S> {
    session: S,
    handle: SessionHandle,
    keyspace: String,
}

impl<S> ConnectedSession<S> {
    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut S {
        &mut self.session
    }

    pub fn handle(&self) -> SessionHandle {
        self.handle
    }

    /// Default keyspace from the bundle's `config.json` (may be empty).
    pub fn keyspace(&self) -> &str {
        &self.keyspace
    }

    /// Close the session and forget its keyspace.
    pub fn close(self) {
        drop(self);
    }
}

impl<S> Deref for ConnectedSession<S> {
    type Target = S;

    fn deref(&self) -> &S {
        &self.session
    }
}

impl<S> DerefMut for ConnectedSession<S> {
    fn deref_mut(&mut self) -> &mut S {
        &mut self.session
    }
}

impl<S> Drop for ConnectedSession<S> {
    fn drop(&mut self) {
        if registry().remove(self.handle).is_some() {
            debug!(handle = %self.handle, "session closed");
        }
    }
}

/// Build a cluster config from the bundle at `path` and open a session.
pub fn get_session<F: SessionFactory>(
    factory: &F,
    username: &str,
    password: &str,
    path: &Path,
) -> Result<ConnectedSession<F::Session>> {
    let cluster = new_cluster(username, password, path)?;
    connect(factory, &cluster)
}

/// Open a session for `cluster` and register its keyspace.
pub fn connect<F: SessionFactory>(
    factory: &F,
    cluster: &ClusterConfig,
) -> Result<ConnectedSession<F::Session>> {
    let session = factory
        .create_session(cluster)
        .map_err(|e| Error::Session(Box::new(e)))?;

    let handle = SessionHandle::next();
    registry().insert(handle, cluster.keyspace.clone());

    info!(
        handle = %handle,
        hosts = ?cluster.hosts,
        keyspace = %cluster.keyspace,
        "Session created"
    );

    Ok(ConnectedSession {
        session,
        handle,
        keyspace: cluster.keyspace.clone(),
    })
}
