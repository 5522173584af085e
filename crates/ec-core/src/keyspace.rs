//! Default keyspace lookup by session handle.
//!
//! [`ConnectedSession`](crate::session::ConnectedSession) already carries its
//! keyspace; this registry exists for callers that only hold a
//! [`SessionHandle`]. It is bounded and entries leave it when their session
//! is closed or dropped.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{OnceLock, PoisonError, RwLock};
use tracing::warn;

/// Entries kept by the process-wide registry.
pub const DEFAULT_REGISTRY_CAPACITY: usize = 1024;

static NEXT_HANDLE: AtomicU64 = AtomicU64::new(1);
static REGISTRY: OnceLock<KeyspaceRegistry> = OnceLock::new();

/// Process-unique identifier of a live session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionHandle(u64);

impl SessionHandle {
    /// Allocate a fresh handle.
    pub fn next() -> Self {
        SessionHandle(NEXT_HANDLE.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SessionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "session-{}", self.0)
    }
}

#[derive(Debug, Default)]
struct RegistryState {
    entries: HashMap<SessionHandle, String>,
    order: VecDeque<SessionHandle>,
}

/// Bounded session → keyspace map behind a reader/writer lock.
///
/// Entries belong to live sessions, since closed sessions remove themselves.
/// When full, the oldest registration is evicted anyway and a warning is
/// logged; that session's [`get_keyspace`] lookups then return empty while
/// [`ConnectedSession::keyspace`](crate::session::ConnectedSession::keyspace)
/// stays correct.
#[derive(Debug)]
pub struct KeyspaceRegistry {
    capacity: usize,
    state: RwLock<RegistryState>,
}

impl Default for KeyspaceRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_REGISTRY_CAPACITY)
    }
}

impl KeyspaceRegistry {
    /// Create a registry holding at most `capacity` sessions (minimum 1).
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            state: RwLock::new(RegistryState::default()),
        }
    }

    /// Record the keyspace of a newly created session.
    ///
    /// Returns the handle evicted to make room, if the registry was full.
    pub fn insert(&self, handle: SessionHandle, keyspace: impl Into<String>) -> Option<SessionHandle> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);

        if state.entries.insert(handle, keyspace.into()).is_none() {
            state.order.push_back(handle);
        }

        if state.entries.len() <= self.capacity {
            return None;
        }

        let oldest = state.order.pop_front()?;
        state.entries.remove(&oldest);
        warn!(
            handle = %oldest,
            capacity = self.capacity,
            "keyspace registry full; evicted the oldest open session"
        );
        Some(oldest)
    }

    /// Keyspace registered for `handle`, if any.
    pub fn get(&self, handle: SessionHandle) -> Option<String> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.entries.get(&handle).cloned()
    }

    /// Forget a session; returns its keyspace if it was registered.
    pub fn remove(&self, handle: SessionHandle) -> Option<String> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let removed = state.entries.remove(&handle);
        if removed.is_some() {
            state.order.retain(|h| *h != handle);
        }
        removed
    }

    /// Number of registered sessions.
    pub fn len(&self) -> usize {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// The process-wide registry used by session construction.
pub fn registry() -> &'static KeyspaceRegistry {
    REGISTRY.get_or_init(KeyspaceRegistry::default)
}

/// Default keyspace of a live session; empty if the handle is unknown, the
/// session has been closed, or its entry was evicted from a full registry.
///
/// Prefer [`ConnectedSession::keyspace`](crate::session::ConnectedSession::keyspace)
/// when the session itself is at hand; it is never evicted.
pub fn get_keyspace(handle: SessionHandle) -> String {
    registry().get(handle).unwrap_or_default()
}
