//! Per-user conversation session storage
//!
//! The store is a trait-based abstraction so different backends (in-memory
//! for tests and single-instance deployments, a durable store for
//! production) can be swapped without touching the state machine.
//!
//! The store itself does not serialize turns; the engine holds a per-user
//! turn lock so two concurrent messages from the same user can never
//! interleave read-modify-write cycles on a session.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use parking_lot::RwLock;

use cybersathi_core::Session;

/// Pluggable session storage keyed by user ID.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Fetch a session, `None` if the user has no active conversation.
    async fn get(&self, user_id: &str) -> Option<Session>;

    /// Insert or replace a session under its user ID.
    async fn put(&self, session: Session);

    /// Remove a session. Removing an absent session is a no-op.
    async fn clear(&self, user_id: &str);

    /// Number of active sessions.
    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Drop sessions idle longer than `max_idle`, returning how many were
    /// evicted. Abandoned flows otherwise leak forever.
    async fn evict_idle(&self, max_idle: Duration) -> usize;
}

/// In-memory session store. Default backend; no persistence across
/// restarts.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, Session>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, user_id: &str) -> Option<Session> {
        self.sessions.read().get(user_id).cloned()
    }

    async fn put(&self, session: Session) {
        self.sessions
            .write()
            .insert(session.user_id.clone(), session);
    }

    async fn clear(&self, user_id: &str) {
        self.sessions.write().remove(user_id);
    }

    async fn len(&self) -> usize {
        self.sessions.read().len()
    }

    async fn evict_idle(&self, max_idle: Duration) -> usize {
        let now = Utc::now();
        let mut sessions = self.sessions.write();
        let before = sessions.len();
        sessions.retain(|_, session| session.idle_for(now) <= max_idle);
        let evicted = before - sessions.len();
        if evicted > 0 {
            tracing::info!(evicted, remaining = sessions.len(), "evicted idle sessions");
        }
        evicted
    }
}
