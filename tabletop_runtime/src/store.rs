//! Session storage behind a trait so the in-memory map can be swapped
//! for a shared cache or database without touching the session manager.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use tabletop_engine::SessionState;

use crate::error::StoreError;

#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, session_id: &str) -> Result<Option<SessionState>, StoreError>;

    /// Insert or overwrite the session stored under `state.session_id`.
    async fn put(&self, state: SessionState) -> Result<(), StoreError>;

    /// Returns whether a session was removed.
    async fn delete(&self, session_id: &str) -> Result<bool, StoreError>;
}

/// Process-lifetime map. No eviction.
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, SessionState>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.read().map(|s| s.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, session_id: &str) -> Result<Option<SessionState>, StoreError> {
        let sessions = self
            .sessions
            .read()
            .map_err(|e| StoreError::Internal(e.to_string()))?;
        Ok(sessions.get(session_id).cloned())
    }

    async fn put(&self, state: SessionState) -> Result<(), StoreError> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(|e| StoreError::Internal(e.to_string()))?;
        sessions.insert(state.session_id.clone(), state);
        Ok(())
    }

    async fn delete(&self, session_id: &str) -> Result<bool, StoreError> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(|e| StoreError::Internal(e.to_string()))?;
        Ok(sessions.remove(session_id).is_some())
    }
}
