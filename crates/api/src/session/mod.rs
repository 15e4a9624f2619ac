//! Server-side sessions.
//!
//! The browser holds only a signed session id ([`cookie`]); the data lives
//! in an in-process [`SessionStore`]. Handlers never touch the store: they
//! work on a per-request [`RequestContext`] which the session middleware
//! loads before the handler runs and persists afterwards.

pub mod context;
pub mod cookie;

use std::collections::HashMap;
use std::sync::Arc;

use folio_core::types::DbId;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::flash::Flash;

pub use context::RequestContext;

/// The authenticated admin bound to a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub id: DbId,
    pub username: String,
}

/// Everything a session remembers between requests.
#[derive(Debug, Clone, Default)]
pub struct SessionData {
    pub user: Option<SessionUser>,
    pub flash: Option<Flash>,
}

impl SessionData {
    pub fn is_empty(&self) -> bool {
        self.user.is_none() && self.flash.is_none()
    }
}

/// In-memory session storage shared by all requests.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, SessionData>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load(&self, id: &str) -> Option<SessionData> {
        self.inner.read().await.get(id).cloned()
    }

    pub async fn save(&self, id: String, data: SessionData) {
        self.inner.write().await.insert(id, data);
    }

    /// Overwrite the data of a live session. Returns `false`, storing
    /// nothing, when the session is gone (e.g. destroyed by a logout that
    /// finished while this request was running).
    pub async fn update_if_present(&self, id: &str, data: SessionData) -> bool {
        match self.inner.write().await.get_mut(id) {
            Some(entry) => {
                *entry = data;
                true
            }
            None => false,
        }
    }

    pub async fn remove(&self, id: &str) {
        self.inner.write().await.remove(id);
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}

/// Generate a fresh random session id.
pub fn new_session_id() -> String {
    Uuid::new_v4().simple().to_string()
}
