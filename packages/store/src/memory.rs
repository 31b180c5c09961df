use std::sync::{Arc, Mutex};

use crate::session::{AuthSession, SessionStore};

/// In-memory SessionStore for testing and as a last-resort fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Option<AuthSession>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    async fn load(&self) -> Option<AuthSession> {
        self.inner.lock().unwrap().clone()
    }

    async fn save(&self, session: &AuthSession) {
        *self.inner.lock().unwrap() = Some(session.clone());
    }

    async fn clear(&self) {
        *self.inner.lock().unwrap() = None;
    }
}
