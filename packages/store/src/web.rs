//! # Browser-backed session store
//!
//! [`LocalStore`] keeps the session in `window.localStorage` under a single
//! JSON-encoded key. The session is three strings, so `localStorage` is
//! sufficient; no IndexedDB involvement.

use crate::session::{AuthSession, SessionStore};

const STORAGE_KEY: &str = "acnetify.session";

/// `localStorage`-backed SessionStore for web builds.
#[derive(Clone, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionStore for LocalStore {
    async fn load(&self) -> Option<AuthSession> {
        let raw = Self::storage()?.get_item(STORAGE_KEY).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(err) => {
                tracing::warn!("discarding unreadable stored session: {err}");
                None
            }
        }
    }

    async fn save(&self, session: &AuthSession) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable, session not persisted");
            return;
        };
        match serde_json::to_string(session) {
            Ok(raw) => {
                if storage.set_item(STORAGE_KEY, &raw).is_err() {
                    tracing::warn!("failed to persist session to localStorage");
                }
            }
            Err(err) => tracing::warn!("failed to serialize session: {err}"),
        }
    }

    async fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}
