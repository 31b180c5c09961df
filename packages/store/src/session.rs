//! # Session persistence — the signed-in user's credentials
//!
//! The only state this client persists locally is the current session: three
//! string fields written after a successful sign-in and removed on logout.
//! There is no schema versioning and no cache of server entities — every
//! screen refetches from the network.
//!
//! All reads and writes go through the [`SessionStore`] trait, so the same
//! repository code works against an in-memory store (tests), a TOML file
//! (desktop/mobile), or browser `localStorage` (web). Implementations live in
//! sibling modules ([`crate::memory`], [`crate::file_store`], and, on wasm,
//! [`crate::web`]).

use serde::{Deserialize, Serialize};

/// A signed-in user's persisted credentials.
///
/// Exists from successful sign-in until explicit logout. The token is a
/// bearer token attached to authenticated API calls; there is no refresh or
/// expiry handling — a 401 surfaces to the user instead.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub user_id: String,
    pub username: String,
    pub token: String,
}

impl AuthSession {
    pub fn new(
        user_id: impl Into<String>,
        username: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            username: username.into(),
            token: token.into(),
        }
    }
}

/// Async trait for persisting the current session.
pub trait SessionStore {
    /// The persisted session, or `None` when logged out (or the stored data
    /// is unreadable).
    fn load(&self) -> impl std::future::Future<Output = Option<AuthSession>>;

    /// Persist a session, replacing any previous one.
    fn save(
        &self,
        session: &AuthSession,
    ) -> impl std::future::Future<Output = ()>;

    /// Remove the persisted session.
    fn clear(&self) -> impl std::future::Future<Output = ()>;
}
