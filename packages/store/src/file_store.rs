//! # File-backed session store
//!
//! [`FileStore`] persists the session as a small TOML file so desktop and
//! mobile builds stay signed in across app restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── session.toml           # serialized AuthSession
//! ```
//!
//! ## Platform data directories
//!
//! Callers pass a base directory, typically `dirs::data_dir()` joined with
//! the app name:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS / iOS | `~/Library/Application Support/acnetify/` |
//! | Linux | `~/.local/share/acnetify/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\acnetify\` |
//! | Android | App-internal storage (via `dirs`) |
//!
//! A missing or unparseable file reads as logged out.

use std::path::PathBuf;

use crate::session::{AuthSession, SessionStore};

/// Filesystem-backed SessionStore for desktop and mobile persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn session_path(&self) -> PathBuf {
        self.base.join("session.toml")
    }
}

impl SessionStore for FileStore {
    async fn load(&self) -> Option<AuthSession> {
        let raw = std::fs::read_to_string(self.session_path()).ok()?;
        match toml::from_str(&raw) {
            Ok(session) => Some(session),
            Err(err) => {
                tracing::warn!("discarding unreadable session file: {err}");
                None
            }
        }
    }

    async fn save(&self, session: &AuthSession) {
        let path = self.session_path();
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match toml::to_string_pretty(session) {
            Ok(raw) => {
                if let Err(err) = std::fs::write(&path, raw) {
                    tracing::warn!("failed to persist session: {err}");
                }
            }
            Err(err) => tracing::warn!("failed to serialize session: {err}"),
        }
    }

    async fn clear(&self) {
        let _ = std::fs::remove_file(self.session_path());
    }
}
