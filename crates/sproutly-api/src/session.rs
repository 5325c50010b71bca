// Persisted session state
//
// The session (token + cached user record) outlives the process, like the
// original platform's per-device sign-in. Persistence failures are logged
// and swallowed: callers treat the store as infallible local state, and a
// lost session only means signing in again.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::model::User;

/// An authenticated session: the opaque backend token plus the cached
/// user record it belongs to. Created on login/register, replaced on
/// profile update, destroyed on logout or any 401.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Storage for the current session.
///
/// `load` is consulted by the HTTP client on every request; `store` and
/// `clear` are side effects of the auth endpoints and of 401 teardown.
/// Token and user live and die together -- there is no partial clear.
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Option<Session>;
    fn store(&self, session: &Session);
    fn clear(&self);
}

// ── In-memory store ─────────────────────────────────────────────────

/// Process-local session storage. Used by tests and by embedders that
/// manage persistence themselves.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<Session> {
        match self.session.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn store(&self, session: &Session) {
        match self.session.lock() {
            Ok(mut guard) => *guard = Some(session.clone()),
            Err(poisoned) => *poisoned.into_inner() = Some(session.clone()),
        }
    }

    fn clear(&self) {
        match self.session.lock() {
            Ok(mut guard) => *guard = None,
            Err(poisoned) => *poisoned.into_inner() = None,
        }
    }
}

// ── File-backed store ───────────────────────────────────────────────

/// Session persisted as a single JSON document on disk.
///
/// The default location follows platform conventions
/// (`~/.local/share/sproutly/session.json` on Linux).
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Store the session at an explicit path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store the session at the platform-conventional data path.
    pub fn at_default_path() -> Self {
        Self {
            path: default_session_path(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Resolve the session file path via XDG / platform conventions.
pub fn default_session_path() -> PathBuf {
    ProjectDirs::from("app", "sproutly", "sproutly").map_or_else(
        || {
            let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
            p.push(".sproutly");
            p.push("session.json");
            p
        },
        |dirs| dirs.data_dir().join("session.json"),
    )
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Option<Session> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                warn!(path = %self.path.display(), "discarding unreadable session file: {e}");
                None
            }
        }
    }

    fn store(&self, session: &Session) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!(path = %self.path.display(), "cannot create session directory: {e}");
                return;
            }
        }
        match serde_json::to_string(session) {
            Ok(raw) => {
                if let Err(e) = std::fs::write(&self.path, raw) {
                    warn!(path = %self.path.display(), "cannot persist session: {e}");
                }
            }
            Err(e) => warn!("cannot serialize session: {e}"),
        }
    }

    fn clear(&self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(path = %self.path.display(), "cannot remove session file: {e}");
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::EntityId;

    fn sample_session() -> Session {
        Session {
            token: "t1".into(),
            user: User {
                id: EntityId::from("u1"),
                ..User::default()
            },
        }
    }

    #[test]
    fn memory_store_round_trip() {
        let store = MemorySessionStore::new();
        assert!(store.load().is_none());

        store.store(&sample_session());
        assert_eq!(store.load().unwrap().token, "t1");

        store.clear();
        assert!(store.load().is_none());
    }

    #[test]
    fn file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("session.json"));
        assert!(store.load().is_none());

        store.store(&sample_session());
        let loaded = store.load().unwrap();
        assert_eq!(loaded.token, "t1");
        assert_eq!(loaded.user.id, EntityId::from("u1"));

        store.clear();
        assert!(store.load().is_none());
        assert!(!store.path().exists());
    }

    #[test]
    fn file_store_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("session.json"));
        store.clear();
        store.clear();
        assert!(store.load().is_none());
    }

    #[test]
    fn file_store_discards_corrupt_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();

        let store = FileSessionStore::new(path);
        assert!(store.load().is_none());
    }
}
