//! File-backed session persistence (session.json).
//!
//! The token sits under the fixed key `token`. The identity is stored next
//! to it because a token without its owner is not a usable session.

use super::atomic_file::AtomicFile;
use crate::paths::LoomPaths;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use loom_core::error::{LoomError, Result};
use loom_core::session::{Session, SessionRepository};
use loom_core::user::UserIdentity;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// On-disk shape of session.json.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoredSession {
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    user: Option<UserIdentity>,
    #[serde(default)]
    saved_at: Option<DateTime<Utc>>,
}

/// Stores the current session in a single private JSON file.
pub struct FileSessionRepository {
    file: AtomicFile<StoredSession>,
}

impl FileSessionRepository {
    /// Uses the session file resolved by `paths`.
    pub fn new(paths: &LoomPaths) -> Result<Self> {
        let path = paths
            .session_file()
            .map_err(|e| LoomError::config(format!("Failed to resolve session path: {}", e)))?;
        Ok(Self::with_path(path))
    }

    /// Uses an explicit file path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicFile::json(path).private(),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.file.path().to_path_buf()
    }
}

#[async_trait]
impl SessionRepository for FileSessionRepository {
    async fn load(&self) -> Result<Option<Session>> {
        let stored = match self.file.load() {
            Ok(Some(stored)) => stored,
            Ok(None) => return Ok(None),
            Err(e) => {
                tracing::warn!(
                    "[SessionStorage] Ignoring unreadable session at {:?}: {}",
                    self.file.path(),
                    e
                );
                return Ok(None);
            }
        };

        match (stored.token, stored.user) {
            (Some(token), Some(user)) => Ok(Session::try_new(user, token)),
            (Some(_), None) => {
                tracing::warn!(
                    "[SessionStorage] Ignoring stored token without identity at {:?}",
                    self.file.path()
                );
                Ok(None)
            }
            _ => Ok(None),
        }
    }

    async fn save(&self, session: &Session) -> Result<()> {
        let stored = StoredSession {
            token: Some(session.token.clone()),
            user: Some(session.user.clone()),
            saved_at: Some(Utc::now()),
        };
        self.file.replace(&stored)?;
        tracing::debug!("[SessionStorage] Session saved to {:?}", self.file.path());
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.file.remove()?;
        tracing::debug!("[SessionStorage] Session cleared at {:?}", self.file.path());
        Ok(())
    }
}
