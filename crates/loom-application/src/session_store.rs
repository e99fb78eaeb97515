use async_trait::async_trait;
use loom_core::error::Result;
use loom_core::session::{Session, SessionRepository, TokenProvider};
use loom_core::user::UserIdentity;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Holds the authenticated session for every screen that needs it.
///
/// The store is passed explicitly (`Arc<SessionStore>`) to the controllers
/// and to the HTTP client, which reads the bearer token from it on each
/// request.
///
/// Lifecycle:
/// - [`bootstrap`](Self::bootstrap) restores the persisted session
/// - [`establish`](Self::establish) persists and activates a new session
/// - [`logout`](Self::logout) clears memory and storage
pub struct SessionStore {
    current: RwLock<Option<Session>>,
    repository: Arc<dyn SessionRepository>,
}

impl SessionStore {
    /// Creates an empty store. Call [`bootstrap`](Self::bootstrap) to restore
    /// a previous session.
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self {
            current: RwLock::new(None),
            repository,
        }
    }

    /// Loads the persisted session into memory.
    ///
    /// # Returns
    ///
    /// The restored session, or `None` when nothing usable was stored.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read. Memory is left unchanged.
    pub async fn bootstrap(&self) -> Result<Option<Session>> {
        let restored = self.repository.load().await?;

        let mut current = self.current.write().await;
        *current = restored.clone();

        match &restored {
            Some(session) => tracing::info!(
                "[SessionStore] Restored session for {}",
                session.user.display_name()
            ),
            None => tracing::debug!("[SessionStore] No stored session"),
        }

        Ok(restored)
    }

    /// Persists `session` and makes it the active one.
    ///
    /// The token is written to storage before memory is updated, so a
    /// failed write leaves the previous state in place.
    pub async fn establish(&self, session: Session) -> Result<()> {
        self.repository.save(&session).await?;

        tracing::info!(
            "[SessionStore] Session established for {}",
            session.user.display_name()
        );

        let mut current = self.current.write().await;
        *current = Some(session);
        Ok(())
    }

    /// Ends the session in memory and in storage.
    ///
    /// Memory is cleared even if storage fails, so the process never keeps
    /// acting as a user who asked to log out.
    pub async fn logout(&self) -> Result<()> {
        let previous = self.current.write().await.take();
        if let Some(session) = &previous {
            tracing::info!(
                "[SessionStore] Logging out {}",
                session.user.display_name()
            );
        }
        self.repository.clear().await
    }

    pub async fn current(&self) -> Option<Session> {
        self.current.read().await.clone()
    }

    pub async fn user(&self) -> Option<UserIdentity> {
        self.current
            .read()
            .await
            .as_ref()
            .map(|session| session.user.clone())
    }

    pub async fn is_authenticated(&self) -> bool {
        self.current.read().await.is_some()
    }
}

#[async_trait]
impl TokenProvider for SessionStore {
    async fn bearer_token(&self) -> Option<String> {
        self.current
            .read()
            .await
            .as_ref()
            .map(|session| session.token.clone())
    }
}
