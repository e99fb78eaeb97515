//! Pieces shared by the login and registration forms.

use crate::session_store::SessionStore;
use loom_core::auth::AuthGrant;
use loom_core::error::{LoomError, Result};
use loom_core::session::Session;

/// Result of pressing a form's submit control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The session is active and navigation has happened.
    Authenticated,
    /// The form stays on screen with this message.
    Rejected(String),
    /// A submit was already running, or the form already completed.
    Ignored,
}

impl SubmitOutcome {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated)
    }
}

/// Turns a grant into the active session.
pub(crate) async fn activate_session(store: &SessionStore, grant: AuthGrant) -> Result<Session> {
    let session = Session::try_new(grant.user, grant.token)
        .ok_or_else(|| LoomError::internal("server returned an empty token"))?;
    store.establish(session.clone()).await?;
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockSessionRepository;
    use loom_core::user::UserIdentity;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_empty_token_is_not_activated() {
        let store = SessionStore::new(Arc::new(MockSessionRepository::new()));
        let grant = AuthGrant {
            token: String::new(),
            user: UserIdentity::default(),
        };

        assert!(activate_session(&store, grant).await.is_err());
        assert!(!store.is_authenticated().await);
    }
}
