//! Login form controller.

use crate::session_store::SessionStore;
use crate::submission::{SubmitOutcome, activate_session};
use loom_core::auth::{AuthGateway, Credentials};
use loom_core::error::{LoomError, Result};
use loom_core::navigation::{Navigator, Route};
use loom_core::session::Session;
use loom_core::validation::{FormInput, ValidationPolicy};
use loom_core::view::FormState;
use std::sync::Arc;

/// Shown when the server gives no reason for a failed login.
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed.";

/// Email/password login.
///
/// On success the token is persisted, the session becomes active and the
/// navigator is sent to [`Route::Home`]. On failure the server's message is
/// shown verbatim, or [`LOGIN_FAILED_MESSAGE`] when there is none.
pub struct LoginController {
    auth: Arc<dyn AuthGateway>,
    session: Arc<SessionStore>,
    navigator: Arc<dyn Navigator>,
    policy: ValidationPolicy,
    email: String,
    password: String,
    state: FormState,
    credentials_rejected: bool,
}

impl LoginController {
    pub fn new(
        auth: Arc<dyn AuthGateway>,
        session: Arc<SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            auth,
            session,
            navigator,
            policy: ValidationPolicy::login(),
            email: String::new(),
            password: String::new(),
            state: FormState::default(),
            credentials_rejected: false,
        }
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Whether the last submit was refused by the server with a reason,
    /// as opposed to failing on transport, a 5xx or local validation.
    pub fn credentials_rejected(&self) -> bool {
        self.credentials_rejected
    }

    /// Link to the registration screen.
    pub fn go_to_register(&self) {
        self.navigator.navigate(Route::Register);
    }

    /// Submits the form.
    ///
    /// The form is `Submitting` only for the duration of this call; every
    /// exit path leaves it `Idle` (with an error) or `Completed`.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if !self.state.accepts_submit() {
            tracing::debug!("[Login] Submit ignored in phase {:?}", self.state.phase);
            return SubmitOutcome::Ignored;
        }

        self.state.begin();
        self.credentials_rejected = false;

        match self.attempt().await {
            Ok(session) => {
                tracing::info!("[Login] Logged in as {}", session.user.display_name());
                self.state.complete();
                self.navigator.navigate(Route::Home);
                SubmitOutcome::Authenticated
            }
            Err(err) => {
                let message = login_failure_message(&err);
                tracing::warn!("[Login] Login failed: {}", err);
                self.credentials_rejected = err.is_client_rejection();
                self.state.fail(message.clone());
                SubmitOutcome::Rejected(message)
            }
        }
    }

    async fn attempt(&self) -> Result<Session> {
        self.policy
            .validate(&FormInput::login(&self.email, &self.password))?;

        let credentials = Credentials::new(self.email.clone(), self.password.clone());
        let grant = self.auth.login(&credentials).await?;
        activate_session(&self.session, grant).await
    }
}

/// The message a failed login shows.
pub fn login_failure_message(err: &LoomError) -> String {
    match err {
        LoomError::Validation(validation) => validation.to_string(),
        other => other
            .server_message()
            .unwrap_or(LOGIN_FAILED_MESSAGE)
            .to_string(),
    }
}
