//! Registration form controller.

use crate::session_store::SessionStore;
use crate::submission::{SubmitOutcome, activate_session};
use loom_core::auth::{AuthGateway, Credentials};
use loom_core::error::{LoomError, Result};
use loom_core::navigation::{Navigator, Route};
use loom_core::session::Session;
use loom_core::validation::{FormInput, ValidationPolicy};
use loom_core::view::FormState;
use std::sync::Arc;

/// Shown when the server reports the email as taken.
pub const EMAIL_TAKEN_MESSAGE: &str = "This email is already registered! Please login.";
/// Shown for every other registration failure.
pub const REGISTRATION_FAILED_MESSAGE: &str = "Something went wrong. Try again.";

const EMAIL_TAKEN_MARKER: &str = "email already exists";

/// Account registration.
///
/// Input is checked against [`ValidationPolicy::registration`] before any
/// request. Server failures are mapped to one of two fixed messages; the raw
/// server text only reaches the log.
pub struct RegistrationController {
    auth: Arc<dyn AuthGateway>,
    session: Arc<SessionStore>,
    navigator: Arc<dyn Navigator>,
    policy: ValidationPolicy,
    email: String,
    password: String,
    confirm_password: String,
    show_password: bool,
    state: FormState,
}

impl RegistrationController {
    pub fn new(
        auth: Arc<dyn AuthGateway>,
        session: Arc<SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            auth,
            session,
            navigator,
            policy: ValidationPolicy::registration(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            show_password: false,
            state: FormState::default(),
        }
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    pub fn set_confirm_password(&mut self, confirm_password: impl Into<String>) {
        self.confirm_password = confirm_password.into();
    }

    /// Flips between masked and plain-text password display.
    pub fn toggle_password_visibility(&mut self) -> bool {
        self.show_password = !self.show_password;
        self.show_password
    }

    pub fn show_password(&self) -> bool {
        self.show_password
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Link to the login screen.
    pub fn go_to_login(&self) {
        self.navigator.navigate(Route::Login);
    }

    /// Submits the form. Same lifecycle as the login form.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if !self.state.accepts_submit() {
            tracing::debug!("[Register] Submit ignored in phase {:?}", self.state.phase);
            return SubmitOutcome::Ignored;
        }

        self.state.begin();

        match self.attempt().await {
            Ok(session) => {
                tracing::info!("[Register] Registered {}", session.user.display_name());
                self.state.complete();
                self.navigator.navigate(Route::Home);
                SubmitOutcome::Authenticated
            }
            Err(err) => {
                let message = registration_failure_message(&err);
                tracing::warn!("[Register] Registration failed: {}", err);
                self.state.fail(message.clone());
                SubmitOutcome::Rejected(message)
            }
        }
    }

    async fn attempt(&self) -> Result<Session> {
        let already_authenticated = self.session.is_authenticated().await;
        self.policy.validate(&FormInput::registration(
            &self.email,
            &self.password,
            &self.confirm_password,
            already_authenticated,
        ))?;

        let credentials = Credentials::new(self.email.clone(), self.password.clone());
        let grant = self.auth.register(&credentials).await?;
        activate_session(&self.session, grant).await
    }
}

/// The message a failed registration shows.
///
/// Validation errors keep their own text. Remote failures collapse to
/// [`EMAIL_TAKEN_MESSAGE`] or [`REGISTRATION_FAILED_MESSAGE`].
pub fn registration_failure_message(err: &LoomError) -> String {
    match err {
        LoomError::Validation(validation) => validation.to_string(),
        other => {
            let taken = other
                .server_message()
                .is_some_and(|m| m.to_lowercase().contains(EMAIL_TAKEN_MARKER));
            if taken {
                EMAIL_TAKEN_MESSAGE.to_string()
            } else {
                REGISTRATION_FAILED_MESSAGE.to_string()
            }
        }
    }
}
