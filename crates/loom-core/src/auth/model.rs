use crate::session::Session;
use crate::user::UserIdentity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Email and password as typed into a login or registration form.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

// Keeps the password out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Successful response of `/users/login` and `/users/register`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthGrant {
    pub token: String,
    #[serde(default)]
    pub user: UserIdentity,
}

impl From<AuthGrant> for Session {
    fn from(grant: AuthGrant) -> Self {
        Session::new(grant.user, grant.token)
    }
}
