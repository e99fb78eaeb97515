//! User identity as returned by the authentication endpoints.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Opaque user record issued by the server on login or registration.
///
/// Only `_id` and `email` are interpreted by the client. Every other field,
/// a plain `id` included, is kept in `extra` so the record can be persisted
/// and restored unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserIdentity {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserIdentity {
    /// Builds an identity with just an email, mostly useful in tests.
    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Self::default()
        }
    }

    /// A human readable label: the email, then `_id`, then a plain `id`, then
    /// a placeholder.
    pub fn display_name(&self) -> &str {
        self.email
            .as_deref()
            .or(self.id.as_deref())
            .or_else(|| self.extra.get("id").and_then(Value::as_str))
            .unwrap_or("unknown user")
    }
}

/// A collaborator entry on a project.
///
/// The server may send either a bare user id or an embedded user record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserRef {
    Id(String),
    User(UserIdentity),
}
