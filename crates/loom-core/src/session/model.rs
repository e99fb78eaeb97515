use crate::user::UserIdentity;
use serde::{Deserialize, Serialize};

/// An authenticated client session.
///
/// A session only exists when both halves are present: holding a token
/// implies the identity that owns it is known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user: UserIdentity,
    pub token: String,
}

impl Session {
    pub fn new(user: UserIdentity, token: impl Into<String>) -> Self {
        Self {
            user,
            token: token.into(),
        }
    }

    /// Returns `None` when the token is blank, so an empty credential can
    /// never stand in for an authenticated session.
    pub fn try_new(user: UserIdentity, token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            None
        } else {
            Some(Self { user, token })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_token_is_not_a_session() {
        assert!(Session::try_new(UserIdentity::default(), "  ").is_none());
        assert!(Session::try_new(UserIdentity::default(), "tok").is_some());
    }
}
