//! Authentication gateway trait.

use super::model::{AuthGrant, Credentials};
use crate::error::Result;
use async_trait::async_trait;

/// The server's authentication endpoints.
///
/// Both calls return the same grant shape. A rejected call surfaces as
/// `LoomError::Server` carrying the server's message when it sent one.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// `POST /users/login`
    async fn login(&self, credentials: &Credentials) -> Result<AuthGrant>;

    /// `POST /users/register`
    async fn register(&self, credentials: &Credentials) -> Result<AuthGrant>;
}
