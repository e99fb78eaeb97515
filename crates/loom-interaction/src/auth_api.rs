//! User authentication endpoints.

use crate::api_client::ApiClient;
use async_trait::async_trait;
use loom_core::auth::{AuthGateway, AuthGrant, Credentials};
use loom_core::error::Result;

/// `/users/login` and `/users/register`.
#[derive(Debug, Clone)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthGateway for AuthApi {
    async fn login(&self, credentials: &Credentials) -> Result<AuthGrant> {
        self.client.post_json(&["users", "login"], credentials).await
    }

    async fn register(&self, credentials: &Credentials) -> Result<AuthGrant> {
        self.client.post_json(&["users", "register"], credentials).await
    }
}
