//! Bearer token access for outbound requests.

/// Supplies the bearer token attached to outbound requests.
///
/// The HTTP client asks on every request, so a login or logout takes effect
/// on the next call without rebuilding the client.
#[async_trait::async_trait]
pub trait TokenProvider: Send + Sync {
    async fn bearer_token(&self) -> Option<String>;
}

/// A fixed token, or none. Used where no session store is involved.
#[derive(Debug, Clone, Default)]
pub struct StaticToken(pub Option<String>);

#[async_trait::async_trait]
impl TokenProvider for StaticToken {
    async fn bearer_token(&self) -> Option<String> {
        self.0.clone()
    }
}
