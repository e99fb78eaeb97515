//! ApiClient - thin wrapper over reqwest for the Loom REST API.
//!
//! Centralizes the base URL, attaches `Authorization: Bearer <token>` when a
//! token is available, and maps transport and status failures onto
//! [`LoomError`].

use loom_core::config::ClientConfig;
use loom_core::error::{LoomError, Result};
use loom_core::session::TokenProvider;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;

/// Error body the backend sends on failures.
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Shared HTTP client for every endpoint group.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
    tokens: Arc<dyn TokenProvider>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Builds a client from configuration.
    ///
    /// No timeout is set unless `request_timeout_secs` is configured.
    pub fn new(config: &ClientConfig, tokens: Arc<dyn TokenProvider>) -> Result<Self> {
        let base_url = Url::parse(config.api_base_url.trim()).map_err(|e| {
            LoomError::config(format!(
                "Invalid api_base_url '{}': {}",
                config.api_base_url, e
            ))
        })?;

        if base_url.cannot_be_a_base() {
            return Err(LoomError::config(format!(
                "api_base_url '{}' cannot be used as a base URL",
                config.api_base_url
            )));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| LoomError::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            tokens,
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Resolves API path segments against the base URL.
    ///
    /// Each segment is percent-encoded, so ids can never escape their slot.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| {
                LoomError::config(format!("api_base_url '{}' has no path", self.base_url))
            })?;
            path.pop_if_empty();
            path.extend(segments);
        }
        Ok(url)
    }

    async fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder> {
        let url = self.endpoint(segments)?;
        tracing::debug!("[ApiClient] {} {}", method, url);

        let mut builder = self.client.request(method, url);
        if let Some(token) = self.tokens.bearer_token().await {
            builder = builder.bearer_auth(token);
        }
        Ok(builder)
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let response = builder
            .send()
            .await
            .map_err(|err| LoomError::network(format!("Loom API request failed: {err}")))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body_text = response.text().await.unwrap_or_default();
        Err(map_http_error(status, &body_text))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let bytes = response
            .bytes()
            .await
            .map_err(|err| LoomError::network(format!("Failed to read Loom response: {err}")))?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// `GET` and decode a JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        let builder = self.request(Method::GET, segments).await?;
        let response = self.send(builder).await?;
        Self::decode(response).await
    }

    /// `POST` a JSON body and decode the JSON reply.
    pub async fn post_json<B, T>(&self, segments: &[&str], body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::POST, segments).await?.json(body);
        let response = self.send(builder).await?;
        Self::decode(response).await
    }

    /// `DELETE`; only the status matters, the body is ignored.
    pub async fn delete(&self, segments: &[&str]) -> Result<()> {
        let builder = self.request(Method::DELETE, segments).await?;
        self.send(builder).await?;
        Ok(())
    }
}

/// Turns a non-success response into `LoomError::Server`, keeping the
/// server's `message` when the body carries one.
fn map_http_error(status: StatusCode, body_text: &str) -> LoomError {
    let message = serde_json::from_str::<ErrorBody>(body_text)
        .ok()
        .and_then(|body| body.message)
        .filter(|message| !message.trim().is_empty());

    tracing::debug!(
        "[ApiClient] {} response{}",
        status,
        message
            .as_deref()
            .map(|m| format!(": {m}"))
            .unwrap_or_default()
    );

    LoomError::server(status.as_u16(), message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use loom_core::session::StaticToken;

    fn client(base: &str) -> ApiClient {
        let config = ClientConfig {
            api_base_url: base.to_string(),
            request_timeout_secs: None,
        };
        ApiClient::new(&config, Arc::new(StaticToken::default())).unwrap()
    }

    #[test]
    fn test_endpoint_joins_segments() {
        let api = client("http://localhost:3000");
        assert_eq!(
            api.endpoint(&["projects", "all"]).unwrap().as_str(),
            "http://localhost:3000/projects/all"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let api = client("https://loom.test/api/");
        assert_eq!(
            api.endpoint(&["users", "login"]).unwrap().as_str(),
            "https://loom.test/api/users/login"
        );
    }

    #[test]
    fn test_endpoint_encodes_ids() {
        let api = client("http://localhost:3000");
        assert_eq!(
            api.endpoint(&["projects", "delete", "a/b"]).unwrap().as_str(),
            "http://localhost:3000/projects/delete/a%2Fb"
        );
    }

    #[test]
    fn test_invalid_base_url_is_config_error() {
        let config = ClientConfig {
            api_base_url: "not a url".to_string(),
            request_timeout_secs: None,
        };
        let err = ApiClient::new(&config, Arc::new(StaticToken::default())).unwrap_err();
        assert!(matches!(err, LoomError::Config(_)));
    }

    #[test]
    fn test_map_http_error_with_message() {
        let err = map_http_error(StatusCode::BAD_REQUEST, r#"{"message":"Invalid credentials"}"#);
        assert_eq!(err.server_message(), Some("Invalid credentials"));
        assert!(matches!(err, LoomError::Server { status: 400, .. }));
    }

    #[test]
    fn test_map_http_error_without_json() {
        let err = map_http_error(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>");
        assert_eq!(err.server_message(), None);
        assert!(matches!(err, LoomError::Server { status: 500, .. }));
    }
}
