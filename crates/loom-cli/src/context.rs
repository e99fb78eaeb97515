//! Wiring of the layers for one CLI invocation.

use anyhow::{Context, Result};
use loom_application::SessionStore;
use loom_core::config::ClientConfig;
use loom_infrastructure::{ConfigService, FileSessionRepository, LoomPaths};
use loom_interaction::{ApiClient, AuthApi, ProjectApi};
use std::sync::Arc;

/// Everything a command needs: configuration, the restored session and an
/// HTTP client that reads its bearer token from that session.
pub struct AppContext {
    pub client_config: ClientConfig,
    pub session: Arc<SessionStore>,
    client: ApiClient,
}

impl AppContext {
    /// Builds the context and restores any persisted session.
    ///
    /// `api_url` is the `--api-url` flag, which beats the environment and the
    /// config file.
    pub async fn load(api_url: Option<&str>) -> Result<Self> {
        let paths = LoomPaths::default();
        let client_config = effective_client_config(&paths, api_url)?;

        let repository = FileSessionRepository::new(&paths)?;
        let session = Arc::new(SessionStore::new(Arc::new(repository)));
        session
            .bootstrap()
            .await
            .context("Failed to read the stored session")?;

        let client = ApiClient::new(&client_config, session.clone())?;
        tracing::debug!("[Context] Using backend {}", client.base_url());

        Ok(Self {
            client_config,
            session,
            client,
        })
    }

    pub fn auth_api(&self) -> Arc<AuthApi> {
        Arc::new(AuthApi::new(self.client.clone()))
    }

    pub fn project_api(&self) -> Arc<ProjectApi> {
        Arc::new(ProjectApi::new(self.client.clone()))
    }
}

/// Flag, then `LOOM_API_URL`, then config.toml, then the built-in default.
pub fn effective_client_config(paths: &LoomPaths, api_url: Option<&str>) -> Result<ClientConfig> {
    let mut client_config = ConfigService::new(paths)?.client_config()?;
    if let Some(url) = api_url.map(str::trim).filter(|url| !url.is_empty()) {
        client_config.api_base_url = url.to_string();
    }
    Ok(client_config)
}
