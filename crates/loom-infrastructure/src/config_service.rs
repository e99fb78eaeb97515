//! Configuration service implementation.
//!
//! Loads the client configuration from config.toml and applies environment
//! overrides on top of it.

use crate::paths::LoomPaths;
use crate::storage::AtomicFile;
use loom_core::config::{ClientConfig, RootConfig};
use loom_core::error::{LoomError, Result};
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// Environment variable overriding `client.api_base_url`.
pub const LOOM_API_URL_ENV: &str = "LOOM_API_URL";

/// Loads and caches the root configuration.
///
/// A missing config file is not an error: the defaults apply until something
/// is written.
#[derive(Clone)]
pub struct ConfigService {
    file: Arc<AtomicFile<RootConfig>>,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<RootConfig>>>,
}

impl ConfigService {
    pub fn new(paths: &LoomPaths) -> Result<Self> {
        let path = paths
            .config_file()
            .map_err(|e| LoomError::config(format!("Failed to resolve config path: {}", e)))?;
        Ok(Self::with_path(path))
    }

    /// Uses an explicit config file path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: Arc::new(AtomicFile::toml(path)),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the root configuration as stored on disk, loading it if not cached.
    pub fn get_config(&self) -> Result<RootConfig> {
        {
            let read_lock = self
                .config
                .read()
                .map_err(|e| LoomError::internal(format!("config cache poisoned: {}", e)))?;
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let loaded = self.file.load()?.unwrap_or_default();
        tracing::debug!("[ConfigService] Loaded config from {:?}", self.file.path());

        {
            let mut write_lock = self
                .config
                .write()
                .map_err(|e| LoomError::internal(format!("config cache poisoned: {}", e)))?;
            *write_lock = Some(loaded.clone());
        }

        Ok(loaded)
    }

    /// The effective client configuration: file values with `LOOM_API_URL`
    /// applied on top.
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut client = self.get_config()?.client;
        if let Some(url) = std::env::var(LOOM_API_URL_ENV)
            .ok()
            .filter(|url| !url.trim().is_empty())
        {
            tracing::debug!("[ConfigService] {} overrides api_base_url", LOOM_API_URL_ENV);
            client.api_base_url = url;
        }
        Ok(client)
    }

    /// Persists a new API base URL and refreshes the cache.
    pub fn set_api_base_url(&self, url: &str) -> Result<()> {
        let url = url.trim().to_string();
        if url.is_empty() {
            return Err(LoomError::config("api_base_url must not be empty"));
        }

        self.file.update(RootConfig::default(), |config| {
            config.client.api_base_url = url;
            Ok(())
        })?;
        self.invalidate_cache();
        tracing::info!("[ConfigService] api_base_url updated in {:?}", self.file.path());
        Ok(())
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        if let Ok(mut write_lock) = self.config.write() {
            *write_lock = None;
        }
    }

    pub fn path(&self) -> PathBuf {
        self.file.path().to_path_buf()
    }
}
