//! Unified path management for Loom client files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/loom/              # Config directory (or $LOOM_HOME)
//! ├── config.toml              # Client configuration
//! └── session.json             # Persisted session token and identity
//! ```

use std::path::{Path, PathBuf};

/// Environment variable that relocates the whole config directory.
pub const LOOM_HOME_ENV: &str = "LOOM_HOME";

const APP_DIR_NAME: &str = "loom";
const CONFIG_FILE_NAME: &str = "config.toml";
const SESSION_FILE_NAME: &str = "session.json";

/// Errors that can occur during path resolution.
#[derive(Debug, thiserror::Error)]
pub enum PathError {
    /// Home directory could not be determined.
    #[error("Cannot find home directory")]
    HomeDirNotFound,
}

/// Resolves the files the client reads and writes.
///
/// An explicit base directory wins over `$LOOM_HOME`, which wins over the
/// platform config directory (`~/.config/loom` on Linux).
#[derive(Debug, Clone, Default)]
pub struct LoomPaths {
    base: Option<PathBuf>,
}

impl LoomPaths {
    /// Creates a resolver, optionally pinned to `base_path`.
    pub fn new(base_path: Option<&Path>) -> Self {
        Self {
            base: base_path.map(Path::to_path_buf),
        }
    }

    /// Returns the Loom configuration directory.
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        if let Some(base) = &self.base {
            return Ok(base.clone());
        }

        if let Some(home) = std::env::var_os(LOOM_HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(home));
        }

        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to config.toml.
    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Returns the path to session.json.
    ///
    /// # Security Note
    ///
    /// The file holds a bearer token; it is written with mode 600 on Unix.
    pub fn session_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join(SESSION_FILE_NAME))
    }
}
