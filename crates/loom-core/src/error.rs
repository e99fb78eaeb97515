//! Error types for the Loom client.

use crate::validation::ValidationError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire Loom client.
///
/// Network and server failures, client-side validation failures and a
/// declined confirmation are the three outcomes screens care about. The
/// remaining variants cover local storage and configuration.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum LoomError {
    /// The request never produced an HTTP response (connect, DNS, body read).
    #[error("Network error: {message}")]
    Network { message: String },

    /// The server answered with a non-success status.
    #[error("Server error ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Server { status: u16, message: Option<String> },

    /// Client-side validation rejected the input before any request was made.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The user declined a destructive action.
    #[error("Confirmation declined")]
    ConfirmationDeclined,

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl LoomError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates a Server error
    pub fn server(status: u16, message: Option<String>) -> Self {
        Self::Server { status, message }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// True for any failed remote call (no response or non-2xx response).
    pub fn is_remote_failure(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Server { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if the user declined a confirmation
    pub fn is_declined(&self) -> bool {
        matches!(self, Self::ConfirmationDeclined)
    }

    /// A 4xx answer that carries a server message, such as a refused
    /// credential pair. Transport failures and 5xx responses are not.
    pub fn is_client_rejection(&self) -> bool {
        matches!(self, Self::Server { status, .. } if (400..500).contains(status))
            && self.server_message().is_some()
    }

    /// Returns the message the server put in its error body, if any.
    ///
    /// Empty messages count as absent.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Server {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Some(message.as_str()),
            _ => None,
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for LoomError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for LoomError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for LoomError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for LoomError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, LoomError>`.
pub type Result<T> = std::result::Result<T, LoomError>;
