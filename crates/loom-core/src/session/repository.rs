//! Session repository trait.
//!
//! Defines the interface for keeping a session across process restarts.

use super::model::Session;
use crate::error::Result;
use async_trait::async_trait;

/// Durable storage for the single current session.
///
/// There is at most one stored session. Implementations must make `clear`
/// idempotent so logout never fails because nothing was stored.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Loads the stored session.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Session))`: A complete session was stored
    /// - `Ok(None)`: Nothing stored, or the stored record was incomplete
    /// - `Err(_)`: Storage could not be read
    async fn load(&self) -> Result<Option<Session>>;

    /// Replaces the stored session.
    async fn save(&self, session: &Session) -> Result<()>;

    /// Removes the stored session (no-op if none exists).
    async fn clear(&self) -> Result<()>;
}
