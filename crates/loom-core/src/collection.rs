//! Remote collection trait.
//!
//! A server-side list the client can read in full, append to by name, and
//! delete from by id. The list controllers are generic over this trait.

use crate::error::Result;
use async_trait::async_trait;

/// An item that carries a server-assigned identity.
pub trait Identified {
    fn id(&self) -> &str;
}

/// A collection owned by the server.
///
/// # Implementation Notes
///
/// - `fetch_all` returns the complete collection; callers replace their
///   local copy with it rather than merging.
/// - `create` returns the object exactly as the server stored it.
/// - `delete` only reports success or failure; any response body is ignored.
#[async_trait]
pub trait RemoteCollection: Send + Sync {
    type Item: Identified + Clone + Send + Sync;

    /// Reads the whole collection.
    async fn fetch_all(&self) -> Result<Vec<Self::Item>>;

    /// Creates an item with the given name.
    async fn create(&self, name: &str) -> Result<Self::Item>;

    /// Deletes the item with the given id.
    async fn delete(&self, id: &str) -> Result<()>;
}
