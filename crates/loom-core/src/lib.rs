//! Domain layer of the Loom client.
//!
//! Types and traits shared by every other crate: the session and user
//! models, the project collection, validation rules, screen state, routing,
//! configuration and the common error type. Nothing here performs I/O.

pub mod auth;
pub mod collection;
pub mod config;
pub mod error;
pub mod navigation;
pub mod project;
pub mod session;
pub mod user;
pub mod validation;
pub mod view;

// Re-export common error type
pub use error::{LoomError, Result};
