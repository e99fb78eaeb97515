//! Session domain module.
//!
//! # Module Structure
//!
//! - `model`: the authenticated [`Session`] (identity + token)
//! - `repository`: persistence trait for the session between runs
//! - `token`: read-only token access used by the HTTP layer

mod model;
mod repository;
mod token;

pub use model::Session;
pub use repository::SessionRepository;
pub use token::{StaticToken, TokenProvider};
