//! User domain module.
//!
//! The server owns the user record; the client only carries it around as the
//! identity half of a [`crate::session::Session`].

mod model;

pub use model::{UserIdentity, UserRef};
