//! Authentication domain module.
//!
//! - `model`: credentials sent to the server and the grant it returns
//! - `gateway`: trait for the login and registration endpoints

mod gateway;
mod model;

pub use gateway::AuthGateway;
pub use model::{AuthGrant, Credentials};
