//! HTTP access to the Loom backend.
//!
//! [`ApiClient`] owns the base URL and bearer-token handling; the endpoint
//! groups ([`ProjectApi`], [`AuthApi`]) implement the core traits on top of it.

pub mod api_client;
pub mod auth_api;
pub mod project_api;

pub use api_client::ApiClient;
pub use auth_api::AuthApi;
pub use project_api::ProjectApi;
