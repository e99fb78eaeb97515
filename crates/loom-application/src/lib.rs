//! Application layer for the Loom client.
//!
//! Screen controllers that coordinate the domain traits: the session store,
//! the generic remote-list controller and the project dashboard built on it,
//! and the login and registration forms.

pub mod dashboard;
pub mod login;
pub mod register;
pub mod resource_list;
pub mod session_store;
pub mod submission;

#[cfg(test)]
pub(crate) mod test_support;

pub use dashboard::{CreateProjectDialog, DashboardPhase, ProjectCard, ProjectDashboard};
pub use login::LoginController;
pub use register::RegistrationController;
pub use resource_list::{ListMessages, RemoveOutcome, ResourceListController};
pub use session_store::SessionStore;
pub use submission::SubmitOutcome;
