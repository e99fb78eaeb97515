//! Routes between screens.

use crate::project::Project;

/// A screen the client can show.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    /// The project dashboard (landing view after authentication)
    Home,
    Login,
    Register,
    /// A single project, carried along so the screen can render immediately
    Project(Project),
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Project(_) => "/project",
        }
    }
}

/// Moves the front end to another screen.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Blocking yes/no prompt guarding destructive actions.
pub trait Confirm: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Home.path(), "/");
        assert_eq!(Route::Login.path(), "/login");
        assert_eq!(Route::Register.path(), "/register");
    }
}
