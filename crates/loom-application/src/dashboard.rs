//! The project dashboard: the landing screen after authentication.

use crate::resource_list::{ListMessages, RemoveOutcome, ResourceListController};
use loom_core::error::Result;
use loom_core::navigation::{Confirm, Navigator, Route};
use loom_core::project::{Project, ProjectRepository};
use loom_core::validation::{ValidationError, require_non_empty};
use std::sync::Arc;

/// One tile of the project grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCard {
    pub id: String,
    pub name: String,
    pub collaborator_count: usize,
}

impl From<&Project> for ProjectCard {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id.clone(),
            name: project.name.clone(),
            collaborator_count: project.collaborator_count(),
        }
    }
}

/// What the dashboard should draw. Loading wins over error, error over grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardPhase {
    Loading,
    Error(String),
    Ready(Vec<ProjectCard>),
}

/// The "new project" dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateProjectDialog {
    pub is_open: bool,
    pub name: String,
}

impl CreateProjectDialog {
    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    fn check_name(&self) -> std::result::Result<(), ValidationError> {
        require_non_empty("project name", &self.name)
    }
}

/// Project grid plus the create dialog.
pub struct ProjectDashboard<C: ProjectRepository> {
    list: ResourceListController<C>,
    dialog: CreateProjectDialog,
    navigator: Arc<dyn Navigator>,
}

impl<C: ProjectRepository> ProjectDashboard<C> {
    pub fn new(projects: Arc<C>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            list: ResourceListController::new(projects, ListMessages::projects()),
            dialog: CreateProjectDialog::default(),
            navigator,
        }
    }

    pub fn list(&self) -> &ResourceListController<C> {
        &self.list
    }

    pub fn dialog(&self) -> &CreateProjectDialog {
        &self.dialog
    }

    pub fn dialog_mut(&mut self) -> &mut CreateProjectDialog {
        &mut self.dialog
    }

    /// Fetches the project list. Called once when the screen appears.
    pub async fn mount(&mut self) -> Result<()> {
        self.list.load().await
    }

    pub fn cards(&self) -> Vec<ProjectCard> {
        self.list.items().iter().map(ProjectCard::from).collect()
    }

    pub fn phase(&self) -> DashboardPhase {
        let state = self.list.state();
        if state.is_loading {
            DashboardPhase::Loading
        } else if let Some(message) = &state.error_message {
            DashboardPhase::Error(message.clone())
        } else {
            DashboardPhase::Ready(self.cards())
        }
    }

    /// Creates a project from the dialog.
    ///
    /// A blank name never reaches the server. On success the dialog closes and
    /// its name is cleared; on failure it stays open with the name intact.
    pub async fn submit_dialog(&mut self) -> Result<Project> {
        self.dialog.check_name()?;

        let name = self.dialog.name.clone();
        let project = self.list.create(&name).await?;
        self.dialog.close();
        self.dialog.name.clear();
        Ok(project)
    }

    pub async fn delete_project(&mut self, id: &str, confirm: &dyn Confirm) -> RemoveOutcome {
        self.list.remove(id, confirm).await
    }

    /// Opens a project from the grid. Returns `false` for an unknown id.
    pub fn open_project(&self, id: &str) -> bool {
        match self.list.items().iter().find(|p| p.id == id) {
            Some(project) => {
                self.navigator.navigate(Route::Project(project.clone()));
                true
            }
            None => {
                tracing::debug!("[Dashboard] No project {} to open", id);
                false
            }
        }
    }
}
