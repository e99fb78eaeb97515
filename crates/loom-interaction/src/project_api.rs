//! Project endpoints.

use crate::api_client::ApiClient;
use async_trait::async_trait;
use loom_core::collection::RemoteCollection;
use loom_core::error::Result;
use loom_core::project::Project;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
struct ProjectsEnvelope {
    projects: Vec<Project>,
}

#[derive(Debug, Deserialize)]
struct ProjectEnvelope {
    project: Project,
}

#[derive(Debug, Serialize)]
struct CreateProjectRequest<'a> {
    name: &'a str,
}

/// `/projects/*` as a [`RemoteCollection`] of [`Project`]s.
#[derive(Debug, Clone)]
pub struct ProjectApi {
    client: ApiClient,
}

impl ProjectApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RemoteCollection for ProjectApi {
    type Item = Project;

    async fn fetch_all(&self) -> Result<Vec<Project>> {
        let envelope: ProjectsEnvelope = self.client.get_json(&["projects", "all"]).await?;
        Ok(envelope.projects)
    }

    async fn create(&self, name: &str) -> Result<Project> {
        let envelope: ProjectEnvelope = self
            .client
            .post_json(&["projects", "create"], &CreateProjectRequest { name })
            .await?;
        Ok(envelope.project)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&["projects", "delete", id]).await
    }
}
