//! Project API operations

use log::{debug, warn};

use crate::config::api;
use crate::error::{Result, TabError};
use crate::tableau::auth::Session;
use crate::tableau::traits::{find_by_name, ListResponse, TableauResource};
use crate::tableau::TableauClient;

use super::models::{Project, ProjectsResponse};

impl TableauClient {
    /// Get the projects on the session's site (single request)
    pub async fn get_projects(&self, session: &Session) -> Result<Vec<Project>> {
        let url = format!(
            "{}/{}?pageSize={}&pageNumber=1",
            self.site_url(session.site_id()),
            api::PROJECTS,
            api::PAGE_SIZE
        );
        debug!("Fetching projects from: {}", url);

        let response = self.get(&url, session).send().await?;
        let resp: ProjectsResponse = self
            .parse_api_response(response, "list projects")
            .await?;

        let pagination = resp.pagination().cloned();
        let projects = resp.into_items();

        if let Some(p) = pagination {
            if p.is_truncated(projects.len()) {
                warn!(
                    "Project listing truncated: {} of {} projects returned",
                    projects.len(),
                    p.total_available
                );
            }
        }

        debug!("Fetched {} projects", projects.len());
        Ok(projects)
    }

    /// Resolve a project name (case-insensitive) to the project as the
    /// server names it
    pub async fn find_project(&self, session: &Session, name: &str) -> Result<Project> {
        let projects = self.get_projects(session).await?;

        match find_by_name(&projects, name, "project") {
            Some(project) => {
                debug!("Project '{}' resolved to {}", name, project.id());
                Ok(project.clone())
            }
            None => Err(TabError::NotFound {
                kind: "project",
                name: name.to_string(),
            }),
        }
    }

    /// Resolve a project name (case-insensitive) to its ID
    pub async fn find_project_id(&self, session: &Session, name: &str) -> Result<String> {
        self.find_project(session, name).await.map(|project| project.id)
    }
}
