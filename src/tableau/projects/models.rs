//! Project data models

use serde::Deserialize;

use crate::tableau::traits::{ListResponse, Pagination, TableauResource};

/// Project data from Tableau API
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
}

impl TableauResource for Project {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// `GET /sites/:site/projects` response
#[derive(Deserialize, Debug)]
pub struct ProjectsResponse {
    pub pagination: Option<Pagination>,
    #[serde(default)]
    pub projects: ProjectList,
}

/// The `projects` wrapper; an empty listing arrives as `{}`
#[derive(Deserialize, Debug, Default)]
pub struct ProjectList {
    #[serde(default)]
    pub project: Vec<Project>,
}

impl ListResponse<Project> for ProjectsResponse {
    fn into_items(self) -> Vec<Project> {
        self.projects.project
    }

    fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_projects_response() {
        let resp: ProjectsResponse = serde_json::from_value(serde_json::json!({
            "pagination": { "pageNumber": "1", "pageSize": "1000", "totalAvailable": "2" },
            "projects": {
                "project": [
                    { "id": "p1", "name": "Marketing", "description": "", "contentPermissions": "ManagedByOwner" },
                    { "id": "p2", "name": "Sales", "parentProjectId": "p1" }
                ]
            }
        }))
        .unwrap();

        assert_eq!(resp.pagination().unwrap().total_available, 2);
        let projects = resp.into_items();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[1].name(), "Sales");
        assert_eq!(projects[1].id(), "p2");
    }

    #[test]
    fn test_deserialize_empty_projects() {
        let resp: ProjectsResponse = serde_json::from_value(serde_json::json!({
            "pagination": { "pageNumber": "1", "pageSize": "1000", "totalAvailable": "0" },
            "projects": {}
        }))
        .unwrap();
        assert!(resp.into_items().is_empty());
    }
}
