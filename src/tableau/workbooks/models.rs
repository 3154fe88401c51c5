//! Workbook data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::tableau::traits::{ListResponse, Pagination, TableauResource};

/// Workbook data from Tableau API
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Workbook {
    pub id: String,
    pub name: String,
    pub project: ProjectRef,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Project a workbook belongs to
#[derive(Deserialize, Debug, Clone)]
pub struct ProjectRef {
    pub id: String,
    pub name: Option<String>,
}

impl TableauResource for Workbook {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Workbook {
    /// ID of the project currently holding the workbook
    pub fn project_id(&self) -> &str {
        &self.project.id
    }

    /// Name of the current project, if the server sent it
    pub fn project_name(&self) -> &str {
        self.project.name.as_deref().unwrap_or("")
    }
}

/// `GET /sites/:site/users/:user/workbooks` response
#[derive(Deserialize, Debug)]
pub struct WorkbooksResponse {
    pub pagination: Option<Pagination>,
    #[serde(default)]
    pub workbooks: WorkbookList,
}

/// The `workbooks` wrapper; an empty listing arrives as `{}`
#[derive(Deserialize, Debug, Default)]
pub struct WorkbookList {
    #[serde(default)]
    pub workbook: Vec<Workbook>,
}

impl ListResponse<Workbook> for WorkbooksResponse {
    fn into_items(self) -> Vec<Workbook> {
        self.workbooks.workbook
    }

    fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }
}

/// Body of the move request: `{"workbook":{"project":{"id":...}}}`
#[derive(Serialize, Debug)]
pub struct MoveWorkbookRequest<'a> {
    pub workbook: MoveWorkbookTarget<'a>,
}

#[derive(Serialize, Debug)]
pub struct MoveWorkbookTarget<'a> {
    pub project: ProjectIdRef<'a>,
}

#[derive(Serialize, Debug)]
pub struct ProjectIdRef<'a> {
    pub id: &'a str,
}

impl<'a> MoveWorkbookRequest<'a> {
    pub fn to_project(project_id: &'a str) -> Self {
        Self {
            workbook: MoveWorkbookTarget {
                project: ProjectIdRef { id: project_id },
            },
        }
    }
}
