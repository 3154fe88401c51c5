//! Workbook API operations

use log::{debug, warn};

use crate::config::api;
use crate::error::{Result, TabError};
use crate::tableau::auth::Session;
use crate::tableau::traits::{find_by_name, ListResponse, TableauResource};
use crate::tableau::TableauClient;

use super::models::{MoveWorkbookRequest, Workbook, WorkbooksResponse};

impl TableauClient {
    /// Get the workbooks owned by the signed-in user (single request)
    pub async fn get_user_workbooks(&self, session: &Session) -> Result<Vec<Workbook>> {
        let url = format!(
            "{}/{}/{}/{}?pageSize={}&pageNumber=1",
            self.site_url(session.site_id()),
            api::USERS,
            session.user_id(),
            api::WORKBOOKS,
            api::PAGE_SIZE
        );
        debug!("Fetching workbooks from: {}", url);

        let response = self.get(&url, session).send().await?;
        let resp: WorkbooksResponse = self
            .parse_api_response(response, "list workbooks")
            .await?;

        let pagination = resp.pagination().cloned();
        let workbooks = resp.into_items();

        if let Some(p) = pagination {
            if p.is_truncated(workbooks.len()) {
                warn!(
                    "Workbook listing truncated: {} of {} workbooks returned",
                    workbooks.len(),
                    p.total_available
                );
            }
        }

        debug!("Fetched {} workbooks", workbooks.len());
        Ok(workbooks)
    }

    /// Resolve a workbook name (case-insensitive) among the user's workbooks
    ///
    /// The returned workbook carries both its ID and its current project ID.
    pub async fn find_workbook(&self, session: &Session, name: &str) -> Result<Workbook> {
        let workbooks = self.get_user_workbooks(session).await?;

        match find_by_name(&workbooks, name, "workbook") {
            Some(workbook) => {
                debug!(
                    "Workbook '{}' resolved to {} (project {})",
                    name,
                    workbook.id(),
                    workbook.project_id()
                );
                Ok(workbook.clone())
            }
            None => Err(TabError::NotFound {
                kind: "workbook",
                name: name.to_string(),
            }),
        }
    }

    /// Move a workbook into another project
    ///
    /// Uses PUT /sites/:site/workbooks/:workbook_id; only 200 counts as success.
    pub async fn move_workbook(
        &self,
        session: &Session,
        workbook_id: &str,
        project_id: &str,
    ) -> Result<()> {
        let url = format!(
            "{}/{}/{}",
            self.site_url(session.site_id()),
            api::WORKBOOKS,
            workbook_id
        );
        debug!("Moving workbook {} to project {}", workbook_id, project_id);

        let body = MoveWorkbookRequest::to_project(project_id);
        let response = self.put(&url, session).json(&body).send().await?;

        let context = format!(
            "move workbook '{}' to project '{}'",
            workbook_id, project_id
        );
        self.expect_status(response, 200, &context).await?;

        debug!("Workbook {} now in project {}", workbook_id, project_id);
        Ok(())
    }
}
