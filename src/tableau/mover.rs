//! Workbook move orchestration
//!
//! Sign in, resolve the destination project, resolve the workbook and its
//! current project, refuse a move into the same project, move, sign out.
//! Once a session exists, sign-out runs exactly once on every path.

use chrono::{DateTime, Utc};
use log::info;
use serde::Serialize;
use std::future::Future;

use crate::error::{Result, TabError};
use crate::profile::ServerConfig;
use crate::tableau::auth::{Credentials, Session};
use crate::tableau::password::PasswordSource;
use crate::tableau::traits::TableauResource;
use crate::tableau::TableauClient;
use crate::ui::{clear_spinner, create_spinner, finish_spinner};

/// What the operator asked to move, by name
#[derive(Debug, Clone)]
pub struct MoveRequest {
    pub workbook: String,
    pub project: String,
}

/// Result of a completed move
#[derive(Debug, Clone, Serialize)]
pub struct MoveOutcome {
    pub workbook_id: String,
    pub workbook_name: String,
    pub source_project_id: String,
    pub source_project_name: String,
    pub destination_project_id: String,
    pub destination_project_name: String,
    /// Last modification of the workbook before the move
    pub workbook_updated_at: Option<DateTime<Utc>>,
}

/// Move a workbook into the named project
///
/// The password is requested from `passwords` just before sign-in.
pub async fn move_workbook_to_project(
    client: &TableauClient,
    config: &ServerConfig,
    passwords: &dyn PasswordSource,
    request: &MoveRequest,
    quiet: bool,
) -> Result<MoveOutcome> {
    let password = passwords.password(&config.username)?;
    let credentials = Credentials::new(&config.username, password, &config.site);

    let session = run_step(
        &format!("1. Signing in as {}", config.username),
        quiet,
        client.sign_in(&credentials),
    )
    .await?;

    let result = relocate(client, &session, request, quiet).await;

    info!("5. Signing out and invalidating the authentication token");
    client.sign_out(session).await;

    result
}

/// Steps 2-4, run inside a live session
async fn relocate(
    client: &TableauClient,
    session: &Session,
    request: &MoveRequest,
    quiet: bool,
) -> Result<MoveOutcome> {
    let destination = run_step(
        &format!("2. Finding project id of '{}'", request.project),
        quiet,
        client.find_project(session, &request.project),
    )
    .await?;

    let workbook = run_step(
        &format!("3. Finding workbook id of '{}'", request.workbook),
        quiet,
        client.find_workbook(session, &request.workbook),
    )
    .await?;

    if workbook.project_id() == destination.id() {
        return Err(TabError::NoOpMove {
            workbook: workbook.name().to_string(),
            project: destination.name().to_string(),
        });
    }

    run_step(
        &format!("4. Moving workbook to '{}'", destination.name()),
        quiet,
        client.move_workbook(session, workbook.id(), destination.id()),
    )
    .await?;

    Ok(MoveOutcome {
        workbook_id: workbook.id().to_string(),
        workbook_name: workbook.name().to_string(),
        source_project_id: workbook.project_id().to_string(),
        source_project_name: workbook.project_name().to_string(),
        destination_project_id: destination.id,
        destination_project_name: destination.name,
        workbook_updated_at: workbook.updated_at,
    })
}

/// Log a step, show a spinner while it runs, and clear it on failure
async fn run_step<T, F>(message: &str, quiet: bool, step: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    info!("{}", message);
    let spinner = create_spinner(message, quiet);

    let result = step.await;
    match &result {
        Ok(_) => finish_spinner(spinner, &format!("{} ... done", message)),
        Err(_) => clear_spinner(spinner),
    }
    result
}
