//! Tableau REST API client module
//!
//! Session handling, project/workbook lookup and the workbook move itself.

pub mod auth;
mod client;
pub mod mover;
pub mod password;
pub mod projects;
pub mod traits;
pub mod workbooks;

pub use auth::{Credentials, Session};
pub use client::TableauClient;
pub use mover::{move_workbook_to_project, MoveOutcome, MoveRequest};
pub use password::{PasswordResolver, PasswordSource, StaticPassword};
pub use projects::Project;
pub use traits::{find_by_name, Pagination, TableauResource};
pub use workbooks::Workbook;
