//! Workbook module

mod api;
mod models;

pub use models::{MoveWorkbookRequest, ProjectRef, Workbook, WorkbookList, WorkbooksResponse};
