//! tabmove - Move Tableau Server workbooks between projects
//!
//! A CLI tool that relocates a workbook into another project through the
//! Tableau REST API.
//!
//! # Flow
//!
//! 1. Sign in and obtain a session token
//! 2. Resolve the destination project by name
//! 3. Resolve the workbook (and its current project) by name
//! 4. Move the workbook, unless it is already in the destination
//! 5. Sign out, on success and on failure alike
//!
//! # Example
//!
//! ```bash
//! # Prompt for everything except the connection settings
//! tabmove --server https://tableau.example.com -u alice
//!
//! # Non-interactive, password from the environment
//! TABLEAU_PASSWORD=... tabmove --server https://tableau.example.com -u alice \
//!     -w "Quarterly Report" -p "Finance" --batch -o json
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod profile;
pub mod tableau;
pub mod ui;

pub use cli::{Cli, OutputFormat};
pub use error::{Result, TabError};
pub use profile::{ProfileStore, ServerConfig, ServerOverrides};
pub use tableau::{
    move_workbook_to_project, Credentials, MoveOutcome, MoveRequest, PasswordResolver,
    PasswordSource, Session, StaticPassword, TableauClient,
};
