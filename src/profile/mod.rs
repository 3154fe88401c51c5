//! Profile management module
//!
//! Named profiles bundle connection settings (server, username, site, API
//! version) so they need not be repeated on every invocation.

mod models;
mod resolve;
mod store;

pub use models::{Profile, ProfileConfig};
pub use resolve::{
    resolve_active_profile, resolve_active_profile_name, ServerConfig, ServerOverrides,
};
pub use store::ProfileStore;
