//! Session management: sign-in and sign-out

mod api;
mod models;

pub use models::{Credentials, Session};
