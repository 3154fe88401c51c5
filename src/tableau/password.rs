//! Password acquisition
//!
//! Sign-in asks a [`PasswordSource`] for the password right before the
//! request, so callers decide whether it comes from the environment, a
//! terminal prompt, or a fixed value.

use log::debug;

use crate::config::env;
use crate::error::{Result, TabError};
use crate::ui::prompt_password;

/// Supplies the password for a user at sign-in time
pub trait PasswordSource {
    fn password(&self, username: &str) -> Result<String>;
}

/// A fixed password (library callers, tests)
pub struct StaticPassword(String);

impl StaticPassword {
    pub fn new(password: &str) -> Self {
        Self(password.to_string())
    }
}

impl PasswordSource for StaticPassword {
    fn password(&self, _username: &str) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// Password resolution with fallback logic:
/// 1. `TABLEAU_PASSWORD` environment variable
/// 2. Interactive prompt without echo (not in batch mode)
pub struct PasswordResolver {
    batch_mode: bool,
}

impl PasswordResolver {
    pub fn new(batch_mode: bool) -> Self {
        Self { batch_mode }
    }

    /// Generate helpful error message when no password is available
    fn password_not_found_message(username: &str) -> String {
        format!(
            "No password available for '{}'. In batch mode set {}=<PASSWORD>, \
             or run without --batch to be prompted.",
            username,
            env::PASSWORD
        )
    }
}

impl PasswordSource for PasswordResolver {
    fn password(&self, username: &str) -> Result<String> {
        if let Ok(password) = std::env::var(env::PASSWORD) {
            if !password.is_empty() {
                debug!("Using password from {} environment variable", env::PASSWORD);
                return Ok(password);
            }
        }

        if self.batch_mode {
            return Err(TabError::Config(Self::password_not_found_message(
                username,
            )));
        }

        debug!("Prompting for password of '{}'", username);
        prompt_password("Password")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_password() {
        let source = StaticPassword::new("s3cret");
        assert_eq!(source.password("alice").unwrap(), "s3cret");
    }

    #[test]
    fn test_password_not_found_message_format() {
        let msg = PasswordResolver::password_not_found_message("alice");
        assert!(msg.contains("alice"));
        assert!(msg.contains(env::PASSWORD));
        assert!(msg.contains("--batch"));
    }

    #[test]
    fn test_resolver_batch_mode_without_env() {
        if std::env::var(env::PASSWORD).is_ok() {
            return;
        }
        let resolver = PasswordResolver::new(true);
        match resolver.password("alice") {
            Err(TabError::Config(msg)) => assert!(msg.contains("alice")),
            other => panic!("Expected TabError::Config, got {:?}", other),
        }
    }
}
