//! Connection settings resolution from multiple sources

use log::debug;

use crate::config::{api, defaults, env};
use crate::error::{Result, TabError};

use super::models::Profile;
use super::store::ProfileStore;

/// Resolved connection settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Server address, e.g. `https://tableau.example.com`
    pub server: String,
    /// REST API version
    pub api_version: String,
    /// User to sign in as
    pub username: String,
    /// Site content URL (empty for the default site)
    pub site: String,
}

/// Values given on the command line or via their environment variables
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerOverrides<'a> {
    pub server: Option<&'a str>,
    pub username: Option<&'a str>,
    pub site: Option<&'a str>,
    pub api_version: Option<&'a str>,
}

impl ServerConfig {
    /// Resolve each setting: override first, then the profile, then the
    /// built-in default where one exists.
    pub fn resolve(overrides: ServerOverrides<'_>, profile: Option<&Profile>) -> Result<Self> {
        let server = overrides
            .server
            .map(str::to_string)
            .or_else(|| profile.and_then(|p| p.server.clone()))
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| {
                TabError::Config(missing_setting_message("server", "--server", env::SERVER))
            })?;

        let username = overrides
            .username
            .map(str::to_string)
            .or_else(|| profile.and_then(|p| p.username.clone()))
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| {
                TabError::Config(missing_setting_message(
                    "username",
                    "--username",
                    env::USERNAME,
                ))
            })?;

        let site = overrides
            .site
            .map(str::to_string)
            .or_else(|| profile.and_then(|p| p.site.clone()))
            .unwrap_or_else(|| defaults::SITE.to_string());

        let api_version = overrides
            .api_version
            .map(str::to_string)
            .or_else(|| profile.and_then(|p| p.api_version.clone()))
            .unwrap_or_else(|| api::DEFAULT_VERSION.to_string());

        debug!(
            "Resolved server config: server={}, username={}, site='{}', api_version={}",
            server, username, site, api_version
        );

        Ok(Self {
            server,
            api_version,
            username,
            site,
        })
    }
}

/// Generate helpful error message when a required setting is missing
fn missing_setting_message(setting: &str, flag: &str, env_var: &str) -> String {
    format!(
        "No {} configured. Provide it using one of:\n\
         \n\
         1. CLI argument:      tabmove {} <VALUE>\n\
         2. Environment var:   export {}=<VALUE>\n\
         3. Profile file:      ~/.tabmove/config.json",
        setting, flag, env_var
    )
}

/// Resolve the active profile name from multiple sources:
/// 1. --profile CLI flag
/// 2. TABMOVE_PROFILE env var
/// 3. current-profile from the profile file
///
/// A missing profile file selects nothing; an unreadable one is an error.
pub fn resolve_active_profile_name(
    cli_profile: Option<&str>,
    store: &ProfileStore,
) -> Result<Option<String>> {
    if let Some(name) = cli_profile {
        debug!("Using profile from CLI flag: {}", name);
        return Ok(Some(name.to_string()));
    }

    if let Ok(name) = std::env::var(env::PROFILE) {
        if !name.is_empty() {
            debug!("Using profile from {} env var: {}", env::PROFILE, name);
            return Ok(Some(name));
        }
    }

    let config = store.load()?;
    Ok(config.current_profile.inspect(|name| {
        debug!("Using profile from config file: {}", name);
    }))
}

/// Load the profile file and return the active profile, if any is selected
///
/// A selected profile that does not exist in the file is an error.
pub fn resolve_active_profile(
    cli_profile: Option<&str>,
    store: &ProfileStore,
) -> Result<Option<Profile>> {
    let Some(name) = resolve_active_profile_name(cli_profile, store)? else {
        return Ok(None);
    };

    let config = store.load()?;
    match config.profiles.get(&name) {
        Some(profile) => {
            debug!("Resolved profile '{}': server={:?}", name, profile.server);
            Ok(Some(profile.clone()))
        }
        None => Err(TabError::Config(format!(
            "Profile '{}' not found in {}",
            name,
            store.path().display()
        ))),
    }
}
