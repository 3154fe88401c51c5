//! Profile configuration data models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level profile configuration (`~/.tabmove/config.json`)
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ProfileConfig {
    /// Name of the profile used when none is selected explicitly
    #[serde(rename = "current-profile", skip_serializing_if = "Option::is_none")]
    pub current_profile: Option<String>,
    /// Map of profile name to connection settings
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,
}

/// A named set of connection settings
///
/// Passwords are deliberately absent.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct Profile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_config_default() {
        let config = ProfileConfig::default();
        assert!(config.current_profile.is_none());
        assert!(config.profiles.is_empty());
    }

    #[test]
    fn test_deserialize_profile_file() {
        let config: ProfileConfig = serde_json::from_str(
            r#"{
                "current-profile": "prod",
                "profiles": {
                    "prod": {
                        "server": "https://tableau.example.com",
                        "username": "alice",
                        "site": "finance",
                        "api-version": "3.4"
                    },
                    "dev": { "server": "http://localhost" }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(config.current_profile.as_deref(), Some("prod"));
        let prod = &config.profiles["prod"];
        assert_eq!(prod.username.as_deref(), Some("alice"));
        assert_eq!(prod.api_version.as_deref(), Some("3.4"));
        let dev = &config.profiles["dev"];
        assert!(dev.username.is_none());
        assert!(dev.site.is_none());
    }

    #[test]
    fn test_password_field_is_ignored() {
        let profile: Profile =
            serde_json::from_str(r#"{"server": "h", "password": "nope"}"#).unwrap();
        let json = serde_json::to_string(&profile).unwrap();
        assert!(!json.contains("nope"));
    }
}
