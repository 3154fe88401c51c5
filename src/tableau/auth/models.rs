//! Authentication data models

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sign-in credentials
///
/// The password is held only for the sign-in call and never printed.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    password: String,
    /// Site content URL (empty for the default site)
    pub site: String,
}

impl Credentials {
    pub fn new(username: &str, password: String, site: &str) -> Self {
        Self {
            username: username.to_string(),
            password,
            site: site.to_string(),
        }
    }

    pub(crate) fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("site", &self.site)
            .finish()
    }
}

/// An authenticated session
///
/// Every request after sign-in carries `token`. Signing out consumes the
/// session, so it cannot be used afterwards.
pub struct Session {
    token: String,
    site_id: String,
    user_id: String,
}

impl Session {
    pub fn new(token: &str, site_id: &str, user_id: &str) -> Self {
        Self {
            token: token.to_string(),
            site_id: site_id.to_string(),
            user_id: user_id.to_string(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn site_id(&self) -> &str {
        &self.site_id
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"<redacted>")
            .field("site_id", &self.site_id)
            .field("user_id", &self.user_id)
            .finish()
    }
}

/// Sign-in request body
#[derive(Serialize, Debug)]
pub(crate) struct SignInRequest<'a> {
    pub credentials: SignInCredentials<'a>,
}

#[derive(Serialize, Debug)]
pub(crate) struct SignInCredentials<'a> {
    pub name: &'a str,
    pub password: &'a str,
    pub site: SiteRef<'a>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SiteRef<'a> {
    pub content_url: &'a str,
}

impl<'a> SignInRequest<'a> {
    pub fn from_credentials(credentials: &'a Credentials) -> Self {
        Self {
            credentials: SignInCredentials {
                name: &credentials.username,
                password: credentials.password(),
                site: SiteRef {
                    content_url: &credentials.site,
                },
            },
        }
    }
}

/// Sign-in response body
#[derive(Deserialize, Debug)]
pub(crate) struct SignInResponse {
    pub credentials: SignInResult,
}

#[derive(Deserialize, Debug)]
pub(crate) struct SignInResult {
    pub token: String,
    pub site: IdRef,
    pub user: IdRef,
}

/// `{"id": "..."}` reference
#[derive(Deserialize, Debug)]
pub(crate) struct IdRef {
    pub id: String,
}

impl SignInResponse {
    pub fn into_session(self) -> Session {
        let creds = self.credentials;
        Session {
            token: creds.token,
            site_id: creds.site.id,
            user_id: creds.user.id,
        }
    }
}
