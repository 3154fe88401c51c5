//! Sign-in / sign-out API operations

use log::{debug, warn};

use crate::config::api;
use crate::error::Result;
use crate::tableau::TableauClient;

use super::models::{Credentials, Session, SignInRequest, SignInResponse};

impl TableauClient {
    /// Sign in and obtain a session
    ///
    /// A 401 becomes `TabError::Authentication`; any other status than 200
    /// becomes `TabError::Api` with the server's error code and detail.
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<Session> {
        let url = format!("{}/{}", self.base_url(), api::SIGN_IN);
        debug!(
            "Signing in as '{}' (site: '{}') at {}",
            credentials.username, credentials.site, url
        );

        let body = SignInRequest::from_credentials(credentials);
        let response = self.post_anonymous(&url).json(&body).send().await?;

        let context = format!("sign in as '{}'", credentials.username);
        let resp: SignInResponse = self.parse_api_response(response, &context).await?;
        let session = resp.into_session();

        debug!(
            "Signed in: site_id={}, user_id={}",
            session.site_id(),
            session.user_id()
        );
        Ok(session)
    }

    /// Sign out, invalidating the session token server-side
    ///
    /// Never fails: any status is accepted, and errors are logged.
    pub async fn sign_out(&self, session: Session) {
        let url = format!("{}/{}", self.base_url(), api::SIGN_OUT);
        debug!("Signing out from {}", url);

        match self.post(&url, &session).send().await {
            Ok(response) if response.status().is_success() => {
                debug!("Signed out, session token invalidated");
            }
            Ok(response) => {
                warn!(
                    "Sign-out returned status {}; the token may already be invalid",
                    response.status().as_u16()
                );
            }
            Err(e) => {
                warn!("Sign-out request failed: {}", e);
            }
        }
    }
}
