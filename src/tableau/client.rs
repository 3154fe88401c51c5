//! Tableau HTTP client for REST API interactions

use log::debug;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

use crate::config::api;
use crate::error::{Result, TabError};
use crate::profile::ServerConfig;
use crate::tableau::auth::Session;

/// Error envelope returned by Tableau for failed requests
#[derive(Deserialize, Debug)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

/// Error details: `summary`, `detail` and the Tableau error `code`
#[derive(Deserialize, Debug)]
struct ApiErrorBody {
    summary: Option<String>,
    detail: Option<String>,
    code: Option<String>,
}

/// Tableau REST API client
pub struct TableauClient {
    client: Client,
    server: String,
    api_version: String,
}

impl TableauClient {
    /// Create a new client for the given server address and API version
    ///
    /// A server given without a scheme is assumed to be HTTPS.
    pub fn new(server: &str, api_version: &str) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(api::CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(api::REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            server: normalize_server(server),
            api_version: api_version.to_string(),
        }
    }

    /// Create a client from resolved connection settings
    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(&config.server, &config.api_version)
    }

    /// Server address (scheme included, no trailing slash)
    pub fn server(&self) -> &str {
        &self.server
    }

    /// Versioned API base, e.g. `https://host/api/3.19`
    pub(crate) fn base_url(&self) -> String {
        format!("{}{}/{}", self.server, api::BASE_PATH, self.api_version)
    }

    /// Site-scoped API base, e.g. `https://host/api/3.19/sites/<site_id>`
    pub(crate) fn site_url(&self, site_id: &str) -> String {
        format!("{}/{}/{}", self.base_url(), api::SITES, site_id)
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder.header(ACCEPT, "application/json")
    }

    /// Add standard headers plus the session token
    fn with_session(
        &self,
        builder: reqwest::RequestBuilder,
        session: &Session,
    ) -> reqwest::RequestBuilder {
        self.with_headers(builder)
            .header(api::AUTH_HEADER, session.token())
    }

    /// Create an unauthenticated POST request builder (sign-in only)
    pub(crate) fn post_anonymous(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.post(url))
    }

    /// Create an authenticated POST request builder
    pub(crate) fn post(&self, url: &str, session: &Session) -> reqwest::RequestBuilder {
        self.with_session(self.client.post(url), session)
    }

    /// Create an authenticated GET request builder
    pub(crate) fn get(&self, url: &str, session: &Session) -> reqwest::RequestBuilder {
        self.with_session(self.client.get(url), session)
    }

    /// Create an authenticated PUT request builder
    pub(crate) fn put(&self, url: &str, session: &Session) -> reqwest::RequestBuilder {
        self.with_session(self.client.put(url), session)
    }

    /// Require an exact status code, turning anything else into an error
    /// built from the response body.
    pub(crate) async fn expect_status(
        &self,
        response: reqwest::Response,
        expected: u16,
        context: &str,
    ) -> Result<reqwest::Response> {
        let status = response.status().as_u16();
        if status == expected {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        debug!(
            "Unexpected status {} (wanted {}) while trying to {}: {}",
            status, expected, context, body
        );
        Err(api_error(status, &body, context))
    }

    /// Require status 200 and decode the JSON body
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: reqwest::Response,
        context: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = self.expect_status(response, 200, context).await?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            TabError::Json(format!("Failed to parse response to {}: {}", context, e))
        })
    }
}

/// Ensure a scheme is present and strip trailing slashes
fn normalize_server(server: &str) -> String {
    let trimmed = server.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

/// Build an error from a failed response, extracting Tableau's error code
/// and detail text when the body carries them.
pub(crate) fn api_error(status: u16, body: &str, context: &str) -> TabError {
    let (code, detail) = match serde_json::from_str::<ApiErrorEnvelope>(body) {
        Ok(envelope) => {
            let err = envelope.error;
            let detail = match (err.summary, err.detail) {
                (Some(s), Some(d)) => format!("{}: {}", s, d),
                (Some(s), None) => s,
                (None, Some(d)) => d,
                (None, None) => String::new(),
            };
            (err.code, detail)
        }
        Err(_) => (None, body.trim().to_string()),
    };

    let message = if detail.is_empty() {
        format!("Failed to {}", context)
    } else {
        format!("Failed to {}: {}", context, detail)
    };

    if status == 401 {
        TabError::Authentication { code, message }
    } else {
        TabError::Api {
            status,
            code,
            message,
        }
    }
}

#[cfg(test)]
impl TableauClient {
    /// Create a test client pointed at a mock server with the default API version
    pub fn test_client(base_url: &str) -> Self {
        Self::new(base_url, api::DEFAULT_VERSION)
    }
}
