use std::fmt;

/// Custom error type for Tableau operations
#[derive(Debug)]
pub enum TabError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// Credentials rejected or session token invalid/expired (HTTP 401)
    Authentication {
        code: Option<String>,
        message: String,
    },
    /// API returned an unexpected status
    Api {
        status: u16,
        code: Option<String>,
        message: String,
    },
    /// No project or workbook matched the requested name
    NotFound { kind: &'static str, name: String },
    /// Workbook already lives in the destination project
    NoOpMove { workbook: String, project: String },
    /// JSON parsing error
    Json(String),
    /// Configuration error
    Config(String),
    /// Interactive prompt failed
    Prompt(String),
}

impl fmt::Display for TabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabError::Http(e) => write!(f, "HTTP request failed: {}", e),
            TabError::Authentication { code, message } => match code {
                Some(code) => write!(f, "Authentication failed ({}): {}", code, message),
                None => write!(f, "Authentication failed: {}", message),
            },
            TabError::Api {
                status,
                code,
                message,
            } => match code {
                Some(code) => write!(f, "API error (status {}, code {}): {}", status, code, message),
                None => write!(f, "API error (status {}): {}", status, message),
            },
            TabError::NotFound { kind, name } => write!(f, "No {} named '{}' found", kind, name),
            TabError::NoOpMove { workbook, project } => write!(
                f,
                "Workbook '{}' is already in project '{}'",
                workbook, project
            ),
            TabError::Json(msg) => write!(f, "JSON error: {}", msg),
            TabError::Config(msg) => write!(f, "Configuration error: {}", msg),
            TabError::Prompt(msg) => write!(f, "Prompt failed: {}", msg),
        }
    }
}

impl std::error::Error for TabError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TabError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TabError {
    fn from(err: reqwest::Error) -> Self {
        TabError::Http(err)
    }
}

impl From<serde_json::Error> for TabError {
    fn from(err: serde_json::Error) -> Self {
        TabError::Json(err.to_string())
    }
}

impl From<std::io::Error> for TabError {
    fn from(err: std::io::Error) -> Self {
        TabError::Config(err.to_string())
    }
}

/// Result type alias for Tableau operations
pub type Result<T> = std::result::Result<T, TabError>;
