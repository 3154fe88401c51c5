/// Configuration constants for the Tableau REST API
pub mod api {
    /// Base path segment for the REST API (followed by the version)
    pub const BASE_PATH: &str = "/api";

    /// Default REST API version
    pub const DEFAULT_VERSION: &str = "3.19";

    /// Header carrying the session token
    pub const AUTH_HEADER: &str = "X-Tableau-Auth";

    /// Sign-in endpoint (relative to the versioned base)
    pub const SIGN_IN: &str = "auth/signin";

    /// Sign-out endpoint (relative to the versioned base)
    pub const SIGN_OUT: &str = "auth/signout";

    /// Sites endpoint
    pub const SITES: &str = "sites";

    /// Projects endpoint
    pub const PROJECTS: &str = "projects";

    /// Users endpoint
    pub const USERS: &str = "users";

    /// Workbooks endpoint
    pub const WORKBOOKS: &str = "workbooks";

    /// Page size for list requests (server maximum)
    pub const PAGE_SIZE: u32 = 1000;

    /// Connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 60;
}

/// Environment variables consulted during configuration
pub mod env {
    /// Server address
    pub const SERVER: &str = "TABLEAU_SERVER";

    /// User to sign in as
    pub const USERNAME: &str = "TABLEAU_USERNAME";

    /// Site content URL
    pub const SITE: &str = "TABLEAU_SITE";

    /// REST API version
    pub const API_VERSION: &str = "TABLEAU_API_VERSION";

    /// Password (read only by the password resolver, never a flag)
    pub const PASSWORD: &str = "TABLEAU_PASSWORD";

    /// Active profile name
    pub const PROFILE: &str = "TABMOVE_PROFILE";
}

/// Profile file location
pub mod profile {
    /// Directory under $HOME holding the profile file
    pub const DIR_NAME: &str = ".tabmove";

    /// Profile file name
    pub const FILE_NAME: &str = "config.json";
}

/// Default values for CLI
pub mod defaults {
    /// Default site content URL (the server's default site)
    pub const SITE: &str = "";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
