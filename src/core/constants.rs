//! Constants used throughout ghvar.
//!
//! Centralizes API endpoints, headers and environment variable names.

/// Default GitHub REST API base URL.
pub const DEFAULT_API_ENDPOINT: &str = "https://api.github.com";

/// Media type GitHub recommends for REST requests.
pub const ACCEPT: &str = "application/vnd.github+json";

/// REST API version header name (lowercase, as HTTP/2 requires).
pub const API_VERSION_HEADER: &str = "x-github-api-version";

/// REST API version this client speaks.
pub const API_VERSION: &str = "2022-11-28";

/// User agent sent on every request (GitHub rejects requests without one).
pub const USER_AGENT: &str = concat!("ghvar/", env!("CARGO_PKG_VERSION"));

/// Environment variable holding the personal access token.
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Environment variable overriding the API base URL (GitHub Enterprise).
pub const API_URL_ENV: &str = "GITHUB_API_URL";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "GHVAR_LOG";

/// Reserved prefix GitHub refuses for secret and variable names.
pub const RESERVED_PREFIX: &str = "GITHUB_";
