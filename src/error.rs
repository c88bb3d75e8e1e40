//! Error types for ghvar.
//!
//! Every failure is one tagged kind so callers can match on it. Nothing is
//! retried or recovered locally.

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    /// The repository/environment/organization combination does not name
    /// exactly one scope, or a scope-specific option was misused.
    #[error("invalid scope: {0}")]
    InvalidScope(String),

    /// The scope's public key could not be fetched or parsed.
    #[error("failed to fetch public key: {0}")]
    KeyFetch(String),

    /// Sealing the secret value failed.
    #[error("encryption failed: {0}")]
    Encryption(String),

    /// GitHub answered with an unexpected status.
    #[error("GitHub API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// The request never got a response.
    #[error("request failed: {0}")]
    Transport(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Malformed caller input unrelated to scope resolution.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("missing token: pass --token or set GITHUB_TOKEN")]
    MissingToken,

    #[error("name cannot be empty")]
    EmptyName,

    #[error("invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("invalid state '{0}': expected 'present' or 'absent'")]
    InvalidState(String),

    #[error("invalid visibility '{0}': expected 'all', 'private' or 'selected'")]
    InvalidVisibility(String),

    #[error("a value is required for state present")]
    MissingValue,

    #[error("{0} is not allowed for state absent")]
    UnexpectedForAbsent(&'static str),

    #[error("invalid API endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },
}

impl Error {
    /// Build an `Api` error from a status code and raw body.
    pub fn api(status: u16, body: impl Into<String>) -> Self {
        Self::Api {
            status,
            body: body.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
