//! ghvar - Declarative GitHub Actions secrets and variables.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── apply         # apply/delete commands
//! │   ├── completions   # Shell completions
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── config        # Params -> validated Config
//!     ├── scope         # repository/environment/organization resolution
//!     ├── cipher/       # Sealed box encryption of secret values
//!     ├── github/       # Transport trait, HTTP transport, typed client
//!     └── reconcile     # Existence check + minimal mutation
//! ```
//!
//! # Example
//!
//! ```no_run
//! use ghvar::{apply, Params};
//!
//! let outcome = apply(Params {
//!     pat: std::env::var("GITHUB_TOKEN").unwrap_or_default().into(),
//!     name: "API_KEY".to_string(),
//!     unencrypted_value: "s3cr3t".to_string().into(),
//!     repository: Some("octo/app".to_string()),
//!     ..Params::default()
//! })?;
//! println!("{}", outcome.action);
//! # Ok::<(), ghvar::error::Error>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::config::{Config, Desired, Params};
pub use crate::core::reconcile::{Action, Outcome, Reconciler};
pub use crate::core::scope::Scope;
pub use crate::core::types::{ResourceKind, State, Visibility};

use crate::core::github::{GitHubClient, HttpTransport};
use crate::error::Result;

/// Reconcile a validated config against the GitHub REST API.
///
/// # Errors
///
/// Returns the first error encountered; see [`error::Error`].
pub fn reconcile(config: &Config) -> Result<Outcome> {
    let transport = HttpTransport::new(config.api_url.clone(), &config.token)?;
    Reconciler::new(GitHubClient::new(transport)).reconcile(config)
}

/// Validate raw parameters and reconcile in one call.
///
/// # Errors
///
/// Validation errors are returned before any request is made.
pub fn apply(params: Params) -> Result<Outcome> {
    let config = Config::from_params(params)?;
    reconcile(&config)
}
