//! GitHub REST API access.
//!
//! - `transport`: raw request/response seam plus the blocking HTTP client
//! - `client`: typed secrets/variables operations and their status contract

mod client;
mod transport;

pub use client::{GitHubClient, SecretBody, VariableBody};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, Transport};
