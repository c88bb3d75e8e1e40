//! Typed GitHub Actions secrets/variables API.

use serde::Serialize;
use tracing::debug;

use super::transport::{ApiRequest, ApiResponse, Method, Transport};
use crate::core::cipher::{self, PublicKey, SealedSecret};
use crate::core::scope::Scope;
use crate::core::types::{ResourceKind, Visibility};
use crate::error::{Error, Result};

/// Body of `PUT .../secrets/{name}`.
#[derive(Debug, Serialize)]
pub struct SecretBody {
    #[serde(flatten)]
    pub sealed: SealedSecret,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_repository_ids: Option<Vec<u64>>,
}

/// Body of `POST .../variables` and `PATCH .../variables/{name}`.
#[derive(Serialize)]
pub struct VariableBody<'a> {
    pub name: &'a str,
    pub value: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_repository_ids: Option<Vec<u64>>,
}

/// GitHub client over any transport.
pub struct GitHubClient<T> {
    transport: T,
}

/// Map a non-2xx response to `Error::Api`.
fn expect_success(response: ApiResponse) -> Result<ApiResponse> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(Error::api(response.status, response.body))
    }
}

impl<T: Transport> GitHubClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch the scope's secrets public key.
    ///
    /// # Errors
    ///
    /// Returns `Error::KeyFetch` if the request fails, GitHub answers with a
    /// non-2xx status, or the payload isn't a usable key.
    pub fn public_key(&self, scope: &Scope) -> Result<PublicKey> {
        let request = ApiRequest::new(Method::Get, scope.public_key());
        let response = self
            .transport
            .send(&request)
            .map_err(|e| Error::KeyFetch(e.to_string()))?;

        if !response.is_success() {
            return Err(Error::KeyFetch(format!(
                "{} returned {}: {}",
                request.path, response.status, response.body
            )));
        }

        let key: PublicKey = serde_json::from_str(&response.body)
            .map_err(|e| Error::KeyFetch(format!("malformed public key payload: {}", e)))?;
        cipher::parse_recipient(&key.key)
            .map_err(|e| Error::KeyFetch(format!("malformed public key: {}", e)))?;

        debug!(key_id = %key.key_id, "fetched public key");
        Ok(key)
    }

    /// Check whether a named secret or variable exists.
    ///
    /// # Errors
    ///
    /// Returns `Error::Api` for any status other than 2xx or 404.
    pub fn exists(&self, scope: &Scope, kind: ResourceKind, name: &str) -> Result<bool> {
        let request = ApiRequest::new(Method::Get, scope.resource(kind, name));
        let response = self.transport.send(&request)?;

        if response.is_not_found() {
            debug!(%kind, name, "not found");
            return Ok(false);
        }
        expect_success(response)?;
        debug!(%kind, name, "exists");
        Ok(true)
    }

    /// Create or replace a secret.
    pub fn put_secret(&self, scope: &Scope, name: &str, body: &SecretBody) -> Result<()> {
        let request = ApiRequest::new(Method::Put, scope.resource(ResourceKind::Secret, name))
            .with_body(serde_json::to_value(body)?);
        expect_success(self.transport.send(&request)?)?;
        Ok(())
    }

    /// Create a variable that doesn't exist yet.
    pub fn create_variable(&self, scope: &Scope, body: &VariableBody<'_>) -> Result<()> {
        let request = ApiRequest::new(Method::Post, scope.collection(ResourceKind::Variable))
            .with_body(serde_json::to_value(body)?);
        expect_success(self.transport.send(&request)?)?;
        Ok(())
    }

    /// Update an existing variable.
    pub fn update_variable(&self, scope: &Scope, body: &VariableBody<'_>) -> Result<()> {
        let request = ApiRequest::new(
            Method::Patch,
            scope.resource(ResourceKind::Variable, body.name),
        )
        .with_body(serde_json::to_value(body)?);
        expect_success(self.transport.send(&request)?)?;
        Ok(())
    }

    /// Delete a secret or variable.
    pub fn delete(&self, scope: &Scope, kind: ResourceKind, name: &str) -> Result<()> {
        let request = ApiRequest::new(Method::Delete, scope.resource(kind, name));
        expect_success(self.transport.send(&request)?)?;
        Ok(())
    }
}
