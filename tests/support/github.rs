//! In-memory GitHub for reconciler tests.
//!
//! Keeps secrets and variables keyed by resource path, answers with the same
//! status codes as the REST API, and records every request.

use std::cell::RefCell;
use std::collections::BTreeMap;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use crypto_box::aead::OsRng;
use crypto_box::SecretKey;
use serde_json::{json, Value};

use ghvar::core::cipher::{Cipher, SealedBox};
use ghvar::core::github::{ApiRequest, ApiResponse, GitHubClient, Method, Transport};
use ghvar::error::{Error, Result};
use ghvar::{Config, Outcome, Params, Reconciler};

/// Key id the fake hands out.
pub const KEY_ID: &str = "568250167242549743";

pub struct FakeGitHub {
    secret_key: SecretKey,
    resources: RefCell<BTreeMap<String, Value>>,
    requests: RefCell<Vec<ApiRequest>>,
    overrides: RefCell<Vec<(Method, String, Result<ApiResponse>)>>,
}

impl FakeGitHub {
    pub fn new() -> Self {
        Self {
            secret_key: SecretKey::generate(&mut OsRng),
            resources: RefCell::new(BTreeMap::new()),
            requests: RefCell::new(Vec::new()),
            overrides: RefCell::new(Vec::new()),
        }
    }

    /// Seed an existing resource.
    pub fn with_resource(self, path: &str, body: Value) -> Self {
        self.resources.borrow_mut().insert(path.to_string(), body);
        self
    }

    /// Answer `method path` with a fixed response (consumed once).
    pub fn respond(self, method: Method, path: &str, response: Result<ApiResponse>) -> Self {
        self.overrides
            .borrow_mut()
            .push((method, path.to_string(), response));
        self
    }

    /// Run one reconciliation against this fake.
    pub fn reconcile(&self, params: Params) -> Result<Outcome> {
        let config = Config::from_params(params)?;
        Reconciler::new(GitHubClient::new(self)).reconcile(&config)
    }

    /// Recorded `(METHOD, path)` pairs.
    pub fn calls(&self) -> Vec<(Method, String)> {
        self.requests
            .borrow()
            .iter()
            .map(|r| (r.method, r.path.to_string()))
            .collect()
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.requests.borrow_mut().clear();
    }

    pub fn get(&self, path: &str) -> Option<Value> {
        self.resources.borrow().get(path).cloned()
    }

    pub fn len(&self) -> usize {
        self.resources.borrow().len()
    }

    /// Decrypt a stored secret the way GitHub would.
    pub fn unseal(&self, path: &str) -> String {
        let stored = self.get(path).expect("secret not stored");
        assert_eq!(stored["key_id"], KEY_ID);
        let encrypted = stored["encrypted_value"]
            .as_str()
            .expect("encrypted_value missing");
        let plaintext = SealedBox
            .decrypt(encrypted, &self.secret_key)
            .expect("unseal failed");
        String::from_utf8(plaintext).expect("plaintext not utf8")
    }

    fn take_override(&self, method: Method, path: &str) -> Option<Result<ApiResponse>> {
        let mut overrides = self.overrides.borrow_mut();
        let index = overrides
            .iter()
            .position(|(m, p, _)| *m == method && p == path)?;
        Some(overrides.remove(index).2)
    }

    fn handle(&self, request: &ApiRequest) -> ApiResponse {
        let path = request.path.to_string();
        let mut resources = self.resources.borrow_mut();
        let body = request.body.clone().unwrap_or(Value::Null);

        match request.method {
            Method::Get if path.ends_with("/secrets/public-key") => ApiResponse::new(
                200,
                json!({
                    "key_id": KEY_ID,
                    "key": STANDARD.encode(self.secret_key.public_key().as_bytes()),
                })
                .to_string(),
            ),
            Method::Get => match resources.get(&path) {
                Some(value) => ApiResponse::new(200, value.to_string()),
                None => ApiResponse::new(404, r#"{"message":"Not Found"}"#),
            },
            Method::Put => match resources.insert(path, body) {
                Some(_) => ApiResponse::new(204, ""),
                None => ApiResponse::new(201, "{}"),
            },
            Method::Post => {
                let name = body["name"].as_str().unwrap_or_default().to_string();
                let path = format!("{}/{}", path, name);
                if resources.contains_key(&path) {
                    return ApiResponse::new(409, r#"{"message":"Already exists"}"#);
                }
                resources.insert(path, body);
                ApiResponse::new(201, "{}")
            }
            Method::Patch => match resources.get_mut(&path) {
                Some(existing) => {
                    *existing = body;
                    ApiResponse::new(204, "")
                }
                None => ApiResponse::new(404, r#"{"message":"Not Found"}"#),
            },
            Method::Delete => match resources.remove(&path) {
                Some(_) => ApiResponse::new(204, ""),
                None => ApiResponse::new(404, r#"{"message":"Not Found"}"#),
            },
        }
    }
}

impl Transport for FakeGitHub {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse> {
        self.requests.borrow_mut().push(request.clone());
        if let Some(response) = self.take_override(request.method, &request.path.to_string()) {
            return response;
        }
        Ok(self.handle(request))
    }
}

/// Shorthand for a transport failure.
pub fn connection_refused() -> Result<ApiResponse> {
    Err(Error::Transport("connection refused".to_string()))
}
