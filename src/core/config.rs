//! Invocation configuration.
//!
//! `Params` mirrors the caller-facing contract with its defaults. `Config` is
//! the validated form: the scope is resolved and every cross-field rule has
//! been checked, so the reconciler never sees an ambiguous request.

use std::fmt;

use reqwest::Url;
use tracing::debug;

use crate::core::constants::DEFAULT_API_ENDPOINT;
use crate::core::scope::Scope;
use crate::core::types::{Plaintext, ResourceKind, State, Token, Visibility};
use crate::core::validation::validate_name;
use crate::error::{Error, Result, ValidationError};

/// Raw invocation parameters.
///
/// Defaults: `is_secret = true`, `state = "present"`,
/// `api_ep = "https://api.github.com"`, everything else unset.
#[derive(Clone)]
pub struct Params {
    /// Bearer token used for every request.
    pub pat: Token,
    /// Secret or variable name.
    pub name: String,
    /// Plaintext value. Must be empty for state `absent`.
    pub unencrypted_value: Plaintext,
    pub environment: Option<String>,
    /// `owner/repo`.
    pub repository: Option<String>,
    pub organization: Option<String>,
    /// Base64-encode the value before sealing (secrets) or sending (variables).
    pub is_base64_encoded: bool,
    /// `all`, `private` or `selected`. Organization scope only.
    pub visibility: Option<String>,
    /// Repositories granted access when visibility is `selected`.
    pub selected_repository_ids: Vec<u64>,
    pub is_secret: bool,
    /// `present` or `absent`.
    pub state: String,
    /// REST API base URL, e.g. `https://ghe.example.com/api/v3`.
    pub api_ep: String,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            pat: Token::default(),
            name: String::new(),
            unencrypted_value: Plaintext::default(),
            environment: None,
            repository: None,
            organization: None,
            is_base64_encoded: false,
            visibility: None,
            selected_repository_ids: Vec::new(),
            is_secret: true,
            state: State::Present.to_string(),
            api_ep: DEFAULT_API_ENDPOINT.to_string(),
        }
    }
}

impl fmt::Debug for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Params")
            .field("name", &self.name)
            .field("environment", &self.environment)
            .field("repository", &self.repository)
            .field("organization", &self.organization)
            .field("is_base64_encoded", &self.is_base64_encoded)
            .field("visibility", &self.visibility)
            .field("selected_repository_ids", &self.selected_repository_ids)
            .field("is_secret", &self.is_secret)
            .field("state", &self.state)
            .field("api_ep", &self.api_ep)
            .finish_non_exhaustive()
    }
}

/// What the value should look like once written.
pub struct Payload {
    pub value: Plaintext,
    pub is_base64_encoded: bool,
    /// Always set for organization scope, never for the others.
    pub visibility: Option<Visibility>,
    /// Non-empty only with `Visibility::Selected`.
    pub selected_repository_ids: Vec<u64>,
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Payload")
            .field("value", &"<redacted>")
            .field("is_base64_encoded", &self.is_base64_encoded)
            .field("visibility", &self.visibility)
            .field("selected_repository_ids", &self.selected_repository_ids)
            .finish()
    }
}

/// Desired remote state.
#[derive(Debug)]
pub enum Desired {
    Present(Payload),
    Absent,
}

impl Desired {
    pub fn state(&self) -> State {
        match self {
            Self::Present(_) => State::Present,
            Self::Absent => State::Absent,
        }
    }
}

/// Validated configuration for one reconciliation.
pub struct Config {
    pub token: Token,
    pub name: String,
    pub kind: ResourceKind,
    pub scope: Scope,
    pub desired: Desired,
    pub api_url: Url,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("token", &"<redacted>")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("scope", &self.scope)
            .field("desired", &self.desired)
            .field("api_url", &self.api_url.as_str())
            .finish()
    }
}

/// Parse and check the API base URL.
fn parse_api_url(api_ep: &str) -> Result<Url> {
    let invalid = |reason: String| {
        Error::from(ValidationError::InvalidEndpoint {
            url: api_ep.to_string(),
            reason,
        })
    };

    let url = Url::parse(api_ep.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.cannot_be_a_base() {
        return Err(invalid("not a base URL".to_string()));
    }
    Ok(url)
}

impl Config {
    /// Validate raw parameters.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidScope` if the scope triple is ambiguous, or
    ///   visibility/repository ids are used outside their allowed scope.
    /// - `Error::Validation` for a missing token, bad name, unknown state or
    ///   visibility, missing or unexpected value, or a malformed endpoint.
    pub fn from_params(params: Params) -> Result<Self> {
        let Params {
            pat,
            name,
            unencrypted_value,
            environment,
            repository,
            organization,
            is_base64_encoded,
            visibility,
            selected_repository_ids,
            is_secret,
            state,
            api_ep,
        } = params;
        if pat.trim().is_empty() {
            return Err(ValidationError::MissingToken.into());
        }
        validate_name(&name)?;
        let state: State = state.parse()?;
        let api_url = parse_api_url(&api_ep)?;
        let scope = Scope::resolve(
            repository.as_deref(),
            environment.as_deref(),
            organization.as_deref(),
        )?;
        let visibility = visibility
            .as_deref()
            .filter(|v| !v.is_empty())
            .map(str::parse::<Visibility>)
            .transpose()?;

        let desired = match state {
            State::Absent => {
                if !unencrypted_value.is_empty() {
                    return Err(ValidationError::UnexpectedForAbsent("a value").into());
                }
                if is_base64_encoded {
                    return Err(ValidationError::UnexpectedForAbsent("base64 encoding").into());
                }
                if visibility.is_some() {
                    return Err(ValidationError::UnexpectedForAbsent("visibility").into());
                }
                if !selected_repository_ids.is_empty() {
                    return Err(
                        ValidationError::UnexpectedForAbsent("selected repository ids").into(),
                    );
                }
                Desired::Absent
            }
            State::Present => {
                if unencrypted_value.is_empty() {
                    return Err(ValidationError::MissingValue.into());
                }
                let visibility = resolve_visibility(&scope, visibility, &selected_repository_ids)?;
                Desired::Present(Payload {
                    value: unencrypted_value,
                    is_base64_encoded,
                    visibility,
                    selected_repository_ids,
                })
            }
        };

        let config = Self {
            token: pat,
            name,
            kind: ResourceKind::from_is_secret(is_secret),
            scope,
            desired,
            api_url,
        };
        debug!(
            name = %config.name,
            kind = %config.kind,
            scope = %config.scope,
            state = %config.desired.state(),
            "config validated"
        );
        Ok(config)
    }
}

/// Check visibility against the scope and fill in the organization default.
fn resolve_visibility(
    scope: &Scope,
    visibility: Option<Visibility>,
    selected_repository_ids: &[u64],
) -> Result<Option<Visibility>> {
    if !scope.is_organization() {
        if visibility.is_some() {
            return Err(Error::InvalidScope(format!(
                "visibility only applies to organization scope, not {}",
                scope
            )));
        }
        if !selected_repository_ids.is_empty() {
            return Err(Error::InvalidScope(format!(
                "selected repository ids only apply to organization scope, not {}",
                scope
            )));
        }
        return Ok(None);
    }

    let visibility = visibility.unwrap_or_default();
    match (visibility, selected_repository_ids.is_empty()) {
        (Visibility::Selected, true) => Err(Error::InvalidScope(
            "visibility 'selected' requires at least one selected repository id".to_string(),
        )),
        (Visibility::All | Visibility::Private, false) => Err(Error::InvalidScope(format!(
            "selected repository ids require visibility 'selected', got '{}'",
            visibility
        ))),
        _ => Ok(Some(visibility)),
    }
}
