//! Scope resolution.
//!
//! Maps the (repository, environment, organization) triple to exactly one
//! ownership boundary and builds the REST paths for it.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::core::types::ResourceKind;
use crate::error::{Error, Result};

/// Ownership boundary of a secret or variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Scope {
    Repository {
        owner: String,
        repo: String,
    },
    Environment {
        owner: String,
        repo: String,
        environment: String,
    },
    Organization {
        org: String,
    },
}

/// A REST path kept as raw segments.
///
/// Segments are percent-encoded by the transport when joined onto the base
/// URL, so environment names with spaces or slashes stay one segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiPath {
    segments: Vec<String>,
}

impl ApiPath {
    fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Append one segment.
    pub fn join(&self, segment: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.to_string());
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for ApiPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

/// Treat empty strings the same as unset.
fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Split `owner/repo` into its two parts.
fn split_repository(repository: &str) -> Result<(String, String)> {
    match repository.split_once('/') {
        Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
            Ok((owner.to_string(), repo.to_string()))
        }
        _ => Err(Error::InvalidScope(format!(
            "repository must be in the form owner/repo, got '{}'",
            repository
        ))),
    }
}

impl Scope {
    /// Resolve the scope from the caller's identifiers.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidScope` unless exactly one scope is named:
    /// an organization alone, a repository alone, or a repository with an
    /// environment.
    pub fn resolve(
        repository: Option<&str>,
        environment: Option<&str>,
        organization: Option<&str>,
    ) -> Result<Self> {
        let scope = match (
            present(repository),
            present(environment),
            present(organization),
        ) {
            (None, None, Some(org)) => Self::Organization {
                org: org.to_string(),
            },
            (Some(repository), Some(environment), None) => {
                let (owner, repo) = split_repository(repository)?;
                Self::Environment {
                    owner,
                    repo,
                    environment: environment.to_string(),
                }
            }
            (Some(repository), None, None) => {
                let (owner, repo) = split_repository(repository)?;
                Self::Repository { owner, repo }
            }
            (None, None, None) => {
                return Err(Error::InvalidScope(
                    "one of repository or organization is required".to_string(),
                ))
            }
            (None, Some(_), None) => {
                return Err(Error::InvalidScope(
                    "environment requires a repository".to_string(),
                ))
            }
            (_, Some(_), Some(_)) => {
                return Err(Error::InvalidScope(
                    "organization and environment are mutually exclusive".to_string(),
                ))
            }
            (Some(_), None, Some(_)) => {
                return Err(Error::InvalidScope(
                    "repository and organization are mutually exclusive".to_string(),
                ))
            }
        };

        debug!(scope = %scope, "resolved scope");
        Ok(scope)
    }

    pub fn is_organization(&self) -> bool {
        matches!(self, Self::Organization { .. })
    }

    /// Collection path for a resource family, e.g. `/repos/o/r/actions/secrets`.
    pub fn collection(&self, kind: ResourceKind) -> ApiPath {
        match self {
            Self::Repository { owner, repo } => {
                ApiPath::new(["repos", owner.as_str(), repo.as_str(), "actions", kind.family()])
            }
            Self::Environment {
                owner,
                repo,
                environment,
            } => ApiPath::new([
                "repos",
                owner.as_str(),
                repo.as_str(),
                "environments",
                environment.as_str(),
                kind.family(),
            ]),
            Self::Organization { org } => {
                ApiPath::new(["orgs", org.as_str(), "actions", kind.family()])
            }
        }
    }

    /// Path of one named resource.
    pub fn resource(&self, kind: ResourceKind, name: &str) -> ApiPath {
        self.collection(kind).join(name)
    }

    /// Path of the scope's secrets public key.
    pub fn public_key(&self) -> ApiPath {
        self.collection(ResourceKind::Secret).join("public-key")
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Repository { owner, repo } => write!(f, "repository {}/{}", owner, repo),
            Self::Environment {
                owner,
                repo,
                environment,
            } => write!(f, "environment {} of {}/{}", environment, owner, repo),
            Self::Organization { org } => write!(f, "organization {}", org),
        }
    }
}
