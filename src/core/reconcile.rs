//! Reconciliation.
//!
//! Converges one remote secret or variable onto the desired state with at
//! most one mutating call. The existence check and the mutation are separate
//! requests, so a concurrent writer can slip in between; the next run
//! converges again.

use std::fmt;

use serde::Serialize;
use tracing::{debug, info};

use crate::core::cipher::{self, SealedSecret};
use crate::core::config::{Config, Desired, Payload};
use crate::core::github::{GitHubClient, SecretBody, Transport, VariableBody};
use crate::core::scope::Scope;
use crate::core::types::{ResourceKind, State};
use crate::error::Result;

/// The single change a run makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Created,
    Updated,
    Deleted,
    Unchanged,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => write!(f, "created"),
            Self::Updated => write!(f, "updated"),
            Self::Deleted => write!(f, "deleted"),
            Self::Unchanged => write!(f, "unchanged"),
        }
    }
}

/// Decide the action from desired state and remote existence.
pub fn plan(state: State, exists: bool) -> Action {
    match (state, exists) {
        (State::Present, false) => Action::Created,
        (State::Present, true) => Action::Updated,
        (State::Absent, true) => Action::Deleted,
        (State::Absent, false) => Action::Unchanged,
    }
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub action: Action,
    pub kind: ResourceKind,
    pub scope: Scope,
    pub name: String,
}

/// Drives the check-then-mutate sequence against a GitHub client.
pub struct Reconciler<T> {
    client: GitHubClient<T>,
}

impl<T: Transport> Reconciler<T> {
    pub fn new(client: GitHubClient<T>) -> Self {
        Self { client }
    }

    /// Converge the remote resource onto `config`.
    ///
    /// Request order: public key (present secrets only), existence check,
    /// then at most one create/update/delete.
    ///
    /// # Errors
    ///
    /// Propagates `KeyFetch`, `Encryption`, `Api` and `Transport` errors as
    /// soon as they happen. Nothing is retried.
    pub fn reconcile(&self, config: &Config) -> Result<Outcome> {
        let Config {
            name, kind, scope, ..
        } = config;

        let sealed = match (&config.desired, kind) {
            (Desired::Present(payload), ResourceKind::Secret) => {
                let key = self.client.public_key(scope)?;
                Some(cipher::seal_secret(
                    &payload.value,
                    payload.is_base64_encoded,
                    &key,
                )?)
            }
            _ => None,
        };

        let exists = self.client.exists(scope, *kind, name)?;
        let action = plan(config.desired.state(), exists);
        debug!(%kind, name = %name, exists, %action, "planned");

        match (&config.desired, action) {
            (Desired::Present(payload), Action::Created | Action::Updated) => {
                self.write(scope, name, payload, sealed, exists)?
            }
            (_, Action::Deleted) => self.client.delete(scope, *kind, name)?,
            _ => {}
        }

        info!(%kind, name = %name, scope = %scope, %action, "reconciled");
        Ok(Outcome {
            action,
            kind: *kind,
            scope: scope.clone(),
            name: name.clone(),
        })
    }

    fn write(
        &self,
        scope: &Scope,
        name: &str,
        payload: &Payload,
        sealed: Option<SealedSecret>,
        exists: bool,
    ) -> Result<()> {
        let selected_repository_ids = (!payload.selected_repository_ids.is_empty())
            .then(|| payload.selected_repository_ids.clone());

        match sealed {
            // PUT upserts secrets, so create and update share a request
            Some(sealed) => {
                let body = SecretBody {
                    sealed,
                    visibility: payload.visibility,
                    selected_repository_ids,
                };
                self.client.put_secret(scope, name, &body)
            }
            None => {
                let value = cipher::encode_value(&payload.value, payload.is_base64_encoded);
                let body = VariableBody {
                    name,
                    value: &value,
                    visibility: payload.visibility,
                    selected_repository_ids,
                };
                if exists {
                    self.client.update_variable(scope, &body)
                } else {
                    self.client.create_variable(scope, &body)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_table() {
        assert_eq!(plan(State::Present, false), Action::Created);
        assert_eq!(plan(State::Present, true), Action::Updated);
        assert_eq!(plan(State::Absent, true), Action::Deleted);
        assert_eq!(plan(State::Absent, false), Action::Unchanged);
    }

    #[test]
    fn test_action_display() {
        assert_eq!(Action::Created.to_string(), "created");
        assert_eq!(Action::Unchanged.to_string(), "unchanged");
        assert_eq!(
            serde_json::to_string(&Action::Deleted).unwrap(),
            "\"deleted\""
        );
    }
}
