//! Small domain enums shared by the resolver, cipher and reconciler.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, ValidationError};

/// Personal access token, wiped from memory on drop.
pub type Token = zeroize::Zeroizing<String>;

/// Plaintext value, wiped from memory on drop.
pub type Plaintext = zeroize::Zeroizing<String>;

/// Which family of Actions configuration a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Secret,
    Variable,
}

impl ResourceKind {
    /// Select the kind from the `is_secret` flag.
    pub fn from_is_secret(is_secret: bool) -> Self {
        if is_secret {
            Self::Secret
        } else {
            Self::Variable
        }
    }

    /// Path segment GitHub uses for this family.
    pub fn family(&self) -> &'static str {
        match self {
            Self::Secret => "secrets",
            Self::Variable => "variables",
        }
    }

    pub fn is_secret(&self) -> bool {
        matches!(self, Self::Secret)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Secret => write!(f, "secret"),
            Self::Variable => write!(f, "variable"),
        }
    }
}

/// Desired remote state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum State {
    #[default]
    Present,
    Absent,
}

impl FromStr for State {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "present" => Ok(Self::Present),
            "absent" => Ok(Self::Absent),
            other => Err(ValidationError::InvalidState(other.to_string()).into()),
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present => write!(f, "present"),
            Self::Absent => write!(f, "absent"),
        }
    }
}

/// Which repositories of an organization can read a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    All,
    Private,
    Selected,
}

impl FromStr for Visibility {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "private" => Ok(Self::Private),
            "selected" => Ok(Self::Selected),
            other => Err(ValidationError::InvalidVisibility(other.to_string()).into()),
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Private => write!(f, "private"),
            Self::Selected => write!(f, "selected"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_flag() {
        assert_eq!(ResourceKind::from_is_secret(true), ResourceKind::Secret);
        assert_eq!(ResourceKind::from_is_secret(false), ResourceKind::Variable);
        assert_eq!(ResourceKind::Secret.family(), "secrets");
        assert_eq!(ResourceKind::Variable.family(), "variables");
    }

    #[test]
    fn test_state_parse() {
        assert_eq!("present".parse::<State>().unwrap(), State::Present);
        assert_eq!("absent".parse::<State>().unwrap(), State::Absent);
        assert!("Present".parse::<State>().is_err());
        assert!("".parse::<State>().is_err());
    }

    #[test]
    fn test_visibility_parse() {
        assert_eq!("all".parse::<Visibility>().unwrap(), Visibility::All);
        assert_eq!("private".parse::<Visibility>().unwrap(), Visibility::Private);
        assert_eq!(
            "selected".parse::<Visibility>().unwrap(),
            Visibility::Selected
        );
        assert!("public".parse::<Visibility>().is_err());
    }

    #[test]
    fn test_visibility_serializes_lowercase() {
        let json = serde_json::to_string(&Visibility::Selected).unwrap();
        assert_eq!(json, "\"selected\"");
    }
}
