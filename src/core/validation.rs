//! Input validation for secret and variable names.

use crate::core::constants::RESERVED_PREFIX;
use crate::error::{Result, ValidationError};

/// Validate a secret or variable name.
///
/// GitHub's naming rules:
/// - Only A-Z, a-z, 0-9, and underscore
/// - Cannot start with a digit
/// - Cannot start with the `GITHUB_` prefix (any case)
/// - Cannot be empty
///
/// # Errors
///
/// Returns `ValidationError` if the name is invalid.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName.into());
    }

    if name.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidName {
            name: name.to_string(),
            reason: "cannot start with a digit".to_string(),
        }
        .into());
    }

    if name.to_ascii_uppercase().starts_with(RESERVED_PREFIX) {
        return Err(ValidationError::InvalidName {
            name: name.to_string(),
            reason: format!("the {} prefix is reserved", RESERVED_PREFIX),
        }
        .into());
    }

    for (i, ch) in name.chars().enumerate() {
        if !ch.is_ascii_alphanumeric() && ch != '_' {
            return Err(ValidationError::InvalidName {
                name: name.to_string(),
                reason: format!(
                    "invalid character '{}' at position {}. Only A-Z, a-z, 0-9, and underscore are allowed",
                    ch,
                    i + 1
                ),
            }
            .into());
        }
    }

    Ok(())
}
