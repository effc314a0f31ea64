//! Email address value type.

use crate::error::ValidationError;
use serde::Serialize;
use std::fmt;
use validator::ValidateEmail;

/// A syntactically valid email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidEmail`] if `value` is not an address
    /// under the `validator` crate's HTML5 email rule.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        if !value.validate_email() {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
