//! Profile URL value type.

use crate::error::ValidationError;
use serde::Serialize;
use std::fmt;
use url::Url;

const ALLOWED_PREFIXES: [&str; 2] = ["http://", "https://"];

/// An `http` or `https` URL with a host, kept exactly as the user typed it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProfileUrl(String);

impl ProfileUrl {
    /// Validates a profile URL.
    ///
    /// # Rules
    ///
    /// 1. Starts with the literal `http://` or `https://`
    /// 2. Something follows the scheme
    /// 3. No whitespace anywhere
    /// 4. Parses as a URL with a host
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidUrl`] with the first rule broken.
    ///
    /// # Examples
    ///
    /// ```
    /// use user_validation::domain::entities::ProfileUrl;
    ///
    /// assert!(ProfileUrl::parse("https://github.com/johndoe").is_ok());
    /// assert!(ProfileUrl::parse("ftp://x.com").is_err());
    /// assert!(ProfileUrl::parse("http//invalid").is_err());
    /// ```
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let Some(rest) = ALLOWED_PREFIXES
            .iter()
            .find_map(|prefix| value.strip_prefix(prefix))
        else {
            return Err(invalid("must start with http:// or https://"));
        };

        if rest.is_empty() {
            return Err(invalid("missing host"));
        }

        if value.chars().any(char::is_whitespace) {
            return Err(invalid("must not contain whitespace"));
        }

        let parsed = Url::parse(value).map_err(|e| invalid(&e.to_string()))?;
        if parsed.host_str().is_none_or(str::is_empty) {
            return Err(invalid("missing host"));
        }

        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

fn invalid(reason: &str) -> ValidationError {
    ValidationError::InvalidUrl {
        reason: reason.to_string(),
    }
}

impl fmt::Display for ProfileUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
