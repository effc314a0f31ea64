//! Validation error taxonomy and its structured response body.
//!
//! Every rejection produced by this crate is a [`ValidationError`]. Request
//! layers wrap it in a [`FieldError`] to remember which field failed, and turn
//! that into an [`ErrorBody`] when answering a client.

use serde::Serialize;
use serde_json::{Value, json};
use std::fmt;

/// Character class a password is required to contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharClass::Uppercase => "uppercase letter",
            CharClass::Lowercase => "lowercase letter",
            CharClass::Digit => "digit",
            CharClass::Special => "special character",
        };
        f.write_str(name)
    }
}

/// A classified, non-fatal rejection of an input value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("At least one field must be provided for update")]
    EmptyPayload,

    #[error("Nickname must be at least {min} characters, got {actual}")]
    ShortNickname { min: usize, actual: usize },

    #[error("Nickname must be at most {max} characters, got {actual}")]
    NicknameTooLong { max: usize, actual: usize },

    #[error("Nickname contains a disallowed character {character:?} at position {position}")]
    InvalidNicknameCharacter { character: char, position: usize },

    #[error("Nickname '{nickname}' is already taken")]
    DuplicateNickname { nickname: String },

    #[error("{}", weak_password_message(.too_short, .min_length, .missing))]
    WeakPassword {
        too_short: bool,
        min_length: usize,
        missing: Vec<CharClass>,
    },

    #[error("Invalid URL: {reason}")]
    InvalidUrl { reason: String },

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Invalid value for '{field}': {code}")]
    InvalidField { field: String, code: String },
}

fn weak_password_message(too_short: &bool, min_length: &usize, missing: &[CharClass]) -> String {
    let mut problems = Vec::new();
    if *too_short {
        problems.push(format!("be at least {min_length} characters long"));
    }
    for class in missing {
        problems.push(format!("contain at least one {class}"));
    }
    format!("Password must {}", problems.join(", "))
}

impl ValidationError {
    /// Machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::EmptyPayload => "empty_payload",
            ValidationError::ShortNickname { .. } => "short_nickname",
            ValidationError::NicknameTooLong { .. } => "nickname_too_long",
            ValidationError::InvalidNicknameCharacter { .. } => "invalid_nickname_character",
            ValidationError::DuplicateNickname { .. } => "duplicate_nickname",
            ValidationError::WeakPassword { .. } => "weak_password",
            ValidationError::InvalidUrl { .. } => "invalid_url",
            ValidationError::InvalidEmail => "invalid_email",
            ValidationError::InvalidField { .. } => "invalid_field",
        }
    }

    /// HTTP status a request layer should answer with.
    ///
    /// Duplicates are a conflict with existing state; everything else is a
    /// malformed request.
    pub fn status_code(&self) -> u16 {
        match self {
            ValidationError::DuplicateNickname { .. } => 409,
            _ => 400,
        }
    }

    /// Structured details for the response body.
    pub fn details(&self) -> Value {
        match self {
            ValidationError::EmptyPayload | ValidationError::InvalidEmail => json!({}),
            ValidationError::ShortNickname { min, actual } => {
                json!({ "min_length": min, "provided_length": actual })
            }
            ValidationError::NicknameTooLong { max, actual } => {
                json!({ "max_length": max, "provided_length": actual })
            }
            ValidationError::InvalidNicknameCharacter {
                character,
                position,
            } => json!({ "character": character.to_string(), "position": position }),
            ValidationError::DuplicateNickname { nickname } => json!({ "nickname": nickname }),
            ValidationError::WeakPassword {
                too_short,
                min_length,
                missing,
            } => json!({
                "too_short": too_short,
                "min_length": min_length,
                "missing": missing,
            }),
            ValidationError::InvalidUrl { reason } => json!({ "reason": reason }),
            ValidationError::InvalidField { field, code } => {
                json!({ "field": field, "rule": code })
            }
        }
    }
}

/// A [`ValidationError`] tied to the request field that produced it.
///
/// `field` is `None` for checks on the request as a whole, such as the
/// empty-payload pre-check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Option<String>,
    pub source: ValidationError,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{field}: {}", self.source),
            None => write!(f, "{}", self.source),
        }
    }
}

impl std::error::Error for FieldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

impl FieldError {
    pub fn new(field: impl Into<String>, source: ValidationError) -> Self {
        Self {
            field: Some(field.into()),
            source,
        }
    }

    pub fn request(source: ValidationError) -> Self {
        Self {
            field: None,
            source,
        }
    }

    pub fn code(&self) -> &'static str {
        self.source.code()
    }

    pub fn status_code(&self) -> u16 {
        self.source.status_code()
    }
}

impl From<ValidationError> for FieldError {
    fn from(source: ValidationError) -> Self {
        Self::request(source)
    }
}

/// Maps DTO shape failures onto the taxonomy.
///
/// Reports the alphabetically first failing field so the result does not
/// depend on hash order. An email rule failure becomes
/// [`ValidationError::InvalidEmail`].
impl From<validator::ValidationErrors> for FieldError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let field_errors = errors.field_errors();
        let first = field_errors
            .iter()
            .min_by(|(a, _), (b, _)| a.cmp(b))
            .and_then(|(field, errs)| errs.first().map(|e| (field.to_string(), e.code.to_string())));

        match first {
            Some((field, code)) if code == "email" => Self::new(field, ValidationError::InvalidEmail),
            Some((field, code)) => Self::new(
                field.clone(),
                ValidationError::InvalidField { field, code },
            ),
            None => Self::request(ValidationError::InvalidField {
                field: "body".to_string(),
                code: "invalid".to_string(),
            }),
        }
    }
}

/// Wire shape of a rejected request: `{ "error": { code, message, details } }`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorInfo,
}

#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

impl From<&ValidationError> for ErrorBody {
    fn from(err: &ValidationError) -> Self {
        Self {
            error: ErrorInfo {
                code: err.code(),
                message: err.to_string(),
                details: err.details(),
            },
        }
    }
}

impl From<&FieldError> for ErrorBody {
    fn from(err: &FieldError) -> Self {
        let mut details = err.source.details();
        if let (Some(field), Value::Object(map)) = (&err.field, &mut details) {
            map.insert("field".to_string(), Value::String(field.clone()));
        }

        Self {
            error: ErrorInfo {
                code: err.code(),
                message: err.source.to_string(),
                details,
            },
        }
    }
}
