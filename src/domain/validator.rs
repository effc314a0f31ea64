//! Field validator: stateless checks over raw field values.
//!
//! These functions apply the default policies. Use [`NicknamePolicy`] and
//! [`PasswordPolicy`] directly for configured limits.
//!
//! Every function is pure over its inputs. Calling one twice with the same
//! input and the same nickname snapshot gives the same result.

use crate::domain::entities::{
    Email, Nickname, NicknamePolicy, PasswordPolicy, ProfileUrl, UpdatePayload, update_payload,
};
use crate::domain::repositories::NicknameRepository;
use crate::error::ValidationError;

/// Validates a nickname against the default policy and a snapshot of
/// nicknames already in use.
///
/// # Errors
///
/// [`ValidationError::ShortNickname`], [`ValidationError::NicknameTooLong`],
/// [`ValidationError::InvalidNicknameCharacter`] or
/// [`ValidationError::DuplicateNickname`], checked in that order.
///
/// # Examples
///
/// ```
/// use user_validation::domain::validator::validate_nickname;
///
/// let taken = vec!["john_doe"];
/// assert!(validate_nickname("jane_doe", &taken).is_ok());
/// assert!(validate_nickname("john_doe", &taken).is_err());
/// assert!(validate_nickname("ab", &taken).is_err());
/// ```
pub fn validate_nickname<R>(value: &str, existing_nicknames: &R) -> Result<Nickname, ValidationError>
where
    R: NicknameRepository + ?Sized,
{
    NicknamePolicy::default().validate(value, existing_nicknames)
}

/// # Errors
///
/// [`ValidationError::WeakPassword`] listing every missing requirement.
pub fn validate_password(value: &str) -> Result<(), ValidationError> {
    PasswordPolicy::default().validate(value)
}

/// # Errors
///
/// [`ValidationError::InvalidUrl`] unless `value` is an `http://` or
/// `https://` URL with a host and no whitespace.
pub fn validate_profile_url(value: &str) -> Result<ProfileUrl, ValidationError> {
    ProfileUrl::parse(value)
}

/// # Errors
///
/// [`ValidationError::InvalidEmail`].
pub fn validate_email(value: &str) -> Result<Email, ValidationError> {
    Email::parse(value)
}

/// Pre-check for update requests. Run it before any per-field validation.
///
/// # Errors
///
/// [`ValidationError::EmptyPayload`] if the payload carries no value.
pub fn validate_update_payload(payload: &UpdatePayload) -> Result<(), ValidationError> {
    update_payload::check_not_empty(payload)
}
