//! Raw update payload and its emptiness pre-check.

use crate::error::ValidationError;
use serde_json::{Map, Value};

/// Field name to new value, as received in an update request body.
pub type UpdatePayload = Map<String, Value>;

/// Returns true if `value` counts as a provided field.
///
/// `null` and the empty string mean "nothing sent" for the purpose of the
/// pre-check.
pub fn is_provided(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

/// Rejects an update that carries no field value.
///
/// Must run before any per-field validation.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyPayload`] if no entry [`is_provided`].
pub fn check_not_empty(payload: &UpdatePayload) -> Result<(), ValidationError> {
    if payload.values().any(is_provided) {
        Ok(())
    } else {
        Err(ValidationError::EmptyPayload)
    }
}
