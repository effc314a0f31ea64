//! DTOs for user creation and profile updates.

use crate::domain::entities::UpdatePayload;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

/// Request body for creating a user.
///
/// `validate()` covers shape only: email syntax and text lengths. Nickname,
/// password and URL rules are applied by
/// [`crate::application::services::UserValidationService`].
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
pub struct UserCreateRequest {
    #[validate(email)]
    pub email: String,

    pub password: String,

    pub nickname: Option<String>,

    #[validate(length(max = 100))]
    pub first_name: Option<String>,

    #[validate(length(max = 100))]
    pub last_name: Option<String>,

    #[validate(length(max = 500))]
    pub bio: Option<String>,

    pub profile_picture_url: Option<String>,
    pub linkedin_profile_url: Option<String>,
    pub github_profile_url: Option<String>,
}

/// Request body for `PATCH`-style user updates.
///
/// All fields are optional; only provided fields are changed. A request with
/// no field set is rejected before any field is looked at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UserUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email)]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 100))]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 100))]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 500))]
    pub bio: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_profile_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_profile_url: Option<String>,
}

impl UserUpdateRequest {
    /// The request as a raw field map, omitting unset fields.
    pub fn to_payload(&self) -> UpdatePayload {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => UpdatePayload::new(),
        }
    }
}
