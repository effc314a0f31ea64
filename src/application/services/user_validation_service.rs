//! Request-level validation for user create, update and login.

use std::sync::Arc;

use crate::api::dto::{LoginRequest, UserCreateRequest, UserUpdateRequest};
use crate::config::Config;
use crate::domain::entities::{
    Email, Nickname, NicknamePolicy, PasswordPolicy, ProfileUrl, UpdatePayload, update_payload,
};
use crate::domain::repositories::NicknameRepository;
use crate::error::{FieldError, ValidationError};
use crate::utils::nickname_generator::generate_nickname_within;
use serde::Serialize;
use tracing::{debug, info};
use validator::Validate;

/// Number of generated candidates tried by [`UserValidationService::suggest_nickname`].
const MAX_SUGGESTION_ATTEMPTS: usize = 10;

/// A create request that passed every rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedUser {
    pub email: Email,
    pub nickname: Option<Nickname>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub profile_picture_url: Option<ProfileUrl>,
    pub linkedin_profile_url: Option<ProfileUrl>,
    pub github_profile_url: Option<ProfileUrl>,
}

/// An update request that passed every rule. `None` means "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidatedUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Email>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<Nickname>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<ProfileUrl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_profile_url: Option<ProfileUrl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_profile_url: Option<ProfileUrl>,
}

/// Runs the field validator over whole requests.
///
/// Checks are fail-fast: the first failing field is returned. Nickname
/// uniqueness is checked against the repository's current contents; callers
/// that persist the nickname must still go through the storage-side
/// constraint.
pub struct UserValidationService<R: NicknameRepository + ?Sized> {
    nickname_repository: Arc<R>,
    nickname_policy: NicknamePolicy,
    password_policy: PasswordPolicy,
}

impl<R: NicknameRepository + ?Sized> UserValidationService<R> {
    /// Creates a new validation service.
    pub fn new(
        nickname_repository: Arc<R>,
        nickname_policy: NicknamePolicy,
        password_policy: PasswordPolicy,
    ) -> Self {
        Self {
            nickname_repository,
            nickname_policy,
            password_policy,
        }
    }

    /// Creates a service with policies taken from `config`.
    pub fn from_config(nickname_repository: Arc<R>, config: &Config) -> Self {
        Self::new(
            nickname_repository,
            config.nickname_policy(),
            config.password_policy(),
        )
    }

    pub fn nickname_policy(&self) -> &NicknamePolicy {
        &self.nickname_policy
    }

    pub fn password_policy(&self) -> &PasswordPolicy {
        &self.password_policy
    }

    /// Validates a nickname against the policy and the repository.
    ///
    /// # Errors
    ///
    /// See [`NicknamePolicy::validate`].
    pub fn validate_nickname(&self, value: &str) -> Result<Nickname, FieldError> {
        self.nickname_policy
            .validate(value, &*self.nickname_repository)
            .map_err(|e| rejected("nickname", e))
    }

    /// # Errors
    ///
    /// [`ValidationError::WeakPassword`] tagged with the `password` field.
    pub fn validate_password(&self, value: &str) -> Result<(), FieldError> {
        self.password_policy
            .validate(value)
            .map_err(|e| rejected("password", e))
    }

    /// Validates a create request.
    ///
    /// Order: DTO shape (email syntax, text lengths), nickname, password,
    /// profile URLs.
    ///
    /// # Errors
    ///
    /// Returns the first failing field.
    pub fn validate_create(&self, request: &UserCreateRequest) -> Result<ValidatedUser, FieldError> {
        request.validate().map_err(|e| log_rejection(FieldError::from(e)))?;

        let email = Email::parse(&request.email).map_err(|e| rejected("email", e))?;
        let nickname = request
            .nickname
            .as_deref()
            .map(|n| self.validate_nickname(n))
            .transpose()?;
        self.validate_password(&request.password)?;
        let [profile_picture_url, linkedin_profile_url, github_profile_url] = validate_urls(
            request.profile_picture_url.as_deref(),
            request.linkedin_profile_url.as_deref(),
            request.github_profile_url.as_deref(),
        )?;

        debug!(email = %email, nickname = ?nickname.as_ref().map(Nickname::as_str), "User create request accepted");

        Ok(ValidatedUser {
            email,
            nickname,
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            bio: request.bio.clone(),
            profile_picture_url,
            linkedin_profile_url,
            github_profile_url,
        })
    }

    /// Validates an update request.
    ///
    /// The empty-payload pre-check runs first; no field rule is evaluated for
    /// an empty update.
    ///
    /// # Errors
    ///
    /// [`ValidationError::EmptyPayload`] for an empty update, otherwise the
    /// first failing field.
    pub fn validate_update(&self, request: &UserUpdateRequest) -> Result<ValidatedUpdate, FieldError> {
        update_payload::check_not_empty(&request.to_payload())
            .map_err(|e| log_rejection(FieldError::request(e)))?;

        request.validate().map_err(|e| log_rejection(FieldError::from(e)))?;

        let email = request
            .email
            .as_deref()
            .map(|e| Email::parse(e).map_err(|err| rejected("email", err)))
            .transpose()?;
        let nickname = request
            .nickname
            .as_deref()
            .map(|n| self.validate_nickname(n))
            .transpose()?;
        let [profile_picture_url, linkedin_profile_url, github_profile_url] = validate_urls(
            request.profile_picture_url.as_deref(),
            request.linkedin_profile_url.as_deref(),
            request.github_profile_url.as_deref(),
        )?;

        debug!(fields = request.to_payload().len(), "User update request accepted");

        Ok(ValidatedUpdate {
            email,
            nickname,
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            bio: request.bio.clone(),
            profile_picture_url,
            linkedin_profile_url,
            github_profile_url,
        })
    }

    /// Validates a raw update body.
    ///
    /// Runs the empty-payload pre-check on the map as received, before it is
    /// decoded into a [`UserUpdateRequest`].
    ///
    /// # Errors
    ///
    /// [`ValidationError::EmptyPayload`], [`ValidationError::InvalidField`]
    /// for unknown fields or wrong value types, or any field rule failure.
    pub fn validate_update_payload(&self, payload: &UpdatePayload) -> Result<ValidatedUpdate, FieldError> {
        update_payload::check_not_empty(payload)
            .map_err(|e| log_rejection(FieldError::request(e)))?;

        let request: UserUpdateRequest =
            serde_json::from_value(serde_json::Value::Object(payload.clone())).map_err(|e| {
                log_rejection(FieldError::request(ValidationError::InvalidField {
                    field: "body".to_string(),
                    code: e.to_string(),
                }))
            })?;

        self.validate_update(&request)
    }

    /// Validates a login request. Only presence is checked.
    ///
    /// # Errors
    ///
    /// [`ValidationError::InvalidField`] for a missing email or password.
    pub fn validate_login(&self, request: &LoginRequest) -> Result<(), FieldError> {
        request.validate().map_err(|e| log_rejection(FieldError::from(e)))
    }

    /// Suggests a nickname not present in the repository.
    ///
    /// Candidates are sized to the policy's `max_length`. Returns `None` if
    /// every generated candidate was taken.
    pub fn suggest_nickname(&self) -> Option<Nickname> {
        for _ in 0..MAX_SUGGESTION_ATTEMPTS {
            let candidate = generate_nickname_within(self.nickname_policy.max_length);
            if let Ok(nickname) = self
                .nickname_policy
                .validate(&candidate, &*self.nickname_repository)
            {
                return Some(nickname);
            }
        }

        info!(
            attempts = MAX_SUGGESTION_ATTEMPTS,
            "No free nickname among generated candidates"
        );
        None
    }
}

fn validate_urls(
    profile_picture_url: Option<&str>,
    linkedin_profile_url: Option<&str>,
    github_profile_url: Option<&str>,
) -> Result<[Option<ProfileUrl>; 3], FieldError> {
    let check = |field: &'static str, value: Option<&str>| {
        value
            .map(|v| ProfileUrl::parse(v).map_err(|e| rejected(field, e)))
            .transpose()
    };

    Ok([
        check("profile_picture_url", profile_picture_url)?,
        check("linkedin_profile_url", linkedin_profile_url)?,
        check("github_profile_url", github_profile_url)?,
    ])
}

fn rejected(field: &'static str, source: ValidationError) -> FieldError {
    log_rejection(FieldError::new(field, source))
}

fn log_rejection(err: FieldError) -> FieldError {
    info!(
        code = err.code(),
        field = err.field.as_deref().unwrap_or("-"),
        "Validation rejected input"
    );
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::CaseSensitivity;
    use crate::domain::repositories::MockNicknameRepository;
    use mockall::predicate::{always, eq};
    use serde_json::json;

    fn service(repo: MockNicknameRepository) -> UserValidationService<MockNicknameRepository> {
        UserValidationService::new(
            Arc::new(repo),
            NicknamePolicy::default(),
            PasswordPolicy::default(),
        )
    }

    fn free_repo() -> MockNicknameRepository {
        let mut repo = MockNicknameRepository::new();
        repo.expect_exists().returning(|_, _| false);
        repo
    }

    fn create_request() -> UserCreateRequest {
        UserCreateRequest {
            email: "john.doe@example.com".to_string(),
            password: "Secure*1234".to_string(),
            nickname: Some("john_doe123".to_string()),
            first_name: Some("John".to_string()),
            last_name: Some("Doe".to_string()),
            bio: Some("Experienced software developer".to_string()),
            profile_picture_url: Some("https://example.com/profiles/john.jpg".to_string()),
            linkedin_profile_url: Some("https://linkedin.com/in/johndoe".to_string()),
            github_profile_url: Some("https://github.com/johndoe".to_string()),
        }
    }

    #[test]
    fn test_validate_create_success() {
        let user = service(free_repo())
            .validate_create(&create_request())
            .unwrap();

        assert_eq!(user.email.as_str(), "john.doe@example.com");
        assert_eq!(user.nickname.unwrap().as_str(), "john_doe123");
        assert_eq!(
            user.github_profile_url.unwrap().as_str(),
            "https://github.com/johndoe"
        );
    }

    #[test]
    fn test_validate_create_queries_repository_with_policy_case() {
        let mut repo = MockNicknameRepository::new();
        repo.expect_exists()
            .with(eq("john_doe123"), eq(CaseSensitivity::Sensitive))
            .times(1)
            .returning(|_, _| true);

        let err = service(repo).validate_create(&create_request()).unwrap_err();

        assert_eq!(err.field.as_deref(), Some("nickname"));
        assert_eq!(err.code(), "duplicate_nickname");
        assert_eq!(err.status_code(), 409);
    }

    #[test]
    fn test_validate_create_without_nickname_skips_repository() {
        let mut repo = MockNicknameRepository::new();
        repo.expect_exists().times(0);

        let request = UserCreateRequest {
            nickname: None,
            ..create_request()
        };
        let user = service(repo).validate_create(&request).unwrap();
        assert!(user.nickname.is_none());
    }

    #[test]
    fn test_validate_create_bad_email_comes_first() {
        let mut repo = MockNicknameRepository::new();
        repo.expect_exists().times(0);

        let request = UserCreateRequest {
            email: "john.doe.example.com".to_string(),
            password: "weak".to_string(),
            ..create_request()
        };
        let err = service(repo).validate_create(&request).unwrap_err();

        assert_eq!(err.field.as_deref(), Some("email"));
        assert_eq!(err.source, ValidationError::InvalidEmail);
    }

    #[test]
    fn test_validate_create_weak_password() {
        let request = UserCreateRequest {
            password: "abcdefgh".to_string(),
            ..create_request()
        };
        let err = service(free_repo()).validate_create(&request).unwrap_err();

        assert_eq!(err.field.as_deref(), Some("password"));
        assert_eq!(err.code(), "weak_password");
    }

    #[test]
    fn test_validate_create_names_bad_url_field() {
        let request = UserCreateRequest {
            linkedin_profile_url: Some("ftp://linkedin.com/in/johndoe".to_string()),
            ..create_request()
        };
        let err = service(free_repo()).validate_create(&request).unwrap_err();

        assert_eq!(err.field.as_deref(), Some("linkedin_profile_url"));
        assert_eq!(err.code(), "invalid_url");
    }

    #[test]
    fn test_validate_create_long_last_name() {
        let request = UserCreateRequest {
            last_name: Some("x".repeat(101)),
            ..create_request()
        };
        let err = service(free_repo()).validate_create(&request).unwrap_err();

        assert_eq!(err.field.as_deref(), Some("last_name"));
        assert_eq!(
            err.source,
            ValidationError::InvalidField {
                field: "last_name".to_string(),
                code: "length".to_string()
            }
        );
    }

    #[test]
    fn test_validate_update_empty_runs_no_field_checks() {
        let mut repo = MockNicknameRepository::new();
        repo.expect_exists().times(0);

        let err = service(repo)
            .validate_update(&UserUpdateRequest::default())
            .unwrap_err();

        assert_eq!(err, FieldError::request(ValidationError::EmptyPayload));
    }

    #[test]
    fn test_validate_update_single_field() {
        let request = UserUpdateRequest {
            nickname: Some("abc".to_string()),
            ..Default::default()
        };
        let update = service(free_repo()).validate_update(&request).unwrap();

        assert_eq!(update.nickname.unwrap().as_str(), "abc");
        assert!(update.email.is_none());
    }

    #[test]
    fn test_validate_update_bad_nickname() {
        let mut repo = MockNicknameRepository::new();
        repo.expect_exists().with(always(), always()).times(0);

        let request = UserUpdateRequest {
            nickname: Some("John Doe".to_string()),
            ..Default::default()
        };
        let err = service(repo).validate_update(&request).unwrap_err();
        assert_eq!(err.code(), "invalid_nickname_character");
    }

    #[test]
    fn test_validate_update_payload_rejects_empty_map() {
        let err = service(free_repo())
            .validate_update_payload(&UpdatePayload::new())
            .unwrap_err();
        assert_eq!(err.code(), "empty_payload");
    }

    #[test]
    fn test_validate_update_payload_rejects_unknown_field() {
        let Some(payload) = json!({ "role": "ADMIN" }).as_object().cloned() else {
            panic!("not an object");
        };
        let err = service(free_repo())
            .validate_update_payload(&payload)
            .unwrap_err();

        assert_eq!(err.code(), "invalid_field");
        assert!(err.field.is_none());
    }

    #[test]
    fn test_validate_update_payload_success() {
        let Some(payload) = json!({ "nickname": "abc", "bio": "hello" }).as_object().cloned() else {
            panic!("not an object");
        };
        let update = service(free_repo())
            .validate_update_payload(&payload)
            .unwrap();

        assert_eq!(update.bio.as_deref(), Some("hello"));
    }

    #[test]
    fn test_validate_login() {
        let svc = service(free_repo());
        let ok = LoginRequest {
            email: "john.doe@example.com".to_string(),
            password: "anything".to_string(),
        };
        assert!(svc.validate_login(&ok).is_ok());

        let missing = LoginRequest {
            email: String::new(),
            password: "anything".to_string(),
        };
        let err = svc.validate_login(&missing).unwrap_err();
        assert_eq!(err.field.as_deref(), Some("email"));
    }

    #[test]
    fn test_suggest_nickname_skips_taken() {
        let mut repo = MockNicknameRepository::new();
        let mut calls = 0;
        repo.expect_exists().returning(move |_, _| {
            calls += 1;
            calls < 3
        });

        let nickname = service(repo).suggest_nickname();
        assert!(nickname.is_some());
    }

    #[test]
    fn test_suggest_nickname_under_small_max_length() {
        for max_length in [3, 5, 8, 9] {
            let svc = UserValidationService::new(
                Arc::new(free_repo()),
                NicknamePolicy {
                    max_length,
                    ..Default::default()
                },
                PasswordPolicy::default(),
            );

            let nickname = svc.suggest_nickname().unwrap();
            assert!(nickname.as_str().chars().count() <= max_length, "{nickname}");
        }
    }

    #[test]
    fn test_suggest_nickname_gives_up() {
        let mut repo = MockNicknameRepository::new();
        repo.expect_exists()
            .times(MAX_SUGGESTION_ATTEMPTS)
            .returning(|_, _| true);

        assert!(service(repo).suggest_nickname().is_none());
    }
}
