#![allow(dead_code)]

use serde_json::{Value, json};
use std::sync::Arc;
use user_validation::api::dto::UserCreateRequest;
use user_validation::application::services::UserValidationService;
use user_validation::config::Config;
use user_validation::domain::entities::{CaseSensitivity, UpdatePayload};
use user_validation::infrastructure::persistence::InMemoryNicknameRepository;

pub fn create_test_repository(nicknames: &[&str]) -> Arc<InMemoryNicknameRepository> {
    Arc::new(InMemoryNicknameRepository::with_nicknames(
        CaseSensitivity::Sensitive,
        nicknames.iter().copied(),
    ))
}

pub fn create_test_service(
    repository: Arc<InMemoryNicknameRepository>,
) -> UserValidationService<InMemoryNicknameRepository> {
    UserValidationService::from_config(repository, &Config::default())
}

pub fn payload(value: Value) -> UpdatePayload {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

pub fn user_create_request() -> UserCreateRequest {
    serde_json::from_value(json!({
        "email": "john.doe@example.com",
        "password": "Secure*1234",
        "nickname": "john_doe123",
        "first_name": "John",
        "last_name": "Doe",
        "bio": "Experienced software developer specializing in web applications.",
        "profile_picture_url": "https://example.com/profiles/john.jpg",
        "linkedin_profile_url": "https://linkedin.com/in/johndoe",
        "github_profile_url": "https://github.com/johndoe"
    }))
    .unwrap()
}
