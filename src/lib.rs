//! # User Validation
//!
//! Validation core for user account fields: nickname, password, profile URL
//! and update payloads.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Value types, policies, the stateless field validator
//!   and the nickname repository trait
//! - **Application Layer** ([`application`]) - Request-level orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - Nickname storage with a uniqueness constraint
//! - **API Layer** ([`api`]) - Request DTOs
//!
//! ## Quick Start
//!
//! ```
//! use user_validation::domain::validator::{validate_nickname, validate_password};
//!
//! let existing = vec!["john_doe".to_string()];
//! assert!(validate_nickname("jane_doe", &existing).is_ok());
//! assert!(validate_password("Abcdef1!").is_ok());
//! ```
//!
//! ## Configuration
//!
//! Limits are loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod utils;

pub use error::{ErrorBody, FieldError, ValidationError};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::api::dto::{LoginRequest, UserCreateRequest, UserUpdateRequest};
    pub use crate::application::services::{UserValidationService, ValidatedUpdate, ValidatedUser};
    pub use crate::domain::entities::{
        CaseSensitivity, Email, Nickname, NicknamePolicy, PasswordPolicy, ProfileUrl,
        UpdatePayload,
    };
    pub use crate::domain::repositories::NicknameRepository;
    pub use crate::domain::validator::{
        validate_email, validate_nickname, validate_password, validate_profile_url,
        validate_update_payload,
    };
    pub use crate::error::{CharClass, ErrorBody, FieldError, ValidationError};
    pub use crate::infrastructure::persistence::InMemoryNicknameRepository;
}
