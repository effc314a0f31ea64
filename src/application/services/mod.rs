//! Business logic services for the application layer.

pub mod user_validation_service;

pub use user_validation_service::{UserValidationService, ValidatedUpdate, ValidatedUser};
