//! Application layer services.
//!
//! Services orchestrate the field validator over whole requests. They consume
//! repository traits and give the request-handling layer one call per request
//! kind.
//!
//! # Available Services
//!
//! - [`services::user_validation_service::UserValidationService`] - User create, update and login validation

pub mod services;
