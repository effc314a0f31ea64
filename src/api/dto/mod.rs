//! Data Transfer Objects for user requests.
//!
//! All DTOs use Serde for JSON deserialization and validator for shape
//! checks. Domain rules run afterwards in the application layer.

pub mod login;
pub mod user;

pub use login::LoginRequest;
pub use user::{UserCreateRequest, UserUpdateRequest};
