//! Domain layer containing the validation rules.
//!
//! # Architecture
//!
//! - [`entities`] - Validated value types and their policies
//! - [`repositories`] - Read access to existing nicknames
//! - [`validator`] - Stateless field validator with default policies
//!
//! # Design Principles
//!
//! - No I/O: every check works on values handed in by the caller
//! - Failures are classified [`crate::error::ValidationError`]s, never panics
//! - Request-level orchestration lives in [`crate::application::services`]

pub mod entities;
pub mod repositories;
pub mod validator;
