//! Request contracts consumed by the request-handling layer.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request deserialization

pub mod dto;
