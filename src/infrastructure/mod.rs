//! Infrastructure layer.
//!
//! Implements the repository interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - Nickname storage with a uniqueness constraint

pub mod persistence;
