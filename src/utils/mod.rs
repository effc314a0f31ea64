//! Utility functions.
//!
//! - [`nickname_generator`] - Random nickname suggestions

pub mod nickname_generator;
