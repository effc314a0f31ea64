//! Repository trait definitions for the domain layer.
//!
//! The validator never owns the set of existing nicknames. It reads a
//! snapshot through [`NicknameRepository`], implemented for std collections
//! and by `crate::infrastructure::persistence`.

pub mod nickname_repository;

pub use nickname_repository::NicknameRepository;

#[cfg(test)]
pub use nickname_repository::MockNicknameRepository;
