//! Nickname storage implementations.
//!
//! # Repositories
//!
//! - [`InMemoryNicknameRepository`] - lock-protected set with an atomic
//!   uniqueness constraint

pub mod in_memory_nickname_repository;

pub use in_memory_nickname_repository::InMemoryNicknameRepository;
