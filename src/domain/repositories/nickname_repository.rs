//! Read access to existing nicknames.

use crate::domain::entities::CaseSensitivity;
use std::collections::{BTreeSet, HashSet};
use std::hash::BuildHasher;

/// Snapshot of nicknames already in use.
///
/// The validator only reads through this trait. The authoritative uniqueness
/// constraint lives in the storage behind it (see
/// [`crate::infrastructure::persistence::InMemoryNicknameRepository::reserve`]).
///
/// # Implementations
///
/// - `HashSet<String>`, `BTreeSet<String>`, `Vec<S>`, `[S]` for plain snapshots
/// - [`crate::infrastructure::persistence::InMemoryNicknameRepository`]
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait NicknameRepository: Send + Sync {
    /// Returns true if `nickname` is taken under the given case rule.
    fn exists(&self, nickname: &str, case: CaseSensitivity) -> bool;
}

impl<S: BuildHasher + Send + Sync> NicknameRepository for HashSet<String, S> {
    fn exists(&self, nickname: &str, case: CaseSensitivity) -> bool {
        match case {
            CaseSensitivity::Sensitive => self.contains(nickname),
            CaseSensitivity::Insensitive => self.iter().any(|n| case.matches(n, nickname)),
        }
    }
}

impl NicknameRepository for BTreeSet<String> {
    fn exists(&self, nickname: &str, case: CaseSensitivity) -> bool {
        match case {
            CaseSensitivity::Sensitive => self.contains(nickname),
            CaseSensitivity::Insensitive => self.iter().any(|n| case.matches(n, nickname)),
        }
    }
}

impl<T: AsRef<str> + Send + Sync> NicknameRepository for [T] {
    fn exists(&self, nickname: &str, case: CaseSensitivity) -> bool {
        self.iter().any(|n| case.matches(n.as_ref(), nickname))
    }
}

impl<T: AsRef<str> + Send + Sync> NicknameRepository for Vec<T> {
    fn exists(&self, nickname: &str, case: CaseSensitivity) -> bool {
        self.as_slice().exists(nickname, case)
    }
}
