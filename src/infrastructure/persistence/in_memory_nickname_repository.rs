//! In-memory nickname store with an atomic uniqueness constraint.

use crate::domain::entities::{CaseSensitivity, Nickname};
use crate::domain::repositories::NicknameRepository;
use crate::error::ValidationError;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{PoisonError, RwLock};
use tracing::debug;

/// Nickname store guarded by an `RwLock`.
///
/// Reads go through [`NicknameRepository::exists`]. Writes go through
/// [`Self::reserve`], which checks and inserts under a single write lock, so
/// two callers racing for the same nickname cannot both win even if both
/// passed the optimistic validator check.
///
/// Entries are keyed by the store's own [`CaseSensitivity`]: with
/// `Insensitive`, `Alice` and `alice` occupy the same slot.
#[derive(Debug, Default)]
pub struct InMemoryNicknameRepository {
    case: CaseSensitivity,
    /// Folded key to nickname as originally reserved.
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryNicknameRepository {
    pub fn new(case: CaseSensitivity) -> Self {
        Self {
            case,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Builds a store pre-filled with `nicknames`. Later duplicates of an
    /// already-present key are ignored.
    pub fn with_nicknames<I, S>(case: CaseSensitivity, nicknames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries = HashMap::new();
        for nickname in nicknames {
            let nickname = nickname.into();
            entries.entry(case.fold(&nickname)).or_insert(nickname);
        }

        Self {
            case,
            entries: RwLock::new(entries),
        }
    }

    /// Claims `nickname`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::DuplicateNickname`] if the slot is already
    /// taken under the store's case rule.
    pub fn reserve(&self, nickname: &Nickname) -> Result<(), ValidationError> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);

        match entries.entry(self.case.fold(nickname.as_str())) {
            Entry::Occupied(_) => Err(ValidationError::DuplicateNickname {
                nickname: nickname.to_string(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(nickname.to_string());
                debug!(nickname = %nickname, "Nickname reserved");
                Ok(())
            }
        }
    }

    /// Frees the slot holding `nickname`. Returns false if nothing was held.
    pub fn release(&self, nickname: &str) -> bool {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.remove(&self.case.fold(nickname)).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Nicknames currently held, sorted.
    pub fn snapshot(&self) -> Vec<String> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        let mut nicknames: Vec<String> = entries.values().cloned().collect();
        nicknames.sort();
        nicknames
    }
}

impl NicknameRepository for InMemoryNicknameRepository {
    fn exists(&self, nickname: &str, case: CaseSensitivity) -> bool {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);

        match (self.case, case) {
            (CaseSensitivity::Sensitive, CaseSensitivity::Sensitive)
            | (CaseSensitivity::Insensitive, CaseSensitivity::Insensitive) => {
                entries.contains_key(&self.case.fold(nickname))
            }
            (CaseSensitivity::Insensitive, CaseSensitivity::Sensitive) => entries
                .get(&self.case.fold(nickname))
                .is_some_and(|held| held == nickname),
            (CaseSensitivity::Sensitive, CaseSensitivity::Insensitive) => {
                entries.values().any(|held| case.matches(held, nickname))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::NicknamePolicy;

    fn nickname(value: &str) -> Nickname {
        NicknamePolicy::default()
            .validate(value, &Vec::<String>::new())
            .unwrap()
    }

    #[test]
    fn test_reserve_then_exists() {
        let repo = InMemoryNicknameRepository::default();
        assert!(repo.is_empty());

        repo.reserve(&nickname("john_doe")).unwrap();

        assert_eq!(repo.len(), 1);
        assert!(repo.exists("john_doe", CaseSensitivity::Sensitive));
        assert!(!repo.exists("John_Doe", CaseSensitivity::Sensitive));
        assert!(repo.exists("John_Doe", CaseSensitivity::Insensitive));
    }

    #[test]
    fn test_reserve_twice_fails() {
        let repo = InMemoryNicknameRepository::default();
        repo.reserve(&nickname("john_doe")).unwrap();

        assert_eq!(
            repo.reserve(&nickname("john_doe")),
            Err(ValidationError::DuplicateNickname {
                nickname: "john_doe".to_string()
            })
        );
    }

    #[test]
    fn test_insensitive_store_folds_case() {
        let repo = InMemoryNicknameRepository::new(CaseSensitivity::Insensitive);
        repo.reserve(&nickname("Alice")).unwrap();

        assert!(repo.reserve(&nickname("ALICE")).is_err());
        assert!(repo.exists("alice", CaseSensitivity::Insensitive));
        assert!(repo.exists("Alice", CaseSensitivity::Sensitive));
        assert!(!repo.exists("alice", CaseSensitivity::Sensitive));
        assert_eq!(repo.snapshot(), vec!["Alice".to_string()]);
    }

    #[test]
    fn test_insensitive_store_folds_final_sigma() {
        let repo = InMemoryNicknameRepository::new(CaseSensitivity::Insensitive);
        repo.reserve(&nickname("ΟΔΟΣ")).unwrap();

        assert!(repo.exists("οδοσ", CaseSensitivity::Insensitive));
        assert!(matches!(
            repo.reserve(&nickname("οδοσ")),
            Err(ValidationError::DuplicateNickname { .. })
        ));
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_release() {
        let repo = InMemoryNicknameRepository::with_nicknames(CaseSensitivity::Sensitive, ["a_b_c"]);
        assert!(repo.release("a_b_c"));
        assert!(!repo.release("a_b_c"));
        assert!(repo.is_empty());
    }

    #[test]
    fn test_with_nicknames_ignores_folded_duplicates() {
        let repo = InMemoryNicknameRepository::with_nicknames(
            CaseSensitivity::Insensitive,
            ["bob", "BOB", "carol"],
        );
        assert_eq!(repo.snapshot(), vec!["bob".to_string(), "carol".to_string()]);
    }
}
